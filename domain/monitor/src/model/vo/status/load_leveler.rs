use super::{RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// IBM Tivoli Workload Scheduler LoadLeveler status abbreviations from `llq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadLevelerJobStatus {
    Idle,
    Pending,
    Starting,
    Deferred,
    NotQueued,
    Vacated,
    RejectPending,
    Running,
    Checkpointing,
    CompletePending,
    ResumePending,
    PreemptPending,
    VacatePending,
    RemovePending,
    UserHold,
    SystemHold,
    UserAndSystemHold,
    Preempted,
    Canceled,
    Removed,
    NotRun,
    Terminated,
    SubmissionError,
    Rejected,
    Completed,
    Unknown,
}

impl RemoteJobStatus for LoadLevelerJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const PAUSED_IS_DONE: bool = false;

    fn values() -> &'static [Self] {
        &[
            Self::Idle,
            Self::Pending,
            Self::Starting,
            Self::Deferred,
            Self::NotQueued,
            Self::Vacated,
            Self::RejectPending,
            Self::Running,
            Self::Checkpointing,
            Self::CompletePending,
            Self::ResumePending,
            Self::PreemptPending,
            Self::VacatePending,
            Self::RemovePending,
            Self::UserHold,
            Self::SystemHold,
            Self::UserAndSystemHold,
            Self::Preempted,
            Self::Canceled,
            Self::Removed,
            Self::NotRun,
            Self::Terminated,
            Self::SubmissionError,
            Self::Rejected,
            Self::Completed,
            Self::Unknown,
        ]
    }

    fn descriptor(&self) -> StatusDescriptor {
        let (code, description, lifecycle) = match self {
            Self::Idle => ("I", "The job is being considered to run on a machine.", QUEUED),
            Self::Pending => ("P", "The job is in the process of starting.", QUEUED),
            Self::Starting => ("ST", "The job is starting on the assigned machines.", QUEUED),
            Self::Deferred => ("D", "The job will not be dispatched until its start time.", QUEUED),
            Self::NotQueued => ("NQ", "The job is not being considered to run.", QUEUED),
            Self::Vacated => ("V", "The job was vacated and returned to the queue.", QUEUED),
            Self::RejectPending => ("XP", "The job did not start and is being rejected.", QUEUED),
            Self::Running => ("R", "The job is running.", RUNNING),
            Self::Checkpointing => ("CK", "The job is being checkpointed.", RUNNING),
            Self::CompletePending => ("CP", "The job is in the process of completing.", RUNNING),
            Self::ResumePending => ("MP", "The job is in the process of resuming.", RUNNING),
            Self::PreemptPending => ("EP", "The job is in the process of being preempted.", RUNNING),
            Self::VacatePending => ("VP", "The job is in the process of being vacated.", RUNNING),
            Self::RemovePending => ("RP", "The job is in the process of being removed.", RUNNING),
            Self::UserHold => ("H", "The job was put on hold by its owner.", PAUSED),
            Self::SystemHold => ("S", "The job was put on hold by the administrator.", PAUSED),
            Self::UserAndSystemHold => ("HS", "The job is held by its owner and the administrator.", PAUSED),
            Self::Preempted => ("E", "The job was preempted and is suspended.", PAUSED),
            Self::Canceled => ("CA", "The job was canceled.", TERMINAL),
            Self::Removed => ("RM", "The job was removed by its owner or the administrator.", TERMINAL),
            Self::NotRun => ("NR", "The job will not run because a dependency was not met.", TERMINAL),
            Self::Terminated => ("TX", "The job was terminated.", TERMINAL),
            Self::SubmissionError => ("SX", "The job could not be submitted.", TERMINAL),
            Self::Rejected => ("X", "The job was rejected by the machine it was dispatched to.", TERMINAL),
            Self::Completed => ("C", "The job has completed.", TERMINAL),
            Self::Unknown => ("", "The job is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[
            Self::Idle,
            Self::Pending,
            Self::Starting,
            Self::Deferred,
            Self::NotQueued,
            Self::Vacated,
            Self::RejectPending,
        ]
    }

    fn running_statuses() -> &'static [Self] {
        &[
            Self::Running,
            Self::Checkpointing,
            Self::CompletePending,
            Self::ResumePending,
            Self::PreemptPending,
            Self::VacatePending,
            Self::RemovePending,
        ]
    }

    fn paused_statuses() -> &'static [Self] {
        &[
            Self::UserHold,
            Self::SystemHold,
            Self::UserAndSystemHold,
            Self::Preempted,
        ]
    }

    fn failed_statuses() -> &'static [Self] {
        &[Self::Canceled, Self::Removed, Self::NotRun, Self::Terminated]
    }

    fn unrecoverable_statuses() -> &'static [Self] {
        &[Self::SubmissionError, Self::Rejected]
    }

    fn unknown_statuses() -> &'static [Self] {
        &[Self::Unknown]
    }
}

#[cfg(test)]
mod tests {
    use super::super::{assert_taxonomy_invariants, StatusClassification};
    use super::*;

    #[test]
    fn invariants() {
        assert_taxonomy_invariants::<LoadLevelerJobStatus>();
    }

    #[test]
    fn two_letter_codes() {
        assert_eq!(LoadLevelerJobStatus::value_of_code("st"), LoadLevelerJobStatus::Starting);
        assert_eq!(LoadLevelerJobStatus::value_of_code("NR"), LoadLevelerJobStatus::NotRun);
        assert_eq!(LoadLevelerJobStatus::value_of_code("hs"), LoadLevelerJobStatus::UserAndSystemHold);
        assert_eq!(LoadLevelerJobStatus::value_of_code("ZZ"), LoadLevelerJobStatus::Unknown);
    }

    #[test]
    fn held_is_not_done() {
        assert!(LoadLevelerJobStatus::UserHold.is_paused_status());
        assert!(!LoadLevelerJobStatus::UserHold.is_done_status());
        assert!(LoadLevelerJobStatus::Completed.is_done_status());
        assert!(LoadLevelerJobStatus::NotRun.is_done_status());
        assert!(LoadLevelerJobStatus::NotRun.is_failure_status());
        assert!(LoadLevelerJobStatus::Rejected.is_unrecoverable_status());
    }
}
