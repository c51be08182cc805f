use super::{RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// PBS Professional / OpenPBS `job_state` letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PbsJobStatus {
    Transfer,
    Queued,
    Waiting,
    Held,
    ArrayBegun,
    Exiting,
    Running,
    SubjobExpired,
    Suspended,
    UserInterrupt,
    Finished,
    Moved,
    Completed,
    Unknown,
}

impl RemoteJobStatus for PbsJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const PAUSED_IS_DONE: bool = true;

    fn values() -> &'static [Self] {
        &[
            Self::Transfer,
            Self::Queued,
            Self::Waiting,
            Self::Held,
            Self::ArrayBegun,
            Self::Exiting,
            Self::Running,
            Self::SubjobExpired,
            Self::Suspended,
            Self::UserInterrupt,
            Self::Finished,
            Self::Moved,
            Self::Completed,
            Self::Unknown,
        ]
    }

    fn descriptor(&self) -> StatusDescriptor {
        let (code, description, lifecycle) = match self {
            Self::Transfer => ("T", "Job is being moved to a new location.", QUEUED),
            Self::Queued => ("Q", "Job is queued, eligible to run or be routed.", QUEUED),
            Self::Waiting => ("W", "Job is waiting for its execution time to be reached.", QUEUED),
            Self::Held => ("H", "Job is held.", QUEUED),
            Self::ArrayBegun => ("B", "Job array has at least one subjob running.", RUNNING),
            Self::Exiting => ("E", "Job is exiting after having run.", RUNNING),
            Self::Running => ("R", "Job is running.", RUNNING),
            Self::SubjobExpired => ("X", "Subjob has completed execution or has been deleted.", RUNNING),
            Self::Suspended => ("S", "Job is suspended by the server.", PAUSED),
            Self::UserInterrupt => (
                "U",
                "Job is suspended because the workstation became busy.",
                PAUSED,
            ),
            Self::Finished => ("F", "Job is finished.", TERMINAL),
            Self::Moved => ("M", "Job was moved to another server.", TERMINAL),
            Self::Completed => ("C", "Job is completed after having run.", TERMINAL),
            Self::Unknown => ("", "Job is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[
            Self::Transfer,
            Self::Queued,
            Self::Waiting,
            Self::Held,
            Self::Moved,
        ]
    }

    fn running_statuses() -> &'static [Self] {
        &[
            Self::ArrayBegun,
            Self::Exiting,
            Self::Running,
            Self::SubjobExpired,
        ]
    }

    fn paused_statuses() -> &'static [Self] {
        &[Self::Suspended, Self::UserInterrupt]
    }

    fn failed_statuses() -> &'static [Self] {
        &[]
    }

    fn unrecoverable_statuses() -> &'static [Self] {
        &[]
    }

    fn unknown_statuses() -> &'static [Self] {
        &[Self::Unknown]
    }
}
