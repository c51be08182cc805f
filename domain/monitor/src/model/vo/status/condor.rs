use super::{CodeMatch, RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// HTCondor job status numbers as reported by `condor_q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CondorJobStatus {
    Submitted,
    Executing,
    Terminated,
    Failed,
    Aborted,
    Held,
    MissingOutput,
    MissingInput,
    Unknown,
}

impl RemoteJobStatus for CondorJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const CODE_MATCH: CodeMatch = CodeMatch::ZeroPaddedIgnoreCase;
    const PAUSED_IS_DONE: bool = true;

    fn values() -> &'static [Self] {
        &[
            Self::Submitted,
            Self::Executing,
            Self::Terminated,
            Self::Failed,
            Self::Aborted,
            Self::Held,
            Self::MissingOutput,
            Self::MissingInput,
            Self::Unknown,
        ]
    }

    fn descriptor(&self) -> StatusDescriptor {
        let (code, description, lifecycle) = match self {
            Self::Submitted => ("000", "Job was submitted to the condor queue.", QUEUED),
            Self::Executing => ("001", "Job is executing.", RUNNING),
            Self::Terminated => ("005", "Job completed.", TERMINAL),
            Self::Failed => ("007", "Job failed with a shadow exception.", TERMINAL),
            Self::Aborted => ("009", "Job was aborted by the user.", TERMINAL),
            Self::Held => ("012", "Job was held.", PAUSED),
            Self::MissingOutput => ("769", "Job output could not be found.", TERMINAL),
            Self::MissingInput => ("884", "Job input could not be found.", TERMINAL),
            Self::Unknown => ("", "Job is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[Self::Submitted]
    }

    fn running_statuses() -> &'static [Self] {
        &[Self::Executing]
    }

    fn paused_statuses() -> &'static [Self] {
        &[Self::Held]
    }

    fn failed_statuses() -> &'static [Self] {
        &[
            Self::Failed,
            Self::Aborted,
            Self::MissingInput,
            Self::MissingOutput,
        ]
    }

    fn unrecoverable_statuses() -> &'static [Self] {
        &[]
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
        assert_taxonomy_invariants::<CondorJobStatus>();
    }

    #[test]
    fn short_codes_are_zero_padded() {
        assert_eq!(CondorJobStatus::value_of_code("0"), CondorJobStatus::Submitted);
        assert_eq!(CondorJobStatus::value_of_code("1"), CondorJobStatus::Executing);
        assert_eq!(CondorJobStatus::value_of_code("12"), CondorJobStatus::Held);
        assert_eq!(CondorJobStatus::value_of_code("769"), CondorJobStatus::MissingOutput);
        assert_eq!(CondorJobStatus::value_of_code("4"), CondorJobStatus::Unknown);
        assert_eq!(CondorJobStatus::value_of_code(""), CondorJobStatus::Unknown);
    }

    #[test]
    fn held_counts_as_done() {
        assert!(CondorJobStatus::Held.is_paused_status());
        assert!(CondorJobStatus::Held.is_done_status());
        assert!(CondorJobStatus::Terminated.is_done_status());
        assert!(!CondorJobStatus::Terminated.is_failure_status());
        assert!(CondorJobStatus::Aborted.is_done_status());
        assert!(!CondorJobStatus::Unknown.is_done_status());
    }
}
