use super::{CodeMatch, RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// Sun/Oracle/Univa Grid Engine state strings from `qstat`.
///
/// Grid Engine states are combinations of flag letters where case matters:
/// `s` is suspended by the user while `S` is a suspended queue, `r` is
/// running while `R` is restarted. Lookup is therefore exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SgeJobStatus {
    QueuedWaiting,
    Waiting,
    Hold,
    HoldQueuedWaiting,
    HoldRestartedQueuedWaiting,
    Restarted,
    Transferring,
    Running,
    RestartedRunning,
    RestartedTransferring,
    Suspended,
    RestartedSuspended,
    RestartedTransferringQueueSuspended,
    RestartedTransferringSuspended,
    RestartedThresholdSuspended,
    RestartedTransferringThresholdSuspended,
    TransferringSuspended,
    QueueSuspended,
    TransferringQueueSuspended,
    ThresholdSuspended,
    TransferringThresholdSuspended,
    ErrorQueuedWaiting,
    ErrorHoldQueuedWaiting,
    ErrorHoldRestartedQueuedWaiting,
    Deleted,
    DeletedRunning,
    DeletedTransferring,
    DeletedThresholdSuspended,
    DeletedRestartedRunning,
    DeletedRestartedTransferring,
    DeletedSuspended,
    DeletedRestartedSuspended,
    DeletedRestartedQueueSuspended,
    DeletedRestartedThresholdSuspended,
    Unknown,
}

impl RemoteJobStatus for SgeJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const CODE_MATCH: CodeMatch = CodeMatch::Exact;
    const PAUSED_IS_DONE: bool = false;

    fn values() -> &'static [Self] {
        &[
            Self::QueuedWaiting,
            Self::Waiting,
            Self::Hold,
            Self::HoldQueuedWaiting,
            Self::HoldRestartedQueuedWaiting,
            Self::Restarted,
            Self::Transferring,
            Self::Running,
            Self::RestartedRunning,
            Self::RestartedTransferring,
            Self::Suspended,
            Self::RestartedSuspended,
            Self::RestartedTransferringQueueSuspended,
            Self::RestartedTransferringSuspended,
            Self::RestartedThresholdSuspended,
            Self::RestartedTransferringThresholdSuspended,
            Self::TransferringSuspended,
            Self::QueueSuspended,
            Self::TransferringQueueSuspended,
            Self::ThresholdSuspended,
            Self::TransferringThresholdSuspended,
            Self::ErrorQueuedWaiting,
            Self::ErrorHoldQueuedWaiting,
            Self::ErrorHoldRestartedQueuedWaiting,
            Self::Deleted,
            Self::DeletedRunning,
            Self::DeletedTransferring,
            Self::DeletedThresholdSuspended,
            Self::DeletedRestartedRunning,
            Self::DeletedRestartedTransferring,
            Self::DeletedSuspended,
            Self::DeletedRestartedSuspended,
            Self::DeletedRestartedQueueSuspended,
            Self::DeletedRestartedThresholdSuspended,
            Self::Unknown,
        ]
    }

    fn descriptor(&self) -> StatusDescriptor {
        let (code, description, lifecycle) = match self {
            Self::QueuedWaiting => ("qw", "Job is queued and waiting.", QUEUED),
            Self::Waiting => ("w", "Job is waiting.", QUEUED),
            Self::Hold => ("h", "Job is on hold.", QUEUED),
            Self::HoldQueuedWaiting => ("hqw", "Job is on hold, queued and waiting.", QUEUED),
            Self::HoldRestartedQueuedWaiting => (
                "hRqw",
                "Job was restarted and is on hold, queued and waiting.",
                QUEUED,
            ),
            Self::Restarted => ("R", "Job was restarted.", RUNNING),
            Self::Transferring => ("t", "Job is being transferred to its execution host.", RUNNING),
            Self::Running => ("r", "Job is running.", RUNNING),
            Self::RestartedRunning => ("Rr", "Job was restarted and is running.", RUNNING),
            Self::RestartedTransferring => ("Rt", "Job was restarted and is being transferred.", RUNNING),
            Self::Suspended => ("s", "Job was suspended while running.", PAUSED),
            Self::RestartedSuspended => ("Rs", "Job was restarted and then suspended.", PAUSED),
            Self::RestartedTransferringQueueSuspended => (
                "RtS",
                "Job was restarted and its queue suspended during transfer.",
                PAUSED,
            ),
            Self::RestartedTransferringSuspended => (
                "Rts",
                "Job was restarted and suspended during transfer.",
                PAUSED,
            ),
            Self::RestartedThresholdSuspended => (
                "RT",
                "Job was restarted and suspended by a queue threshold.",
                PAUSED,
            ),
            Self::RestartedTransferringThresholdSuspended => (
                "RtT",
                "Job was restarted and suspended by a queue threshold during transfer.",
                PAUSED,
            ),
            Self::TransferringSuspended => ("ts", "Job was suspended during transfer.", PAUSED),
            Self::QueueSuspended => ("S", "Job queue was suspended.", PAUSED),
            Self::TransferringQueueSuspended => (
                "tS",
                "Job queue was suspended during transfer.",
                PAUSED,
            ),
            Self::ThresholdSuspended => ("T", "Job was suspended by a queue threshold.", PAUSED),
            Self::TransferringThresholdSuspended => (
                "tT",
                "Job was suspended by a queue threshold during transfer.",
                PAUSED,
            ),
            Self::ErrorQueuedWaiting => ("Eqw", "Job could not be started and is in error.", TERMINAL),
            Self::ErrorHoldQueuedWaiting => (
                "Ehqw",
                "Job is on hold and could not be started.",
                TERMINAL,
            ),
            Self::ErrorHoldRestartedQueuedWaiting => (
                "EhRqw",
                "Job was restarted, is on hold and could not be started.",
                TERMINAL,
            ),
            Self::Deleted => ("d", "Job was deleted.", TERMINAL),
            Self::DeletedRunning => ("dr", "Job was deleted while running.", TERMINAL),
            Self::DeletedTransferring => ("dt", "Job was deleted during transfer.", TERMINAL),
            Self::DeletedThresholdSuspended => (
                "dT",
                "Job was deleted while suspended by a queue threshold.",
                TERMINAL,
            ),
            Self::DeletedRestartedRunning => (
                "dRr",
                "Job was deleted while running after a restart.",
                TERMINAL,
            ),
            Self::DeletedRestartedTransferring => (
                "dRt",
                "Job was deleted during transfer after a restart.",
                TERMINAL,
            ),
            Self::DeletedSuspended => ("ds", "Job was deleted while suspended.", TERMINAL),
            Self::DeletedRestartedSuspended => (
                "dRs",
                "Job was deleted while suspended after a restart.",
                TERMINAL,
            ),
            Self::DeletedRestartedQueueSuspended => (
                "dRS",
                "Job was deleted while its queue was suspended after a restart.",
                TERMINAL,
            ),
            Self::DeletedRestartedThresholdSuspended => (
                "dRT",
                "Job was deleted while suspended by a queue threshold after a restart.",
                TERMINAL,
            ),
            Self::Unknown => ("", "Job is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[
            Self::QueuedWaiting,
            Self::Waiting,
            Self::HoldQueuedWaiting,
            Self::HoldRestartedQueuedWaiting,
        ]
    }

    fn running_statuses() -> &'static [Self] {
        &[
            Self::Running,
            Self::Transferring,
            Self::Restarted,
            Self::RestartedRunning,
            Self::RestartedTransferring,
        ]
    }

    fn paused_statuses() -> &'static [Self] {
        &[
            Self::Suspended,
            Self::QueueSuspended,
            Self::TransferringSuspended,
            Self::TransferringQueueSuspended,
            Self::ThresholdSuspended,
            Self::TransferringThresholdSuspended,
            Self::RestartedTransferringSuspended,
            Self::RestartedSuspended,
            Self::RestartedTransferringQueueSuspended,
            Self::RestartedThresholdSuspended,
            Self::RestartedTransferringThresholdSuspended,
        ]
    }

    fn failed_statuses() -> &'static [Self] {
        &[
            Self::ErrorQueuedWaiting,
            Self::ErrorHoldQueuedWaiting,
            Self::ErrorHoldRestartedQueuedWaiting,
        ]
    }

    fn unrecoverable_statuses() -> &'static [Self] {
        &[
            Self::Deleted,
            Self::DeletedRunning,
            Self::DeletedTransferring,
            Self::DeletedThresholdSuspended,
            Self::DeletedRestartedRunning,
            Self::DeletedRestartedTransferring,
            Self::DeletedSuspended,
            Self::DeletedRestartedSuspended,
            Self::DeletedRestartedQueueSuspended,
            Self::DeletedRestartedThresholdSuspended,
        ]
    }

    fn unknown_statuses() -> &'static [Self] {
        &[Self::Unknown]
    }
}

#[cfg(test)]
mod tests {
    use super::super::{assert_taxonomy_invariants, LifecycleHint, StatusClassification};
    use super::*;

    #[test]
    fn invariants() {
        assert_taxonomy_invariants::<SgeJobStatus>();
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(SgeJobStatus::value_of_code("s"), SgeJobStatus::Suspended);
        assert_eq!(SgeJobStatus::value_of_code("S"), SgeJobStatus::QueueSuspended);
        assert_eq!(SgeJobStatus::value_of_code("r"), SgeJobStatus::Running);
        assert_eq!(SgeJobStatus::value_of_code("R"), SgeJobStatus::Restarted);
        assert_eq!(SgeJobStatus::value_of_code("Rts"), SgeJobStatus::RestartedTransferringSuspended);
        assert_eq!(SgeJobStatus::value_of_code("RtS"), SgeJobStatus::RestartedTransferringQueueSuspended);
        assert_eq!(SgeJobStatus::value_of_code("QW"), SgeJobStatus::Unknown);
        assert_eq!(SgeJobStatus::value_of_code("eqw"), SgeJobStatus::Unknown);
    }

    #[test]
    fn suspended_is_not_done() {
        assert!(!SgeJobStatus::Suspended.is_done_status());
        assert!(!SgeJobStatus::QueueSuspended.is_done_status());
        assert!(SgeJobStatus::DeletedRunning.is_done_status());
        assert!(SgeJobStatus::DeletedRunning.is_unrecoverable_status());
        assert!(SgeJobStatus::ErrorQueuedWaiting.is_failure_status());
        assert!(SgeJobStatus::ErrorQueuedWaiting.is_done_status());
    }

    #[test]
    fn hold_is_only_a_hint() {
        let hold = SgeJobStatus::Hold;
        assert_eq!(hold.mapped_lifecycle(), Some(LifecycleHint::Queued));
        assert!(!hold.is_queued_status());
        assert!(hold.is_done_status());
    }
}
