use super::{RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// Slurm job state names as reported by `sacct` and `squeue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlurmJobStatus {
    BootFail,
    Cancelled,
    Deadline,
    Failed,
    NodeFail,
    OutOfMemory,
    Preempted,
    Revoked,
    Timeout,
    Eqw,
    Configuring,
    Pending,
    Requeued,
    Running,
    Resizing,
    Completing,
    Suspended,
    Completed,
    Unknown,
}

impl RemoteJobStatus for SlurmJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const PAUSED_IS_DONE: bool = false;

    fn values() -> &'static [Self] {
        &[
            Self::BootFail,
            Self::Cancelled,
            Self::Deadline,
            Self::Failed,
            Self::NodeFail,
            Self::OutOfMemory,
            Self::Preempted,
            Self::Revoked,
            Self::Timeout,
            Self::Eqw,
            Self::Configuring,
            Self::Pending,
            Self::Requeued,
            Self::Running,
            Self::Resizing,
            Self::Completing,
            Self::Suspended,
            Self::Completed,
            Self::Unknown,
        ]
    }

    fn descriptor(&self) -> StatusDescriptor {
        let (code, description, lifecycle) = match self {
            Self::BootFail => ("BOOT_FAIL", "Job terminated due to launch failure.", TERMINAL),
            Self::Cancelled => (
                "CANCELLED",
                "Job was explicitly cancelled by the user or system administrator.",
                TERMINAL,
            ),
            Self::Deadline => ("DEADLINE", "Job terminated on deadline.", TERMINAL),
            Self::Failed => (
                "FAILED",
                "Job terminated with non-zero exit code or other failure condition.",
                TERMINAL,
            ),
            Self::NodeFail => (
                "NODE_FAIL",
                "Job terminated due to failure of one or more allocated nodes.",
                TERMINAL,
            ),
            Self::OutOfMemory => ("OUT_OF_MEMORY", "Job experienced an out of memory error.", TERMINAL),
            Self::Preempted => ("PREEMPTED", "Job terminated due to preemption.", TERMINAL),
            Self::Revoked => (
                "REVOKED",
                "Sibling was removed from cluster due to other cluster starting the job.",
                TERMINAL,
            ),
            Self::Timeout => ("TIMEOUT", "Job terminated upon reaching its time limit.", TERMINAL),
            Self::Eqw => (
                "EQW",
                "Job started but the scheduler could not clean up after it.",
                TERMINAL,
            ),
            Self::Configuring => (
                "CONFIGURING",
                "Job has been allocated resources that are waiting to become ready.",
                QUEUED,
            ),
            Self::Pending => ("PENDING", "Job is awaiting resource allocation.", QUEUED),
            Self::Requeued => ("REQUEUED", "Job was requeued.", QUEUED),
            Self::Running => ("RUNNING", "Job currently has an allocation.", RUNNING),
            Self::Resizing => ("RESIZING", "Job is about to change size.", RUNNING),
            Self::Completing => ("COMPLETING", "Job is in the process of completing.", RUNNING),
            Self::Suspended => (
                "SUSPENDED",
                "Job has an allocation, but execution has been suspended.",
                PAUSED,
            ),
            Self::Completed => (
                "COMPLETED",
                "Job has terminated all processes on all nodes with an exit code of zero.",
                TERMINAL,
            ),
            Self::Unknown => ("", "Job is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[Self::Pending, Self::Configuring, Self::Requeued]
    }

    fn running_statuses() -> &'static [Self] {
        &[Self::Running, Self::Resizing, Self::Completing]
    }

    fn paused_statuses() -> &'static [Self] {
        &[Self::Suspended]
    }

    fn failed_statuses() -> &'static [Self] {
        &[
            Self::BootFail,
            Self::Cancelled,
            Self::Deadline,
            Self::Failed,
            Self::NodeFail,
            Self::Preempted,
            Self::OutOfMemory,
            Self::Revoked,
            Self::Timeout,
        ]
    }

    fn unrecoverable_statuses() -> &'static [Self] {
        &[Self::Eqw]
    }

    fn unknown_statuses() -> &'static [Self] {
        &[Self::Unknown]
    }
}
