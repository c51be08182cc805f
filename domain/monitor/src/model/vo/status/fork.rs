use super::{RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// Process states of a forked job, using the `ps` STAT letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForkJobStatus {
    Pending,
    Runnable,
    Sleeping,
    Idle,
    UninterruptableSleep,
    UninterruptableWait,
    Stopped,
    Zombie,
    Dead,
    Terminated,
    Completed,
    Unknown,
}

impl RemoteJobStatus for ForkJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const PAUSED_IS_DONE: bool = false;

    fn values() -> &'static [Self] {
        &[
            Self::Pending,
            Self::Runnable,
            Self::Sleeping,
            Self::Idle,
            Self::UninterruptableSleep,
            Self::UninterruptableWait,
            Self::Stopped,
            Self::Zombie,
            Self::Dead,
            Self::Terminated,
            Self::Completed,
            Self::Unknown,
        ]
    }

    fn descriptor(&self) -> StatusDescriptor {
        let (code, description, lifecycle) = match self {
            Self::Pending => ("P", "Process is waiting to be started.", QUEUED),
            Self::Runnable => ("R", "Process is running or runnable.", RUNNING),
            Self::Sleeping => ("S", "Process is in an interruptible sleep.", RUNNING),
            Self::Idle => ("I", "Process is idle.", RUNNING),
            Self::UninterruptableSleep => ("D", "Process is in an uninterruptible sleep.", RUNNING),
            Self::UninterruptableWait => ("U", "Process is in an uninterruptible wait.", RUNNING),
            Self::Stopped => ("T", "Process was stopped by a job control signal.", PAUSED),
            Self::Zombie => ("Z", "Process exited but was not reaped by its parent.", TERMINAL),
            Self::Dead => ("X", "Process is dead.", TERMINAL),
            Self::Terminated => ("TERMINATED", "Process was killed by a signal.", TERMINAL),
            Self::Completed => ("COMPLETED", "Process is no longer running.", TERMINAL),
            Self::Unknown => ("", "Process is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[Self::Pending]
    }

    fn running_statuses() -> &'static [Self] {
        &[
            Self::Runnable,
            Self::Sleeping,
            Self::Idle,
            Self::UninterruptableSleep,
            Self::UninterruptableWait,
        ]
    }

    fn paused_statuses() -> &'static [Self] {
        &[Self::Stopped]
    }

    fn failed_statuses() -> &'static [Self] {
        &[Self::Dead, Self::Terminated]
    }

    fn unrecoverable_statuses() -> &'static [Self] {
        &[Self::Zombie]
    }

    fn unknown_statuses() -> &'static [Self] {
        &[Self::Unknown]
    }
}
