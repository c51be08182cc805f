use super::{RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// Generic status vocabulary for custom monitors that report JSON or
/// test-runner style words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultJobStatus {
    Q,
    Queued,
    Pass,
    R,
    Running,
    Warn,
    P,
    Paused,
    C,
    Completed,
    F,
    Failed,
    Fail,
    Unknown,
}

impl RemoteJobStatus for DefaultJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const PAUSED_IS_DONE: bool = false;

    fn values() -> &'static [Self] {
        &[
            Self::Q,
            Self::Queued,
            Self::Pass,
            Self::R,
            Self::Running,
            Self::Warn,
            Self::P,
            Self::Paused,
            Self::C,
            Self::Completed,
            Self::F,
            Self::Failed,
            Self::Fail,
            Self::Unknown,
        ]
    }

    fn descriptor(&self) -> StatusDescriptor {
        let (code, description, lifecycle) = match self {
            Self::Q => ("Q", "Job is queued.", QUEUED),
            Self::Queued => ("QUEUED", "Job is queued.", QUEUED),
            Self::Pass => ("pass", "Job is running and its checks pass.", RUNNING),
            Self::R => ("R", "Job is running.", RUNNING),
            Self::Running => ("RUNNING", "Job is running.", RUNNING),
            Self::Warn => ("warn", "Job is running with warnings.", RUNNING),
            Self::P => ("P", "Job is paused.", PAUSED),
            Self::Paused => ("PAUSED", "Job is paused.", PAUSED),
            Self::C => ("C", "Job completed.", TERMINAL),
            Self::Completed => ("COMPLETED", "Job completed.", TERMINAL),
            Self::F => ("F", "Job failed.", TERMINAL),
            Self::Failed => ("FAILED", "Job failed.", TERMINAL),
            Self::Fail => ("fail", "Job checks failed.", TERMINAL),
            Self::Unknown => ("", "Job is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[Self::Queued, Self::Q]
    }

    fn running_statuses() -> &'static [Self] {
        &[Self::R, Self::Running, Self::Pass, Self::Warn]
    }

    fn paused_statuses() -> &'static [Self] {
        &[Self::Paused, Self::P]
    }

    fn failed_statuses() -> &'static [Self] {
        &[Self::Failed, Self::F, Self::Fail]
    }

    fn unrecoverable_statuses() -> &'static [Self] {
        &[]
    }

    fn unknown_statuses() -> &'static [Self] {
        &[Self::Unknown]
    }
}
