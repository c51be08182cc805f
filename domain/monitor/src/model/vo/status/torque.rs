use super::{RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// Torque and Moab `job_state` letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TorqueJobStatus {
    Transfer,
    Queued,
    Waiting,
    Held,
    Exiting,
    Running,
    Suspended,
    Finished,
    Completed,
    Unknown,
}

impl RemoteJobStatus for TorqueJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const PAUSED_IS_DONE: bool = true;

    fn values() -> &'static [Self] {
        &[
            Self::Transfer,
            Self::Queued,
            Self::Waiting,
            Self::Held,
            Self::Exiting,
            Self::Running,
            Self::Suspended,
            Self::Finished,
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
            Self::Exiting => ("E", "Job is exiting after having run.", RUNNING),
            Self::Running => ("R", "Job is running.", RUNNING),
            Self::Suspended => ("S", "Job is suspended.", PAUSED),
            Self::Finished => ("F", "Job is finished.", TERMINAL),
            Self::Completed => ("C", "Job is completed after having run.", TERMINAL),
            Self::Unknown => ("", "Job is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[Self::Transfer, Self::Queued, Self::Waiting, Self::Held]
    }

    fn running_statuses() -> &'static [Self] {
        &[Self::Exiting, Self::Running]
    }

    fn paused_statuses() -> &'static [Self] {
        &[Self::Suspended]
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
