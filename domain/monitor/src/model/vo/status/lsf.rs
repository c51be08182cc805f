use super::{RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// IBM Spectrum LSF job states as shown by `bjobs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LsfJobStatus {
    Pend,
    Prov,
    Psusp,
    Run,
    Ususp,
    Ssusp,
    Done,
    Exit,
    Wait,
    Zombi,
    Unkwn,
    Unknown,
}

impl RemoteJobStatus for LsfJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const PAUSED_IS_DONE: bool = true;

    fn values() -> &'static [Self] {
        &[
            Self::Pend,
            Self::Prov,
            Self::Psusp,
            Self::Run,
            Self::Ususp,
            Self::Ssusp,
            Self::Done,
            Self::Exit,
            Self::Wait,
            Self::Zombi,
            Self::Unkwn,
            Self::Unknown,
        ]
    }

    fn descriptor(&self) -> StatusDescriptor {
        let (code, description, lifecycle) = match self {
            Self::Pend => ("PEND", "The job is pending. It has not yet been started.", QUEUED),
            Self::Prov => (
                "PROV",
                "The job has been dispatched to a power-saved host that is waking up.",
                QUEUED,
            ),
            Self::Psusp => (
                "PSUSP",
                "The job has been suspended while pending, either by its owner or the administrator.",
                PAUSED,
            ),
            Self::Run => ("RUN", "The job is currently running.", RUNNING),
            Self::Ususp => (
                "USUSP",
                "The job has been suspended while running, either by its owner or the administrator.",
                PAUSED,
            ),
            Self::Ssusp => ("SSUSP", "The job has been suspended by LSF.", PAUSED),
            Self::Done => ("DONE", "The job has terminated with status of 0.", TERMINAL),
            Self::Exit => ("EXIT", "The job has terminated with a non-zero status.", TERMINAL),
            Self::Wait => (
                "WAIT",
                "The job is a member of a chunk job that is waiting to run.",
                QUEUED,
            ),
            Self::Zombi => (
                "ZOMBI",
                "The job was killed while its execution host was unreachable.",
                TERMINAL,
            ),
            Self::Unkwn => (
                "UNKWN",
                "The batch daemon lost contact with the execution host.",
                TERMINAL,
            ),
            Self::Unknown => ("", "The job is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[Self::Pend, Self::Prov, Self::Wait]
    }

    fn running_statuses() -> &'static [Self] {
        &[Self::Run]
    }

    fn paused_statuses() -> &'static [Self] {
        &[Self::Psusp, Self::Ususp, Self::Ssusp]
    }

    fn failed_statuses() -> &'static [Self] {
        &[Self::Exit]
    }

    fn unrecoverable_statuses() -> &'static [Self] {
        &[Self::Zombi]
    }

    fn unknown_statuses() -> &'static [Self] {
        &[Self::Unknown, Self::Unkwn]
    }
}
