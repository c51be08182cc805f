use super::{CodeMatch, RemoteJobStatus, StatusDescriptor, PAUSED, QUEUED, RUNNING, TERMINAL};

/// Event numbers written to an HTCondor job's user log (`runtime.log`).
///
/// The parser classifies a job by the most recent event in its log, so the
/// taxonomy covers every event HTCondor may emit, not only state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CondorLogJobStatus {
    JobSubmitted,
    JobExecuting,
    ErrorInExecutable,
    JobWasCheckpointed,
    JobEvictedFromMachine,
    JobTerminated,
    ImageSizeOfJobUpdated,
    ShadowException,
    GenericLogEvent,
    JobAborted,
    JobWasSuspended,
    JobWasUnsuspended,
    JobWasHeld,
    JobWasReleased,
    ParallelNodeExecuted,
    NodeTerminated,
    PostScriptTerminated,
    GlobusSubmit,
    GlobusSubmitFailed,
    GlobusResourceBackUp,
    DetectedDownGlobusResource,
    RemoteError,
    RemoteSystemCallSocketLost,
    RemoteSystemCallSocketReestablished,
    RemoteSystemCallReconnectFailure,
    GridResourceBackUp,
    DetectedDownGridResource,
    JobSubmittedToGridResource,
    JobAdInformationEventTriggered,
    JobRemoteStatusUnknown,
    JobRemoteStatusKnownAgain,
    JobStageIn,
    JobStageOut,
    JobClassadAttributeUpdate,
    PreSkipEvent,
    FactorySubmit,
    ClusterRemoved,
    FactoryPaused,
    FactoryResumed,
    NoEvent,
    MissingOutput,
    MissingInput,
    Unknown,
}

impl RemoteJobStatus for CondorLogJobStatus {
    const UNKNOWN: Self = Self::Unknown;
    const CODE_MATCH: CodeMatch = CodeMatch::ZeroPaddedIgnoreCase;
    const PAUSED_IS_DONE: bool = true;

    fn values() -> &'static [Self] {
        &[
            Self::JobSubmitted,
            Self::JobExecuting,
            Self::ErrorInExecutable,
            Self::JobWasCheckpointed,
            Self::JobEvictedFromMachine,
            Self::JobTerminated,
            Self::ImageSizeOfJobUpdated,
            Self::ShadowException,
            Self::GenericLogEvent,
            Self::JobAborted,
            Self::JobWasSuspended,
            Self::JobWasUnsuspended,
            Self::JobWasHeld,
            Self::JobWasReleased,
            Self::ParallelNodeExecuted,
            Self::NodeTerminated,
            Self::PostScriptTerminated,
            Self::GlobusSubmit,
            Self::GlobusSubmitFailed,
            Self::GlobusResourceBackUp,
            Self::DetectedDownGlobusResource,
            Self::RemoteError,
            Self::RemoteSystemCallSocketLost,
            Self::RemoteSystemCallSocketReestablished,
            Self::RemoteSystemCallReconnectFailure,
            Self::GridResourceBackUp,
            Self::DetectedDownGridResource,
            Self::JobSubmittedToGridResource,
            Self::JobAdInformationEventTriggered,
            Self::JobRemoteStatusUnknown,
            Self::JobRemoteStatusKnownAgain,
            Self::JobStageIn,
            Self::JobStageOut,
            Self::JobClassadAttributeUpdate,
            Self::PreSkipEvent,
            Self::FactorySubmit,
            Self::ClusterRemoved,
            Self::FactoryPaused,
            Self::FactoryResumed,
            Self::NoEvent,
            Self::MissingOutput,
            Self::MissingInput,
            Self::Unknown,
        ]
    }

    fn descriptor(&self) -> StatusDescriptor {
        let (code, description, lifecycle) = match self {
            Self::JobSubmitted => ("000", "The job was submitted.", QUEUED),
            Self::JobExecuting => ("001", "The job began executing on a machine.", RUNNING),
            Self::ErrorInExecutable => (
                "002",
                "The job could not run because the executable was bad.",
                TERMINAL,
            ),
            Self::JobWasCheckpointed => ("003", "The job's complete state was written to a checkpoint file.", RUNNING),
            Self::JobEvictedFromMachine => (
                "004",
                "The job was removed from a machine before it finished and went back to the queue.",
                QUEUED,
            ),
            Self::JobTerminated => ("005", "The job has completed.", TERMINAL),
            Self::ImageSizeOfJobUpdated => ("006", "The job's memory image size was updated.", RUNNING),
            Self::ShadowException => (
                "007",
                "The shadow process hit an error and the job will be rescheduled.",
                QUEUED,
            ),
            Self::GenericLogEvent => ("008", "A generic event was logged.", TERMINAL),
            Self::JobAborted => ("009", "The job was removed by the user.", TERMINAL),
            Self::JobWasSuspended => ("010", "The job was suspended.", PAUSED),
            Self::JobWasUnsuspended => ("011", "The job resumed after being suspended.", RUNNING),
            Self::JobWasHeld => ("012", "The job was put on hold.", PAUSED),
            Self::JobWasReleased => ("013", "The job was released from hold.", QUEUED),
            Self::ParallelNodeExecuted => ("014", "A parallel universe node began executing.", RUNNING),
            Self::NodeTerminated => ("015", "A parallel universe node completed.", TERMINAL),
            Self::PostScriptTerminated => ("016", "A DAG node's POST script completed.", TERMINAL),
            Self::GlobusSubmit => ("017", "The job was submitted to Globus.", QUEUED),
            Self::GlobusSubmitFailed => ("018", "Submission to Globus failed and will be retried.", QUEUED),
            Self::GlobusResourceBackUp => ("019", "The Globus resource came back up.", QUEUED),
            Self::DetectedDownGlobusResource => ("020", "The Globus resource was detected as down.", QUEUED),
            Self::RemoteError => ("021", "The starter or remote machine reported an error.", RUNNING),
            Self::RemoteSystemCallSocketLost => ("022", "The system call socket to the shadow was lost.", RUNNING),
            Self::RemoteSystemCallSocketReestablished => (
                "023",
                "The system call socket to the shadow was reestablished.",
                RUNNING,
            ),
            Self::RemoteSystemCallReconnectFailure => (
                "024",
                "Reconnecting the system call socket to the shadow failed.",
                RUNNING,
            ),
            Self::GridResourceBackUp => ("025", "The grid resource came back up.", QUEUED),
            Self::DetectedDownGridResource => ("026", "The grid resource was detected as down.", QUEUED),
            Self::JobSubmittedToGridResource => ("027", "The job was submitted to a grid resource.", QUEUED),
            Self::JobAdInformationEventTriggered => ("028", "A job ad information event was triggered.", RUNNING),
            Self::JobRemoteStatusUnknown => ("029", "The remote status of the job is unknown.", RUNNING),
            Self::JobRemoteStatusKnownAgain => ("030", "The remote status of the job is known again.", RUNNING),
            Self::JobStageIn => ("031", "The job is staging in input files.", RUNNING),
            Self::JobStageOut => ("032", "The job is staging out output files.", RUNNING),
            Self::JobClassadAttributeUpdate => ("033", "A job ClassAd attribute was updated.", RUNNING),
            Self::PreSkipEvent => ("034", "A DAG node's PRE script asked to skip the node.", RUNNING),
            Self::FactorySubmit => ("035", "A late materialization factory was submitted.", TERMINAL),
            Self::ClusterRemoved => ("036", "The job cluster was removed.", TERMINAL),
            Self::FactoryPaused => ("037", "The late materialization factory was paused.", PAUSED),
            Self::FactoryResumed => ("038", "The late materialization factory was resumed.", RUNNING),
            Self::NoEvent => ("039", "No event was recorded.", TERMINAL),
            Self::MissingOutput => ("769", "The job output could not be found.", TERMINAL),
            Self::MissingInput => ("884", "The job input could not be found.", TERMINAL),
            Self::Unknown => ("", "The job is in an unknown state.", TERMINAL),
        };
        StatusDescriptor::new(code, description, lifecycle)
    }

    fn queued_statuses() -> &'static [Self] {
        &[
            Self::JobSubmitted,
            Self::JobEvictedFromMachine,
            Self::ShadowException,
            Self::JobWasReleased,
            Self::GlobusSubmit,
            Self::GlobusSubmitFailed,
            Self::GlobusResourceBackUp,
            Self::DetectedDownGlobusResource,
            Self::GridResourceBackUp,
            Self::DetectedDownGridResource,
            Self::JobSubmittedToGridResource,
            Self::FactorySubmit,
        ]
    }

    fn running_statuses() -> &'static [Self] {
        &[
            Self::JobExecuting,
            Self::JobWasCheckpointed,
            Self::ImageSizeOfJobUpdated,
            Self::JobWasUnsuspended,
            Self::ParallelNodeExecuted,
            Self::RemoteError,
            Self::RemoteSystemCallSocketLost,
            Self::RemoteSystemCallSocketReestablished,
            Self::RemoteSystemCallReconnectFailure,
            Self::JobAdInformationEventTriggered,
            Self::JobRemoteStatusUnknown,
            Self::JobRemoteStatusKnownAgain,
            Self::JobStageIn,
            Self::JobStageOut,
            Self::JobClassadAttributeUpdate,
            Self::PreSkipEvent,
            Self::FactoryResumed,
        ]
    }

    fn paused_statuses() -> &'static [Self] {
        &[Self::JobWasSuspended, Self::JobWasHeld, Self::FactoryPaused]
    }

    fn failed_statuses() -> &'static [Self] {
        &[]
    }

    fn unrecoverable_statuses() -> &'static [Self] {
        &[Self::ErrorInExecutable]
    }

    fn unknown_statuses() -> &'static [Self] {
        &[Self::GenericLogEvent, Self::NoEvent, Self::Unknown]
    }
}
