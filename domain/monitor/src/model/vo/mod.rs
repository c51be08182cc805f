pub mod job;
pub mod scheduler;
pub mod status;
pub mod status_response;

#[rustfmt::skip]
pub use {
    job::MonitoredJob,
    scheduler::{ExecutionType, SchedulerType},
    status::{LifecycleHint, RemoteJobStatus, SchedulerJobStatus, StatusClassification},
    status_response::JobStatusResponse,
};
