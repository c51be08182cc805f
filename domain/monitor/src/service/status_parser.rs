use std::sync::Arc;

use crate::exception::MonitorResult;
use crate::model::vo::{JobStatusResponse, MonitoredJob, SchedulerType};

/// Turns the raw output of a scheduler status query into a classified status.
///
/// Implementations are stateless and perform no I/O, so a single instance
/// may be shared by any number of callers.
pub trait JobStatusResponseParser: Send + Sync {
    /// Parses `response` for the job the scheduler knows as `remote_job_id`.
    ///
    /// Fails with `EmptyResponse` for blank input and with
    /// `ResponseParsing` when the text does not match the expected format or
    /// describes another job.
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse>;

    /// Scheduler types whose query output this parser understands.
    fn supported_scheduler_types(&self) -> &'static [SchedulerType];
}

/// Selects the parser for a job.
pub trait JobStatusResponseParserProvider: Send + Sync {
    fn get_instance(&self, job: &MonitoredJob) -> Arc<dyn JobStatusResponseParser>;
}

/// Classifies a raw scheduler response for a monitored job.
pub trait RemoteJobStatusService: Send + Sync {
    fn check(&self, job: &MonitoredJob, response: &str) -> MonitorResult<JobStatusResponse>;
}
