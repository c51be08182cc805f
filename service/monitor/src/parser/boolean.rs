use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{status::DefaultJobStatus, JobStatusResponse, SchedulerType},
    service::JobStatusResponseParser,
};

/// Reads a bare `true`/`false` answer to "is the job still running".
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBooleanStatusResponseParser;

impl JobStatusResponseParser for DefaultBooleanStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        let answer = ensure_not_blank(response)?.trim();
        let status = if answer.eq_ignore_ascii_case("true") {
            DefaultJobStatus::Running
        } else if answer.eq_ignore_ascii_case("false") {
            DefaultJobStatus::Completed
        } else {
            return Err(MonitorException::response_parsing(
                "expected true or false",
                response,
            ));
        };
        Ok(JobStatusResponse::new(
            remote_job_id,
            status,
            Some("0".to_owned()),
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[]
    }
}
