use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{LsfJobStatus, RemoteJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};

/// Reads `bjobs -w -noheader <id>` output:
///
/// ```text
/// 114     testuser RUN   normal     fc0b07ca1fb9 fc0b07ca1fb9 test_job   May  9 02:59
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LsfJobStatusResponseParser;

impl JobStatusResponseParser for LsfJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        if super::mentions_any(response, &["qstat: unknown job id"]) {
            return Err(MonitorException::empty_response(
                "the job has likely completed and been purged from the job cache",
                response,
            ));
        }
        if super::mentions_any(response, &["unknown", "error", "not "]) {
            return Err(MonitorException::response_parsing(
                "scheduler reported an error",
                response,
            ));
        }

        let tokens = super::lines(response)
            .map(|l| l.split_whitespace().collect::<Vec<_>>())
            .find(|tokens| tokens.first() == Some(&remote_job_id))
            .ok_or_else(|| {
                MonitorException::response_parsing(
                    format!("no status line for job {remote_job_id}"),
                    response,
                )
            })?;
        let state = tokens.get(2).ok_or_else(|| {
            MonitorException::response_parsing("status line has no state column", response)
        })?;

        Ok(JobStatusResponse::new(
            remote_job_id,
            LsfJobStatus::value_of_code(state),
            Some("0".to_owned()),
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[SchedulerType::Lsf, SchedulerType::CustomLsf]
    }
}
