use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{PbsJobStatus, RemoteJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};

use super::qstat_xml::qstat_jobs;

/// Reads PBS Pro `qstat -x` output. Installations that ignore `-x` answer
/// with the `qstat -a` summary table, which is read the same way the Torque
/// summary is.
#[derive(Debug, Default, Clone, Copy)]
pub struct PbsXmlJobStatusResponseParser;

impl PbsXmlJobStatusResponseParser {
    fn parse_document(remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        let job = qstat_jobs(response)?
            .into_iter()
            .find(|job| super::is_same_job(&job.id, remote_job_id))
            .ok_or_else(|| {
                MonitorException::response_parsing(
                    format!("no Job element for job {remote_job_id}"),
                    response,
                )
            })?;
        Ok(JobStatusResponse::new(
            job.id,
            PbsJobStatus::value_of_code(&job.state),
            Some(job.exit_status.unwrap_or_else(|| "0".to_owned())),
        ))
    }

    fn parse_summary(remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        let no_status = || {
            MonitorException::response_parsing(
                format!("no status line for job {remote_job_id}"),
                response,
            )
        };
        let tokens = super::lines(response)
            .map(|l| l.split_whitespace().collect::<Vec<_>>())
            .find(|tokens| {
                tokens
                    .first()
                    .is_some_and(|id| super::is_same_job(id, remote_job_id))
            })
            .ok_or_else(no_status)?;
        let state = super::qstat_summary_state(&tokens).ok_or_else(no_status)?;
        Ok(JobStatusResponse::new(
            remote_job_id,
            PbsJobStatus::value_of_code(state),
            Some("0".to_owned()),
        ))
    }
}

impl JobStatusResponseParser for PbsXmlJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        if super::mentions_any(response, &["qstat: unknown job id"]) {
            return Err(MonitorException::empty_response(
                "the job has likely completed and been purged from the qstat job cache",
                response,
            ));
        }
        if response.trim_start().starts_with('<') {
            return Self::parse_document(remote_job_id, response);
        }
        if super::mentions_any(response, &["unknown", "error", "not "]) {
            return Err(MonitorException::response_parsing(
                "scheduler reported an error",
                response,
            ));
        }
        Self::parse_summary(remote_job_id, response)
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[SchedulerType::Pbs, SchedulerType::CustomPbs]
    }
}
