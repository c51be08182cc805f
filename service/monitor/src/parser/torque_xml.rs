use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{RemoteJobStatus, TorqueJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};

use super::qstat_xml::qstat_jobs;

/// Reads `qstat -x <id>` output:
///
/// ```xml
/// <Data><Job><Job_Id>42.head-node</Job_Id><job_state>R</job_state></Job></Data>
/// ```
///
/// The reported id is the server-qualified `Job_Id`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TorqueXmlJobStatusResponseParser;

impl JobStatusResponseParser for TorqueXmlJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        if super::mentions_any(response, &["qstat: unknown job id"]) {
            return Err(MonitorException::empty_response(
                "the job has likely completed and been purged from the qstat job cache",
                response,
            ));
        }

        let job = qstat_jobs(response)?
            .into_iter()
            .find(|job| super::is_same_job(&job.id, remote_job_id))
            .ok_or_else(|| {
                MonitorException::response_parsing(
                    format!("no Job element for job {remote_job_id}"),
                    response,
                )
            })?;
        tracing::trace!("Matched torque job {} in state {:?}.", job.id, job.state);

        Ok(JobStatusResponse::new(
            job.id,
            TorqueJobStatus::value_of_code(&job.state),
            Some(job.exit_status.unwrap_or_else(|| "0".to_owned())),
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[
            SchedulerType::Torque,
            SchedulerType::CustomTorque,
            SchedulerType::Moab,
            SchedulerType::CustomMoab,
        ]
    }
}
