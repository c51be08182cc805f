use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{RemoteJobStatus, TorqueJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};

/// Reads the `qstat -a <id>` summary table of Torque and Moab installations
/// without XML output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TorqueJobStatusResponseParser;

impl JobStatusResponseParser for TorqueJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        if super::mentions_any(response, &["qstat: unknown job id"]) {
            return Err(MonitorException::empty_response(
                "the job has likely completed and been purged from the qstat job cache",
                response,
            ));
        }
        if super::mentions_any(response, &["error"]) {
            return Err(MonitorException::response_parsing(
                "scheduler reported an error",
                response,
            ));
        }

        let tokens = super::lines(response)
            .map(|l| l.split_whitespace().collect::<Vec<_>>())
            .find(|tokens| {
                tokens
                    .first()
                    .is_some_and(|id| super::is_same_job(id, remote_job_id))
            })
            .ok_or_else(|| {
                MonitorException::response_parsing(
                    format!("no status line for job {remote_job_id}"),
                    response,
                )
            })?;

        // a line naming the job with no readable state still proves the job
        // exists, so it reports unknown instead of failing
        let status = super::qstat_summary_state(&tokens)
            .map_or(TorqueJobStatus::UNKNOWN, TorqueJobStatus::value_of_code);
        Ok(JobStatusResponse::new(
            remote_job_id,
            status,
            Some("0".to_owned()),
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
