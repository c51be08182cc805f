use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{RemoteJobStatus, SlurmJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};

/// Reads `sacct -p -o 'JOBID,State,ExitCode' -n -j <id>` output, one
/// `JOBID|STATE|EXITCODE|` line per job step.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlurmJobStatusResponseParser;

impl JobStatusResponseParser for SlurmJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        if !response.contains('|') {
            return Err(MonitorException::response_parsing(
                "response is not pipe delimited",
                response,
            ));
        }

        for line in super::lines(response).filter(|l| l.starts_with(remote_job_id)) {
            let fields: Vec<&str> = line.strip_suffix('|').unwrap_or(line).split('|').collect();
            // job steps (`<id>.batch`, `<id>.extern`) share the prefix
            if fields[0] != remote_job_id {
                continue;
            }
            let &[_, state, exit_code] = fields.as_slice() else {
                return Err(MonitorException::response_parsing(
                    format!("expected 3 fields but found {}", fields.len()),
                    response,
                ));
            };
            // cancelled jobs read `CANCELLED by <uid>`
            let state = state.split_whitespace().next().unwrap_or_default();
            return Ok(JobStatusResponse::new(
                remote_job_id,
                SlurmJobStatus::value_of_code(state),
                Some(exit_code.to_owned()),
            ));
        }

        Err(MonitorException::response_parsing(
            format!("no status line for job {remote_job_id}"),
            response,
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[SchedulerType::Slurm, SchedulerType::CustomSlurm]
    }
}
