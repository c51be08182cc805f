use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{ForkJobStatus, RemoteJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};

/// Reads `ps` output filtered on the tracked pid. A process that is no longer
/// listed has finished, though its exit code can no longer be known.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForkJobStatusResponseParser;

const UNKNOWN_EXIT_CODE: &str = "-1";

/// Headers and usage text some `ps` builds print around the listing.
fn is_noise(line: &str) -> bool {
    let line = line.to_lowercase();
    ["[", "usage", "ps", "pid"]
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Process state from the `STAT` column. Only the leading letter carries the
/// state; the rest are modifiers such as `s` or `+`.
fn process_state(stat: Option<&&str>) -> ForkJobStatus {
    let status = stat
        .and_then(|s| s.get(..1))
        .map_or(ForkJobStatus::UNKNOWN, ForkJobStatus::value_of_code);
    if status == ForkJobStatus::UNKNOWN {
        ForkJobStatus::Runnable
    } else {
        status
    }
}

impl JobStatusResponseParser for ForkJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        for line in super::lines(response) {
            if line.starts_with("ps: Invalid process id") {
                return Err(MonitorException::response_parsing(
                    "ps rejected the process id",
                    response,
                ));
            }
            if is_noise(line) {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let pid = tokens[0];
            if !pid.chars().all(|c| c.is_ascii_digit()) {
                return Err(MonitorException::response_parsing(
                    format!("unexpected ps line `{line}`"),
                    response,
                ));
            }
            if pid == remote_job_id {
                return Ok(JobStatusResponse::new(
                    remote_job_id,
                    process_state(tokens.get(2)),
                    Some(UNKNOWN_EXIT_CODE.to_owned()),
                ));
            }
        }

        tracing::debug!("Process {remote_job_id} is no longer listed by ps.");
        Ok(JobStatusResponse::new(
            remote_job_id,
            ForkJobStatus::Completed,
            Some(UNKNOWN_EXIT_CODE.to_owned()),
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[SchedulerType::Fork]
    }
}
