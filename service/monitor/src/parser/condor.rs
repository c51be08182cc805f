use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{CondorLogJobStatus, RemoteJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// `CODE (JOB.CLUSTER.PROC) DATE TIME MESSAGE`
static EVENT_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,3})\s+\((\d+)\.(\d+)\.(\d+)\)\s+(\S+)\s+(\S+)\s*(.*)$").unwrap()
});

static RETURN_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(return value (-?\d+)\)").unwrap());

const SECTION_FOOTER: &str = "...";
const SUBMITTED_EVENT: &str = "000";
const UNKNOWN_EXIT_CODE: &str = "-1";

/// Reads the HTCondor user log (`runtime.log`) of a job.
///
/// The log is a sequence of event sections, each closed by a `...` line. The
/// newest event is the last section and decides the status.
#[derive(Debug, Default, Clone, Copy)]
pub struct CondorJobStatusResponseParser;

struct EventHeader<'a> {
    code: &'a str,
    job: &'a str,
}

impl<'a> EventHeader<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let caps = EVENT_HEADER.captures(line)?;
        Some(Self {
            code: caps.get(1)?.as_str(),
            job: caps.get(2)?.as_str(),
        })
    }

    /// Job number without the zero padding condor writes (`007` is job `7`).
    fn job_id(&self) -> &'a str {
        match self.job.trim_start_matches('0') {
            "" => "0",
            id => id,
        }
    }
}

/// Non-empty event sections in log order.
fn sections(response: &str) -> Vec<Vec<&str>> {
    let mut sections = vec![];
    let mut current = vec![];
    for line in super::lines(response) {
        if line == SECTION_FOOTER {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

impl JobStatusResponseParser for CondorJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        let sections = sections(response);

        let is_runtime_log = sections
            .first()
            .and_then(|s| s.first())
            .and_then(|l| EventHeader::parse(l))
            .is_some_and(|h| h.code == SUBMITTED_EVENT);
        if !is_runtime_log {
            return Err(MonitorException::response_parsing(
                "log does not start with a job submitted event",
                response,
            ));
        }

        let last = sections.last().map(Vec::as_slice).unwrap_or_default();
        let header = last
            .first()
            .and_then(|l| EventHeader::parse(l))
            .ok_or_else(|| {
                MonitorException::response_parsing("malformed header in last log section", response)
            })?;
        if header.job_id() != remote_job_id {
            return Err(MonitorException::response_parsing(
                format!(
                    "log belongs to job {} rather than job {remote_job_id}",
                    header.job_id()
                ),
                response,
            ));
        }

        let status = CondorLogJobStatus::value_of_code(header.code);
        let exit_code = last
            .iter()
            .find_map(|l| RETURN_VALUE.captures(l))
            .and_then(|caps| caps.get(1))
            .map_or(UNKNOWN_EXIT_CODE, |m| m.as_str());
        tracing::trace!("condor job {remote_job_id} last logged event {}", header.code);

        Ok(JobStatusResponse::new(
            remote_job_id,
            status,
            Some(exit_code.to_owned()),
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[SchedulerType::Condor, SchedulerType::CustomCondor]
    }
}
