use std::collections::HashMap;

use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{PbsJobStatus, RemoteJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};

/// Reads the full job listing printed by `qstat -f` / `qstat -x -f`.
///
/// ```text
/// Job Id: 0.e5a207891675
///     Job_Name = test.sh
///     job_state = F
///     Exit_status = 0
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PbsJobStatusResponseParser;

/// Splits `key = value` / `key: value` / `key value` lines into a map with
/// lowercased keys. The `Job Id:` line ends up as key `job`, value
/// `Id: <id>.<server>`. Later keys replace earlier ones.
fn attributes(response: &str) -> HashMap<String, &str> {
    super::lines(response)
        .filter(|l| !l.starts_with('#') && !l.starts_with('!'))
        .map(|line| {
            let key_end = line
                .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
                .unwrap_or(line.len());
            let (key, rest) = line.split_at(key_end);
            let rest = rest.trim_start();
            let value = rest
                .strip_prefix(['=', ':'])
                .map(str::trim_start)
                .unwrap_or(rest);
            (key.to_lowercase(), value)
        })
        .collect()
}

impl JobStatusResponseParser for PbsJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        if super::mentions_any(response, &["qstat: unknown job id"]) {
            return Err(MonitorException::empty_response(
                "the job has likely completed and been purged from the qstat job cache",
                response,
            ));
        }
        if !response.trim_start().to_lowercase().starts_with("job id:") {
            return Err(MonitorException::response_parsing(
                "response is not a qstat full job listing",
                response,
            ));
        }

        let attributes = attributes(response);
        let job_prefix = format!("id: {}.", remote_job_id.to_lowercase());
        let is_requested_job = attributes
            .get("job")
            .is_some_and(|v| v.to_lowercase().starts_with(&job_prefix));
        if !is_requested_job {
            return Err(MonitorException::response_parsing(
                format!("no job id entry for job {remote_job_id}"),
                response,
            ));
        }

        let state = attributes.get("job_state").ok_or_else(|| {
            MonitorException::response_parsing("no job_state attribute", response)
        })?;
        let exit_code = attributes.get("exit_status").map(|s| s.to_string());

        Ok(JobStatusResponse::new(
            remote_job_id,
            PbsJobStatus::value_of_code(state),
            exit_code,
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[SchedulerType::Pbs, SchedulerType::CustomPbs]
    }
}

#[cfg(test)]
mod tests {
    use domain_monitor::model::vo::{LifecycleHint, StatusClassification};
    use indoc::indoc;

    use super::super::fixture::*;
    use super::*;

    const FINISHED_JOB: &str = indoc! {"
        Job Id: 0.e5a207891675
            Job_Name = test.sh
            Job_Owner = testuser@e5a207891675
            resources_used.cpupercent = 0
            resources_used.walltime = 00:00:00
            job_state = F
            queue = workq
            server = e5a207891675
            Checkpoint = u
            ctime = Fri Jul 26 13:38:38 2019
            Error_Path = e5a207891675:/home/testuser/test.sh.e0
            exec_host = e5a207891675/0
            Exit_status = 0
            Submit_arguments = test.sh
            history_timestamp = 1564148320
            project = _pbs_project_default
    "};

    #[test]
    fn running_job() {
        let response = indoc! {"
            Job Id: 42.host
                Job_Name = sim
                job_state = R
                queue = batch
        "};
        let response = PbsJobStatusResponseParser.parse("42", response).unwrap();
        assert_eq!(response.remote_job_id(), "42");
        assert_eq!(*response.status(), PbsJobStatus::Running);
        assert_eq!(response.exit_code(), None);
        assert_eq!(response.mapped_lifecycle(), Some(LifecycleHint::Running));
    }

    #[test]
    fn finished_job_with_exit_status() {
        let response = PbsJobStatusResponseParser.parse("0", FINISHED_JOB).unwrap();
        assert_eq!(*response.status(), PbsJobStatus::Finished);
        assert_eq!(response.exit_code(), Some("0"));
        assert!(response.status().is_done_status());
    }

    #[test]
    fn keys_and_ids_ignore_case() {
        let response = "JOB ID: 77.Head\n  JOB_STATE = q\n  EXIT_STATUS = 271\n";
        let response = PbsJobStatusResponseParser.parse("77", response).unwrap();
        assert_eq!(*response.status(), PbsJobStatus::Queued);
        assert_eq!(response.exit_code(), Some("271"));
    }

    #[test]
    fn other_job_is_rejected() {
        assert_parsing_error(PbsJobStatusResponseParser.parse("1", FINISHED_JOB));
        assert_parsing_error(PbsJobStatusResponseParser.parse("0.e5", "Job Id: 01.e5\n job_state = R"));
    }

    #[test]
    fn missing_state_is_rejected() {
        assert_parsing_error(PbsJobStatusResponseParser.parse("42", "Job Id: 42.host\n queue = batch"));
    }

    #[test]
    fn unexpected_format_is_rejected() {
        assert_parsing_error(PbsJobStatusResponseParser.parse("42", "42.host sim testuser 0 R batch"));
        assert_parsing_error(PbsJobStatusResponseParser.parse("42", "42|R|0"));
    }

    #[test]
    fn purged_job() {
        assert_empty_response(
            PbsJobStatusResponseParser.parse("42", "qstat: Unknown Job Id 42.host"),
        );
    }

    #[test]
    fn blank_response() {
        for response in BLANK_RESPONSES {
            assert_empty_response(PbsJobStatusResponseParser.parse("42", response));
        }
    }
}
