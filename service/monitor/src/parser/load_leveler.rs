use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{LoadLevelerJobStatus, RemoteJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};

/// Reads `llq <id>` output. Column layout varies with site configuration, so
/// the status is the right-most one or two letter column.
///
/// ```text
/// 1234     testuser   7/28 10:05  R  50  data_stage   compute12f07n08
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadLevelerJobStatusResponseParser;

fn is_status_token(token: &str) -> bool {
    (1..=2).contains(&token.len()) && token.chars().all(|c| c.is_ascii_alphabetic())
}

impl JobStatusResponseParser for LoadLevelerJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        if super::mentions_any(response, &["job id", "error", "not "]) {
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

        // the job is confirmed present, so an unreadable status is unknown
        // rather than an error
        let status = tokens
            .iter()
            .skip(1)
            .rev()
            .find(|t| is_status_token(t))
            .map_or(LoadLevelerJobStatus::UNKNOWN, |t| {
                LoadLevelerJobStatus::value_of_code(t)
            });

        Ok(JobStatusResponse::new(
            remote_job_id,
            status,
            Some("0".to_owned()),
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[SchedulerType::Loadleveler, SchedulerType::CustomLoadleveler]
    }
}

#[cfg(test)]
mod tests {
    use domain_monitor::model::vo::StatusClassification;

    use super::super::fixture::*;
    use super::*;

    fn status_line(id: &str, status: &str) -> String {
        format!("{id}     testuser   7/28 10:05  {status}  50  data_stage   compute12f07n08")
    }

    #[test]
    fn every_status_code() {
        for status in ["I", "P", "ST", "R", "CK", "H", "HS", "C", "CA", "NR", "SX", "X"] {
            let response = LoadLevelerJobStatusResponseParser
                .parse("1234", &status_line("1234", status))
                .unwrap();
            assert_eq!(response.status().code(), status);
            assert_eq!(response.exit_code(), Some("0"));
        }
    }

    #[test]
    fn matching_line_among_others() {
        let response = [
            status_line("foo-1234", "NR"),
            status_line("1234", "C"),
            status_line("bar-1234", "P"),
        ]
        .join("\n");
        let response = LoadLevelerJobStatusResponseParser.parse("1234", &response).unwrap();
        assert_eq!(*response.status(), LoadLevelerJobStatus::Completed);
        assert!(response.status().is_done_status());
    }

    #[test]
    fn unreadable_status_is_unknown() {
        for status in ["UNKNOWN", "asdfasdfasdfadfa"] {
            let response = LoadLevelerJobStatusResponseParser
                .parse("1234", &status_line("1234", status))
                .unwrap();
            assert_eq!(*response.status(), LoadLevelerJobStatus::Unknown);
        }
    }

    #[test]
    fn other_job_is_rejected() {
        assert_parsing_error(LoadLevelerJobStatusResponseParser.parse("123", &status_line("1234", "R")));
        assert_parsing_error(LoadLevelerJobStatusResponseParser.parse("1234", &status_line("", "I")));
    }

    #[test]
    fn delimited_responses_are_rejected() {
        let line = status_line("1234", "P");
        let piped = line.split_whitespace().collect::<Vec<_>>().join("|");
        let commas = line.split_whitespace().collect::<Vec<_>>().join(",");
        assert_parsing_error(LoadLevelerJobStatusResponseParser.parse("1234", &piped));
        assert_parsing_error(LoadLevelerJobStatusResponseParser.parse("1234", &commas));
        assert_parsing_error(LoadLevelerJobStatusResponseParser.parse("1234", "P"));
    }

    #[test]
    fn scheduler_errors() {
        assert_parsing_error(LoadLevelerJobStatusResponseParser.parse("1234", "llq: There is currently no job status to report."));
        assert_parsing_error(LoadLevelerJobStatusResponseParser.parse("1234", "llq: Error: invalid job id 1234"));
    }

    #[test]
    fn blank_response() {
        for response in BLANK_RESPONSES {
            assert_empty_response(LoadLevelerJobStatusResponseParser.parse("1234", response));
        }
    }
}
