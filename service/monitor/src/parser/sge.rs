use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{RemoteJobStatus, SgeJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};

use super::qstat_xml::parse_document;

/// Reads `qstat -ext -urg -xml -U <user>` output. Jobs are `job_list`
/// elements in either `queue_info` or `job_info`; the state code lives in a
/// nested `<state>` element, with the `state` attribute as a fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct SgeJobStatusResponseParser;

impl JobStatusResponseParser for SgeJobStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        if super::mentions_any(response, &["qstat: unknown job id"]) {
            return Err(MonitorException::empty_response(
                "the job has likely completed and been purged from the qstat job cache",
                response,
            ));
        }
        // job names inside the document may contain any of these words
        if !response.trim_start().starts_with('<')
            && super::mentions_any(response, &["unknown", "error", "not "])
        {
            return Err(MonitorException::response_parsing(
                "scheduler reported an error",
                response,
            ));
        }

        let document = parse_document(response)?;
        let job = document
            .descendants("job_list")
            .into_iter()
            .find(|job| job.child_text("JB_job_number") == Some(remote_job_id))
            .ok_or_else(|| {
                MonitorException::response_parsing(
                    format!("no job_list element for job {remote_job_id}"),
                    response,
                )
            })?;
        let state = job
            .child_text("state")
            .filter(|s| !s.is_empty())
            .or_else(|| job.attribute("state"))
            .unwrap_or_default();

        Ok(JobStatusResponse::new(
            remote_job_id,
            SgeJobStatus::value_of_code(state),
            Some("0".to_owned()),
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[SchedulerType::Sge, SchedulerType::CustomGridengine]
    }
}

#[cfg(test)]
mod tests {
    use domain_monitor::model::vo::{LifecycleHint, StatusClassification};
    use indoc::formatdoc;

    use super::super::fixture::*;
    use super::*;

    fn qstat_xml(job_id: &str, state: &str) -> String {
        formatdoc! {r#"
            <?xml version='1.0'?>
            <job_info xmlns:xsd="http://arc.liv.ac.uk/repos/darcs/sge/source/dist/util/resources/schemas/qstat/qstat.xsd">
              <queue_info>
                <job_list state="running">
                  <JB_job_number>{job_id}</JB_job_number>
                  <JAT_prio>0.55500</JAT_prio>
                  <JB_name>sge.submit</JB_name>
                  <JB_owner>testuser</JB_owner>
                  <state>{state}</state>
                  <JAT_start_time>2019-05-09T02:59:01</JAT_start_time>
                  <queue_name>all.q@compute-0-1.local</queue_name>
                  <slots>1</slots>
                </job_list>
              </queue_info>
              <job_info>
                <job_list state="pending">
                  <JB_job_number>77</JB_job_number>
                  <JB_name>not an error</JB_name>
                  <state>qw</state>
                </job_list>
              </job_info>
            </job_info>
        "#, job_id = job_id, state = state}
    }

    #[test]
    fn running_job() {
        let response = SgeJobStatusResponseParser.parse("9", &qstat_xml("9", "r")).unwrap();
        assert_eq!(response.remote_job_id(), "9");
        assert_eq!(*response.status(), SgeJobStatus::Running);
        assert_eq!(response.mapped_lifecycle(), Some(LifecycleHint::Running));
        assert_eq!(response.exit_code(), Some("0"));
    }

    #[test]
    fn pending_job_in_job_info() {
        let response = SgeJobStatusResponseParser.parse("77", &qstat_xml("9", "r")).unwrap();
        assert_eq!(*response.status(), SgeJobStatus::QueuedWaiting);
        assert!(response.status().is_queued_status());
    }

    #[test]
    fn state_case_is_significant() {
        let response = SgeJobStatusResponseParser.parse("9", &qstat_xml("9", "s")).unwrap();
        assert_eq!(*response.status(), SgeJobStatus::Suspended);
        let response = SgeJobStatusResponseParser.parse("9", &qstat_xml("9", "S")).unwrap();
        assert_eq!(*response.status(), SgeJobStatus::QueueSuspended);
        let response = SgeJobStatusResponseParser.parse("9", &qstat_xml("9", "EQW")).unwrap();
        assert_eq!(*response.status(), SgeJobStatus::Unknown);
    }

    #[test]
    fn state_attribute_fallback() {
        let response = SgeJobStatusResponseParser
            .parse(
                "5",
                r#"<job_info><queue_info><job_list state="dr"><JB_job_number>5</JB_job_number></job_list></queue_info></job_info>"#,
            )
            .unwrap();
        assert_eq!(*response.status(), SgeJobStatus::DeletedRunning);
        assert!(response.status().is_unrecoverable_status());
    }

    #[test]
    fn job_number_must_match_exactly() {
        assert_parsing_error(SgeJobStatusResponseParser.parse("99", &qstat_xml("9", "r")));
        assert_parsing_error(SgeJobStatusResponseParser.parse("9", &qstat_xml("99", "r")));
    }

    #[test]
    fn scheduler_errors() {
        assert_empty_response(SgeJobStatusResponseParser.parse("9", "qstat: Unknown Job Id 9"));
        assert_parsing_error(SgeJobStatusResponseParser.parse("9", "error: failed receiving gdi request"));
        assert_parsing_error(SgeJobStatusResponseParser.parse("9", "job_list 9 r"));
        assert_parsing_error(SgeJobStatusResponseParser.parse("9", "<job_info><queue_info>"));
    }

    #[test]
    fn blank_response() {
        for response in BLANK_RESPONSES {
            assert_empty_response(SgeJobStatusResponseParser.parse("9", response));
        }
    }
}
