use domain_monitor::{
    exception::{ensure_not_blank, MonitorException, MonitorResult},
    model::vo::{
        status::{DefaultJobStatus, RemoteJobStatus},
        JobStatusResponse, SchedulerType,
    },
    service::JobStatusResponseParser,
};
use serde_json::Value;

/// Fallback for batch schedulers without a dedicated parser. Expects a JSON
/// object whose `status` field holds a generic status code. Responses must
/// also contain a `|` somewhere, which custom status scripts emit as a marker.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultJsonStatusResponseParser;

impl JobStatusResponseParser for DefaultJsonStatusResponseParser {
    fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse> {
        ensure_not_blank(response)?;
        if !response.contains('|') {
            return Err(MonitorException::response_parsing(
                "response is missing the `|` marker",
                response,
            ));
        }

        let json: Value = serde_json::from_str(response).map_err(|e| {
            MonitorException::response_parsing(format!("invalid json: {e}"), response)
        })?;
        let Value::Object(fields) = json else {
            return Err(MonitorException::response_parsing(
                "expected a json object with a status field",
                response,
            ));
        };
        let status = match fields.get("status") {
            Some(Value::String(status)) => status.clone(),
            Some(Value::Null) | None => {
                return Err(MonitorException::response_parsing(
                    "no status field",
                    response,
                ))
            }
            Some(other) => other.to_string(),
        };

        Ok(JobStatusResponse::new(
            remote_job_id,
            DefaultJobStatus::value_of_code(&status),
            Some("0".to_owned()),
        ))
    }

    fn supported_scheduler_types(&self) -> &'static [SchedulerType] {
        &[]
    }
}
