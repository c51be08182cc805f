use std::sync::Arc;

use domain_monitor::{
    exception::MonitorResult,
    model::vo::{JobStatusResponse, MonitoredJob},
    service::{JobStatusResponseParserProvider, RemoteJobStatusService},
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct RemoteJobStatusServiceImpl {
    provider: Arc<dyn JobStatusResponseParserProvider>,
}

impl RemoteJobStatusService for RemoteJobStatusServiceImpl {
    fn check(&self, job: &MonitoredJob, response: &str) -> MonitorResult<JobStatusResponse> {
        let parser = self.provider.get_instance(job);
        match parser.parse(&job.remote_job_id, response) {
            Ok(status) => {
                tracing::info!(
                    remote_job_id = %job.remote_job_id,
                    status = %status.status(),
                    lifecycle = ?status.mapped_lifecycle(),
                    "Classified remote job status."
                );
                Ok(status)
            }
            Err(e) => {
                tracing::warn!(
                    remote_job_id = %job.remote_job_id,
                    retryable = e.is_retryable(),
                    "Rejected scheduler response: {e}"
                );
                Err(e)
            }
        }
    }
}
