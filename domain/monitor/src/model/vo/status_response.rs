use serde::Serialize;

use super::{LifecycleHint, SchedulerJobStatus, StatusClassification};

/// Outcome of parsing one scheduler response for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusResponse {
    remote_job_id: String,
    status: SchedulerJobStatus,
    exit_code: Option<String>,
}

impl JobStatusResponse {
    pub fn new(
        remote_job_id: impl Into<String>,
        status: impl Into<SchedulerJobStatus>,
        exit_code: Option<String>,
    ) -> Self {
        Self {
            remote_job_id: remote_job_id.into(),
            status: status.into(),
            exit_code,
        }
    }

    pub fn remote_job_id(&self) -> &str {
        &self.remote_job_id
    }

    pub fn status(&self) -> &SchedulerJobStatus {
        &self.status
    }

    pub fn exit_code(&self) -> Option<&str> {
        self.exit_code.as_deref()
    }

    pub fn mapped_lifecycle(&self) -> Option<LifecycleHint> {
        self.status.mapped_lifecycle()
    }
}
