use serde::{Deserialize, Serialize};

use super::{ExecutionType, SchedulerType};

/// The slice of a platform job the status parsers care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MonitoredJob {
    /// Identifier assigned by the remote scheduler.
    pub remote_job_id: String,
    pub execution_type: ExecutionType,
    pub scheduler_type: SchedulerType,
}

impl MonitoredJob {
    pub fn new(
        remote_job_id: impl Into<String>,
        execution_type: ExecutionType,
        scheduler_type: SchedulerType,
    ) -> Self {
        Self {
            remote_job_id: remote_job_id.into(),
            execution_type,
            scheduler_type,
        }
    }
}
