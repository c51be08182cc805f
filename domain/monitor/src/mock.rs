use std::sync::Arc;

use mockall::mock;

use crate::{
    exception::MonitorResult,
    model::vo::{JobStatusResponse, MonitoredJob, SchedulerType},
    service::{JobStatusResponseParser, JobStatusResponseParserProvider},
};

mock! {
    pub JobStatusResponseParser {}
    impl JobStatusResponseParser for JobStatusResponseParser {
        fn parse(&self, remote_job_id: &str, response: &str) -> MonitorResult<JobStatusResponse>;
        fn supported_scheduler_types(&self) -> &'static [SchedulerType];
    }
}

mock! {
    pub JobStatusResponseParserProvider {}
    impl JobStatusResponseParserProvider for JobStatusResponseParserProvider {
        fn get_instance(&self, job: &MonitoredJob) -> Arc<dyn JobStatusResponseParser>;
    }
}
