use std::sync::Arc;

use domain_monitor::{
    exception::MonitorException,
    mock::{MockJobStatusResponseParser, MockJobStatusResponseParserProvider},
    model::vo::{
        status::{CondorLogJobStatus, ForkJobStatus, SgeJobStatus, SlurmJobStatus},
        ExecutionType, JobStatusResponse, LifecycleHint, MonitoredJob, SchedulerType,
        StatusClassification,
    },
    service::RemoteJobStatusService,
};
use indoc::indoc;
use service_monitor::{JobStatusResponseParserFactory, RemoteJobStatusServiceImpl};

fn service_with_factory() -> RemoteJobStatusServiceImpl {
    RemoteJobStatusServiceImpl::builder()
        .provider(Arc::new(JobStatusResponseParserFactory::new()))
        .build()
}

#[test]
fn test_check_runs_the_provided_parser() {
    let job = MonitoredJob::new("42", ExecutionType::Hpc, SchedulerType::Slurm);

    let mut parser = MockJobStatusResponseParser::new();
    parser
        .expect_parse()
        .times(1)
        .returning(|remote_job_id: &str, response: &str| {
            assert_eq!(remote_job_id, "42");
            assert_eq!(response, "raw");
            Ok(JobStatusResponse::new(
                remote_job_id,
                SlurmJobStatus::Running,
                Some("0:0".to_owned()),
            ))
        });
    let mut provider = MockJobStatusResponseParserProvider::new();
    provider
        .expect_get_instance()
        .times(1)
        .return_once(move |_| Arc::new(parser));

    let service = RemoteJobStatusServiceImpl::builder()
        .provider(Arc::new(provider))
        .build();
    let response = service.check(&job, "raw").unwrap();
    assert_eq!(*response.status(), SlurmJobStatus::Running);
    assert_eq!(response.exit_code(), Some("0:0"));
}

#[test]
fn test_check_passes_parser_errors_through() {
    let job = MonitoredJob::new("42", ExecutionType::Cli, SchedulerType::Fork);

    let mut parser = MockJobStatusResponseParser::new();
    parser
        .expect_parse()
        .returning(|_, response| Err(MonitorException::empty_response("nothing came back", response)));
    let mut provider = MockJobStatusResponseParserProvider::new();
    provider
        .expect_get_instance()
        .return_once(move |_| Arc::new(parser));

    let service = RemoteJobStatusServiceImpl::builder()
        .provider(Arc::new(provider))
        .build();
    let error = service.check(&job, "  ").unwrap_err();
    assert!(error.is_retryable());
    assert_eq!(error.response(), "  ");
}

#[test]
fn test_slurm_job_through_factory() {
    let job = MonitoredJob::new("10", ExecutionType::Hpc, SchedulerType::CustomSlurm);
    let response = service_with_factory()
        .check(
            &job,
            indoc! {"
                10|COMPLETED|0:0|
                10.batch|COMPLETED|0:0|
                10.extern|COMPLETED|0:0|
            "},
        )
        .unwrap();
    assert_eq!(*response.status(), SlurmJobStatus::Completed);
    assert!(response.status().is_done_status());
    assert_eq!(response.exit_code(), Some("0:0"));
}

#[test]
fn test_sge_job_through_factory() {
    let job = MonitoredJob::new("9", ExecutionType::Hpc, SchedulerType::Sge);
    let response = service_with_factory()
        .check(
            &job,
            indoc! {r#"
                <?xml version='1.0'?>
                <job_info>
                  <queue_info>
                    <job_list state="running">
                      <JB_job_number>9</JB_job_number>
                      <state>r</state>
                    </job_list>
                  </queue_info>
                </job_info>
            "#},
        )
        .unwrap();
    assert_eq!(*response.status(), SgeJobStatus::Running);
    assert_eq!(response.mapped_lifecycle(), Some(LifecycleHint::Running));
}

#[test]
fn test_condor_job_through_factory() {
    let job = MonitoredJob::new("7", ExecutionType::Condor, SchedulerType::Condor);
    let response = service_with_factory()
        .check(
            &job,
            indoc! {"
                000 (007.000.000) 05/09 02:59:01 Job submitted from host: <172.17.0.2:9618?addrs=172.17.0.2-9618>
                ...
                001 (007.000.000) 05/09 02:59:03 Job executing on host: <172.17.0.2:9618?addrs=172.17.0.2-9618>
                ...
                005 (007.000.000) 05/09 02:59:05 Job terminated.
                	(1) Normal termination (return value 3)
                ...
            "},
        )
        .unwrap();
    assert_eq!(*response.status(), CondorLogJobStatus::JobTerminated);
    assert_eq!(response.exit_code(), Some("3"));
}

#[test]
fn test_finished_fork_process_through_factory() {
    let job = MonitoredJob::new("31337", ExecutionType::Cli, SchedulerType::Unknown);
    let response = service_with_factory()
        .check(&job, "PID TTY          TIME CMD\n")
        .unwrap();
    assert_eq!(*response.status(), ForkJobStatus::Completed);
    assert_eq!(response.exit_code(), Some("-1"));
}

#[test]
fn test_unregistered_batch_scheduler_uses_generic_json() {
    let job = MonitoredJob::new("5", ExecutionType::Hpc, SchedulerType::Unknown);
    let service = service_with_factory();

    let response = service
        .check(&job, r#"{"status":"PAUSED","source":"agent|v1"}"#)
        .unwrap();
    assert!(response.status().is_paused_status());
    assert_eq!(response.status().taxonomy(), "DEFAULT");

    let error = service.check(&job, r#"{"status":"PAUSED"}"#).unwrap_err();
    assert!(!error.is_retryable());
}

#[test]
fn test_wrong_job_is_not_retryable() {
    let job = MonitoredJob::new("11", ExecutionType::Hpc, SchedulerType::Lsf);
    let error = service_with_factory()
        .check(&job, "114 testuser RUN normal host host job May 9 02:59")
        .unwrap_err();
    assert!(matches!(error, MonitorException::ResponseParsing { .. }));
    assert!(!error.is_retryable());
}
