mod config;
mod telemetry;

use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use domain_monitor::service::RemoteJobStatusService;
use service_monitor::{
    JobStatusResponseParserFactory, PbsXmlJobStatusResponseParser, RemoteJobStatusServiceImpl,
    TorqueXmlJobStatusResponseParser,
};

use crate::config::{build_config, JobConfig, MonitorConfig};

fn main() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Failed to build config".red());
            std::process::exit(2);
        }
    };
    let monitor_config: MonitorConfig = match config.try_deserialize() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Invalid config".red());
            std::process::exit(2);
        }
    };
    if let Err(e) = telemetry::initialize_telemetry(&monitor_config.telemetry) {
        eprintln!("{}: {e}", "Failed to initialize logger".red());
        std::process::exit(2);
    }

    if let Err(e) = run(&monitor_config.job) {
        eprintln!("{}: {e:#}", "Failed to check job status".red());
        std::process::exit(1);
    }
}

fn run(config: &JobConfig) -> anyhow::Result<()> {
    let response = read_response(config.response_path.as_deref())?;

    let mut factory = JobStatusResponseParserFactory::new();
    if config.qstat_xml {
        factory = factory
            .register(Arc::new(TorqueXmlJobStatusResponseParser))
            .register(Arc::new(PbsXmlJobStatusResponseParser));
    }
    let service = RemoteJobStatusServiceImpl::builder()
        .provider(Arc::new(factory))
        .build();

    let job = config.monitored_job();
    match service.check(&job, &response) {
        Ok(status) => {
            println!("{}", serde_json::to_string_pretty(&status)?);
            Ok(())
        }
        Err(e) if e.is_retryable() => {
            eprintln!("{}", "The scheduler may answer on a later poll.".yellow());
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn read_response(path: Option<&str>) -> anyhow::Result<String> {
    if let Some(path) = path {
        return std::fs::read_to_string(path).with_context(|| format!("Cannot read {path}"));
    }
    let mut response = String::new();
    std::io::stdin().read_to_string(&mut response)?;
    Ok(response)
}
