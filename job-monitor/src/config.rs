use std::str::FromStr;

use domain_monitor::model::vo::{ExecutionType, MonitoredJob, SchedulerType};
use serde::*;

use crate::telemetry::TelemetryConfig;

pub fn build_config() -> anyhow::Result<config::Config> {
    build_config_from(std::env::args().skip(1))
}

/// Layers `config.yaml` from the working directory, then every `*.yaml` or
/// `*.yml` named in `args`, then `JOB_MONITOR__SECTION__KEY` variables.
/// A file named on the command line must exist. Empty variables are skipped.
pub fn build_config_from<I>(args: I) -> anyhow::Result<config::Config>
where
    I: IntoIterator<Item = String>,
{
    let config_files = args
        .into_iter()
        .filter(|arg| arg.ends_with(".yaml") || arg.ends_with(".yml"));
    let builder = config_files.fold(
        config::Config::builder().add_source(
            config::File::with_name("config")
                .required(false)
                .format(config::FileFormat::Yaml),
        ),
        |builder, path| {
            builder.add_source(
                config::File::from(std::path::Path::new(path.as_str()))
                    .format(config::FileFormat::Yaml),
            )
        },
    );
    let config = builder
        .add_source(
            config::Environment::with_prefix("JOB_MONITOR")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        )
        .build()?;
    Ok(config)
}

#[derive(Default, Deserialize, Clone, Debug)]
pub struct MonitorConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub job: JobConfig,
}

/// The job to classify and where its raw scheduler response comes from.
#[derive(Deserialize, Clone, Debug)]
pub struct JobConfig {
    #[serde(default)]
    pub remote_job_id: String,
    #[serde(default, deserialize_with = "by_name")]
    pub execution_type: ExecutionType,
    #[serde(default, deserialize_with = "by_name")]
    pub scheduler_type: SchedulerType,
    /// Reads the response from stdin when unset.
    #[serde(default)]
    pub response_path: Option<String>,
    /// Torque, Moab and PBS responses come from `qstat -x`.
    #[serde(default = "JobConfig::default_qstat_xml")]
    pub qstat_xml: bool,
}

impl JobConfig {
    fn default_qstat_xml() -> bool {
        false
    }

    pub fn monitored_job(&self) -> MonitoredJob {
        MonitoredJob::new(
            self.remote_job_id.as_str(),
            self.execution_type,
            self.scheduler_type,
        )
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            remote_job_id: Default::default(),
            execution_type: Default::default(),
            scheduler_type: Default::default(),
            response_path: None,
            qstat_xml: Self::default_qstat_xml(),
        }
    }
}

/// Accepts names in any case, e.g. `custom_slurm` as well as `CUSTOM_SLURM`.
fn by_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let name = String::deserialize(deserializer)?;
    name.trim().parse().map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::telemetry::LoggingLevel;

    fn from_yaml(yaml: &str) -> MonitorConfig {
        config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = from_yaml("");
        assert!(config.telemetry.enable);
        assert_eq!(config.telemetry.max_level, LoggingLevel::Warn);
        assert_eq!(config.telemetry.level_filter_env, "JOB_MONITOR_LOG");
        assert!(config.telemetry.console.enable);
        assert!(!config.telemetry.console.enable_debug_logging);
        assert_eq!(config.job.execution_type, ExecutionType::Cli);
        assert_eq!(config.job.scheduler_type, SchedulerType::Unknown);
        assert_eq!(config.job.response_path, None);
        assert!(!config.job.qstat_xml);
    }

    #[test]
    fn job_section() {
        let config = from_yaml(indoc! {"
            telemetry:
              max_level: Debug
              console:
                enable_debug_logging: true
            job:
              remote_job_id: '4213'
              execution_type: hpc
              scheduler_type: custom_moab
              response_path: /tmp/qstat.xml
              qstat_xml: true
        "});
        assert_eq!(config.telemetry.max_level, LoggingLevel::Debug);
        assert!(config.telemetry.console.enable_debug_logging);
        assert!(config.job.qstat_xml);
        assert_eq!(config.job.response_path.as_deref(), Some("/tmp/qstat.xml"));
        assert_eq!(
            config.job.monitored_job(),
            MonitoredJob::new("4213", ExecutionType::Hpc, SchedulerType::CustomMoab)
        );
    }

    #[test]
    fn unknown_scheduler_names_fall_back() {
        let config = from_yaml(indoc! {"
            job:
              execution_type: HPC
              scheduler_type: openpbs
        "});
        assert_eq!(config.job.scheduler_type, SchedulerType::Unknown);
    }

    #[test]
    fn invalid_execution_type_is_rejected() {
        let result = config::Config::builder()
            .add_source(config::File::from_str(
                "job:\n  execution_type: kubernetes",
                config::FileFormat::Yaml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<MonitorConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn named_files_then_environment() {
        let path = std::env::temp_dir().join(format!("job-monitor-{}.yaml", std::process::id()));
        std::fs::write(
            &path,
            indoc! {"
                job:
                  remote_job_id: '77.head'
                  execution_type: hpc
                  scheduler_type: pbs
            "},
        )
        .unwrap();
        std::env::set_var("JOB_MONITOR__JOB__SCHEDULER_TYPE", "custom_slurm");
        std::env::set_var("JOB_MONITOR__JOB__RESPONSE_PATH", "");

        let args = vec!["--verbose".to_string(), path.display().to_string()];
        let config: MonitorConfig = build_config_from(args).unwrap().try_deserialize().unwrap();
        std::env::remove_var("JOB_MONITOR__JOB__SCHEDULER_TYPE");
        std::env::remove_var("JOB_MONITOR__JOB__RESPONSE_PATH");
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.job.monitored_job(),
            MonitoredJob::new("77.head", ExecutionType::Hpc, SchedulerType::CustomSlurm)
        );
        assert_eq!(config.job.response_path, None);
    }

    #[test]
    fn missing_named_file_is_an_error() {
        let missing = std::env::temp_dir().join("job-monitor-missing.yaml");
        assert!(build_config_from([missing.display().to_string()]).is_err());
    }
}
