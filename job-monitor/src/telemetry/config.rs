use serde::*;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Directive;

/// Logging setup. Logs go to stderr so stdout only carries the result.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TelemetryConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Directive used when no custom filter applies.
    #[serde(default = "Default::default")]
    pub max_level: LoggingLevel,
    /// `EnvFilter` directives, e.g. `service_monitor=trace`.
    #[serde(default = "Default::default")]
    pub level_filter: String,
    /// Environment variable whose directives, when it is set, replace
    /// `level_filter`.
    #[serde(default = "TelemetryConfig::default_level_filter_env")]
    pub level_filter_env: String,
    #[serde(default = "Default::default")]
    pub console: ConsoleConfig,
}

impl TelemetryConfig {
    fn default_level_filter_env() -> String {
        "JOB_MONITOR_LOG".to_string()
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Self::default_level_filter_env(),
            console: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoggingLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LoggingLevel> for LevelFilter {
    fn from(val: LoggingLevel) -> Self {
        match val {
            LoggingLevel::Error => LevelFilter::ERROR,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Trace => LevelFilter::TRACE,
            LoggingLevel::Off => LevelFilter::OFF,
        }
    }
}

impl From<LoggingLevel> for Directive {
    fn from(val: LoggingLevel) -> Self {
        let level: LevelFilter = val.into();
        level.into()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConsoleConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Decorates records with file, line, thread and target.
    #[serde(default = "Default::default")]
    pub enable_debug_logging: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            enable_debug_logging: Default::default(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
