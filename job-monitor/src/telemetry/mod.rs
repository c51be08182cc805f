mod config;
pub use self::config::*;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let filter = level_filter(config);
    let console = config.console.enable.then(|| {
        let enable_debug_logging = config.console.enable_debug_logging;
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(enable_debug_logging)
            .with_line_number(enable_debug_logging)
            .with_thread_ids(enable_debug_logging)
            .with_target(enable_debug_logging)
    });
    Registry::default().with(filter).with(console).try_init()?;
    Ok(())
}

/// Directives from `level_filter_env` when that variable is set, otherwise
/// from `level_filter`. Falls back to `max_level` when neither has any.
fn level_filter(config: &TelemetryConfig) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(config.max_level.into());
    let env_var = config.level_filter_env.as_str();
    if !env_var.is_empty() && std::env::var_os(env_var).is_some() {
        builder.with_env_var(env_var).from_env_lossy()
    } else {
        builder.parse_lossy(config.level_filter.as_str())
    }
}

#[cfg(test)]
mod tests {
    use tracing::metadata::LevelFilter;

    use super::*;

    fn config_reading(env_var: &str) -> TelemetryConfig {
        TelemetryConfig {
            level_filter: "info".to_string(),
            level_filter_env: env_var.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn env_var_overrides_configured_directives() {
        std::env::set_var("JOB_MONITOR_TEST_LOG_SET", "debug");
        let filter = level_filter(&config_reading("JOB_MONITOR_TEST_LOG_SET"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn unset_env_var_keeps_configured_directives() {
        std::env::remove_var("JOB_MONITOR_TEST_LOG_UNSET");
        let filter = level_filter(&config_reading("JOB_MONITOR_TEST_LOG_UNSET"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn max_level_applies_without_directives() {
        let config = TelemetryConfig {
            max_level: LoggingLevel::Error,
            level_filter_env: String::new(),
            ..Default::default()
        };
        assert_eq!(level_filter(&config).max_level_hint(), Some(LevelFilter::ERROR));
    }
}
