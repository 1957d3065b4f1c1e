use env_logger::{Builder, Env};

use crate::config::{ConfigError, LoggingSettings};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "PATTERN_CATALOG_LOG";

/// Builds the logger for the configured level; `PATTERN_CATALOG_LOG` takes
/// precedence when set.
pub fn builder(settings: &LoggingSettings) -> Result<Builder, ConfigError> {
    let mut builder = Builder::new();
    builder
        .filter_level(settings.level_filter()?)
        .parse_env(Env::new().filter(LOG_ENV))
        .format_timestamp(None)
        .format_target(false);
    Ok(builder)
}

/// Installs the global logger. Calling it a second time leaves the first
/// logger in place.
pub fn init(settings: &LoggingSettings) -> Result<(), ConfigError> {
    if builder(settings)?.try_init().is_err() {
        log::debug!("logger already installed");
    }
    Ok(())
}
