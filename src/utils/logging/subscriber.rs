//! `tracing-subscriber` initialisation

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::core::types::errors::{ConfigError, ConfigResult};

/// Output format of log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_level() -> String {
    "info".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `litellm_model=debug`; `RUST_LOG` takes precedence
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Include source file and line number
    #[serde(default)]
    pub with_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            with_file: false,
        }
    }
}

/// Install a global fmt subscriber
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> ConfigResult<bool> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ConfigError::invalid_value("level", format!("{}: {}", config.level, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(config.with_file)
        .with_line_number(config.with_file);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    Ok(installed.is_ok())
}
