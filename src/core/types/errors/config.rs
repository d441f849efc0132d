//! Configuration error types

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Failed to read configuration file {path}: {reason}")]
    ReadError { path: String, reason: String },

    #[error("Failed to parse configuration: {reason}")]
    ParseError { reason: String },

    #[error("Environment variable error: {var}")]
    EnvVarError { var: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
