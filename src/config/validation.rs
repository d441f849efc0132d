//! Configuration validation

use super::arguments::ModelArguments;
use crate::core::types::errors::{ConfigError, ConfigResult};
use tracing::debug;
use url::Url;

/// Request fields set from dedicated arguments; overriding them through
/// `completion_kwargs` is an error
const RESERVED_COMPLETION_KWARGS: &[&str] = &[
    "model",
    "messages",
    "temperature",
    "top_p",
    "api_base",
    "api_key",
    "api_version",
];

/// Trait for validating configuration
pub trait Validate {
    fn validate(&self) -> ConfigResult<()>;
}

impl Validate for ModelArguments {
    fn validate(&self) -> ConfigResult<()> {
        debug!(model = %self.model_name, "Validating model arguments");

        if self.model_name.trim().is_empty() {
            return Err(ConfigError::missing_field("model_name"));
        }
        self.model_id()?;

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::invalid_value("temperature", self.temperature));
        }

        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(ConfigError::invalid_value("top_p", self.top_p));
        }

        for (field, limit) in [
            ("total_cost_limit", self.total_cost_limit),
            ("per_instance_cost_limit", self.per_instance_cost_limit),
        ] {
            if !limit.is_finite() {
                return Err(ConfigError::invalid_value(field, limit));
            }
        }

        if let Some(host_url) = &self.host_url {
            validate_url(host_url, "host_url")?;
        }

        if let Some(key) = self
            .completion_kwargs
            .keys()
            .find(|key| RESERVED_COMPLETION_KWARGS.contains(&key.as_str()))
        {
            return Err(ConfigError::invalid_value(
                "completion_kwargs",
                format!("{} is set by a dedicated argument", key),
            ));
        }

        Ok(())
    }
}

fn validate_url(url_str: &str, field: &str) -> ConfigResult<()> {
    let url = Url::parse(url_str)
        .map_err(|e| ConfigError::invalid_value(field, format!("{}: {}", url_str, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ConfigError::invalid_value(
                field,
                format!("{} (scheme must be http or https, got {})", url_str, scheme),
            ));
        }
    }

    if url.host_str().is_none() {
        return Err(ConfigError::invalid_value(
            field,
            format!("{} (missing host)", url_str),
        ));
    }

    Ok(())
}
