//! Configuration management
//!
//! Model arguments are loaded from YAML files or environment variables and validated
//! before a model is constructed.

mod arguments;
pub mod validation;

pub use arguments::{DEFAULT_VERTEX_LOCATION, ModelArguments};
pub use validation::Validate;

use crate::core::types::errors::{ConfigError, ConfigResult};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

impl ModelArguments {
    /// Load model arguments from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        info!("Loading model arguments from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ReadError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let args = Self::from_yaml_str(&content)?;
        debug!(model = %args.model_name, "Model arguments loaded successfully");
        Ok(args)
    }

    /// Parse and validate model arguments from YAML
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let args: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            reason: e.to_string(),
        })?;
        args.validate()?;
        Ok(args)
    }

    /// Load model arguments from environment variables (and a `.env` file if present)
    pub fn from_env() -> ConfigResult<Self> {
        info!("Loading model arguments from environment variables");
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build model arguments from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let model_name = lookup("MODEL_NAME").ok_or_else(|| ConfigError::EnvVarError {
            var: "MODEL_NAME".to_string(),
        })?;

        let mut args = Self::new(model_name);
        if let Some(v) = parse_var(&lookup, "MODEL_TEMPERATURE")? {
            args.temperature = v;
        }
        if let Some(v) = parse_var(&lookup, "MODEL_TOP_P")? {
            args.top_p = v;
        }
        if let Some(v) = parse_var(&lookup, "MODEL_TOTAL_COST_LIMIT")? {
            args.total_cost_limit = v;
        }
        if let Some(v) = parse_var(&lookup, "MODEL_PER_INSTANCE_COST_LIMIT")? {
            args.per_instance_cost_limit = v;
        }
        args.host_url = lookup("MODEL_HOST_URL");
        args.api_key = lookup("MODEL_API_KEY");
        args.api_version = lookup("MODEL_API_VERSION");
        args.vertex_project = lookup("VERTEXAI_PROJECT");
        args.vertex_location = lookup("VERTEXAI_LOCATION");
        args.vertex_credentials_path = lookup("GOOGLE_APPLICATION_CREDENTIALS").map(Into::into);

        args.validate()?;
        Ok(args)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> ConfigResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ConfigError::invalid_value(key, raw))
        })
        .transpose()
}
