//! Model arguments

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::core::types::errors::{ConfigError, ConfigResult};

/// Location used for Vertex AI when none is configured
pub const DEFAULT_VERTEX_LOCATION: &str = "us-east5";

fn default_temperature() -> f64 {
    1.0
}

fn default_top_p() -> f64 {
    1.0
}

/// Configuration of one model instance
///
/// `model_name` carries a routing tag, e.g. `litellm:azure/gpt-4o`. Cost limits of
/// zero or below mean "unlimited". Provider-specific fields are optional and only
/// consulted by the provider they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArguments {
    pub model_name: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Ceiling on the lifetime spend of the model instance
    #[serde(default)]
    pub total_cost_limit: f64,

    /// Ceiling on the spend of the current task
    #[serde(default)]
    pub per_instance_cost_limit: f64,

    /// Custom API base
    #[serde(default)]
    pub host_url: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub api_version: Option<String>,

    #[serde(default)]
    pub vertex_project: Option<String>,

    /// Falls back to [`DEFAULT_VERTEX_LOCATION`]
    #[serde(default)]
    pub vertex_location: Option<String>,

    #[serde(default)]
    pub vertex_credentials_path: Option<PathBuf>,

    /// Extra completion parameters merged into every request
    #[serde(default)]
    pub completion_kwargs: Map<String, Value>,
}

impl ModelArguments {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            total_cost_limit: 0.0,
            per_instance_cost_limit: 0.0,
            host_url: None,
            api_key: None,
            api_version: None,
            vertex_project: None,
            vertex_location: None,
            vertex_credentials_path: None,
            completion_kwargs: Map::new(),
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_total_cost_limit(mut self, limit: f64) -> Self {
        self.total_cost_limit = limit;
        self
    }

    pub fn with_per_instance_cost_limit(mut self, limit: f64) -> Self {
        self.per_instance_cost_limit = limit;
        self
    }

    pub fn with_host_url(mut self, host_url: impl Into<String>) -> Self {
        self.host_url = Some(host_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn with_vertex_project(mut self, project: impl Into<String>) -> Self {
        self.vertex_project = Some(project.into());
        self
    }

    pub fn with_vertex_location(mut self, location: impl Into<String>) -> Self {
        self.vertex_location = Some(location.into());
        self
    }

    pub fn with_vertex_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vertex_credentials_path = Some(path.into());
        self
    }

    pub fn with_completion_kwarg(mut self, key: impl Into<String>, value: Value) -> Self {
        self.completion_kwargs.insert(key.into(), value);
        self
    }

    /// Model identifier with the routing tag removed
    pub fn model_id(&self) -> ConfigResult<&str> {
        match self.model_name.split_once(':') {
            Some((_, model)) if !model.is_empty() => Ok(model),
            _ => Err(ConfigError::invalid_value(
                "model_name",
                format!("{} (expected <tag>:<model>)", self.model_name),
            )),
        }
    }

    /// Vertex AI location with the default applied
    pub fn vertex_location_or_default(&self) -> &str {
        self.vertex_location
            .as_deref()
            .unwrap_or(DEFAULT_VERTEX_LOCATION)
    }
}
