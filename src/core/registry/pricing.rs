//! Pricing and context-window database
//!
//! Shares the data format of litellm's `model_prices_and_context_window.json`

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::types::errors::{ConfigError, ConfigResult};

/// Metadata for one model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Cost per input token (USD)
    #[serde(default)]
    pub input_cost_per_token: f64,

    /// Cost per output token (USD)
    #[serde(default)]
    pub output_cost_per_token: f64,

    /// Legacy max token field
    #[serde(default)]
    pub max_tokens: Option<u32>,

    #[serde(default)]
    pub max_input_tokens: Option<u32>,

    #[serde(default)]
    pub max_output_tokens: Option<u32>,

    /// Provider family, e.g. `openai`, `anthropic`, `azure`
    #[serde(default)]
    pub litellm_provider: Option<String>,

    /// Mode (chat, embedding, completion)
    #[serde(default)]
    pub mode: Option<String>,
}

impl ModelInfo {
    pub fn chat(
        provider: &str,
        max_input_tokens: u32,
        max_output_tokens: u32,
        input_cost_per_token: f64,
        output_cost_per_token: f64,
    ) -> Self {
        Self {
            input_cost_per_token,
            output_cost_per_token,
            max_tokens: Some(max_output_tokens),
            max_input_tokens: Some(max_input_tokens),
            max_output_tokens: Some(max_output_tokens),
            litellm_provider: Some(provider.to_string()),
            mode: Some("chat".to_string()),
        }
    }

    pub fn provider(&self) -> Option<&str> {
        self.litellm_provider.as_deref()
    }
}

/// Pricing database keyed by model identifier
#[derive(Debug, Clone, Default)]
pub struct PricingDatabase {
    models: HashMap<String, ModelInfo>,
}

impl PricingDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Database preloaded with the bundled model table
    pub fn builtin() -> Self {
        Self {
            models: super::builtin::BUILTIN_MODELS.clone(),
        }
    }

    /// Load pricing data from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    /// Parse pricing data, skipping documentation entries and models that fail to parse
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let all_data: HashMap<String, serde_json::Value> = serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError {
                reason: format!("Failed to parse pricing JSON: {}", e),
            })?;

        let mut models = HashMap::new();
        for (key, value) in all_data {
            if key == "sample_spec" || key.starts_with('_') {
                continue;
            }

            match serde_json::from_value::<ModelInfo>(value) {
                Ok(info) => {
                    models.insert(key, info);
                }
                Err(e) => {
                    warn!(
                        model = %key,
                        error = %e,
                        "Failed to parse model pricing data, skipping model"
                    );
                }
            }
        }

        debug!(models = models.len(), "Loaded model pricing data");
        Ok(Self { models })
    }

    /// Overlay entries from another database; entries in `other` win
    pub fn merge(&mut self, other: PricingDatabase) {
        self.models.extend(other.models);
    }

    pub fn insert(&mut self, model: impl Into<String>, info: ModelInfo) {
        self.models.insert(model.into(), info);
    }

    pub fn get(&self, model: &str) -> Option<&ModelInfo> {
        self.models.get(model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
