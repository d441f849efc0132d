//! Token counter types and configurations

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Model token counting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTokenConfig {
    /// Model family name
    pub model: String,
    /// Average characters per token
    pub chars_per_token: f64,
    /// Overhead tokens per message
    pub message_overhead: u32,
    /// Overhead tokens per request (reply priming)
    pub request_overhead: u32,
}

impl ModelTokenConfig {
    fn family(model: &str, chars_per_token: f64, message_overhead: u32, request_overhead: u32) -> Self {
        Self {
            model: model.to_string(),
            chars_per_token,
            message_overhead,
            request_overhead,
        }
    }

    /// Create default model configurations
    pub(super) fn default_configs() -> HashMap<String, ModelTokenConfig> {
        [
            Self::family("gpt-4", 4.0, 3, 3),
            Self::family("gpt-3.5-turbo", 4.0, 3, 3),
            Self::family("claude", 3.5, 4, 5),
            Self::family("gemini", 4.0, 3, 3),
            Self::family("default", 4.0, 3, 3),
        ]
        .into_iter()
        .map(|config| (config.model.clone(), config))
        .collect()
    }
}
