//! Token counting implementation

use super::types::ModelTokenConfig;
use crate::core::types::ChatMessage;
use std::collections::HashMap;

/// Token counter for different models
#[derive(Debug, Clone)]
pub struct TokenCounter {
    /// Model-specific token counting configurations
    model_configs: HashMap<String, ModelTokenConfig>,
}

impl TokenCounter {
    /// Create a new token counter
    pub fn new() -> Self {
        Self {
            model_configs: ModelTokenConfig::default_configs(),
        }
    }

    /// Count tokens in a list of chat messages
    pub fn count_messages(&self, model: &str, messages: &[ChatMessage]) -> u32 {
        let config = self.get_model_config(model);

        messages.iter().fold(config.request_overhead, |total, message| {
            total
                + config.message_overhead
                + self.estimate_text_tokens(config, message.role.as_str())
                + self.estimate_text_tokens(config, &message.content)
        })
    }

    /// Count tokens in plain text
    pub fn count_text(&self, model: &str, text: &str) -> u32 {
        let config = self.get_model_config(model);
        self.estimate_text_tokens(config, text)
    }

    /// Estimate tokens for text content
    pub(super) fn estimate_text_tokens(&self, config: &ModelTokenConfig, text: &str) -> u32 {
        if text.is_empty() {
            return 0;
        }

        let char_count = text.chars().count() as f64;
        let estimated_tokens = (char_count / config.chars_per_token).ceil();

        // Buffer for special tokens and encoding overhead
        (estimated_tokens * 1.1).ceil() as u32
    }

    /// Get model configuration, falling back to the model family and then the default
    pub(super) fn get_model_config(&self, model: &str) -> &ModelTokenConfig {
        if let Some(config) = self.model_configs.get(model) {
            return config;
        }

        let family = self.extract_model_family(model);
        self.model_configs
            .get(family)
            .unwrap_or(&self.model_configs["default"])
    }

    /// Extract model family from model name
    pub(super) fn extract_model_family(&self, model: &str) -> &'static str {
        // Remove provider prefix if present
        let model = model.rsplit('/').next().unwrap_or(model);

        if model.starts_with("gpt-4") || model.starts_with("o1") {
            "gpt-4"
        } else if model.starts_with("gpt-3.5") || model.starts_with("gpt-35") {
            "gpt-3.5-turbo"
        } else if model.starts_with("claude") {
            "claude"
        } else if model.starts_with("gemini") {
            "gemini"
        } else {
            "default"
        }
    }

    /// Add or update model configuration
    pub fn add_model_config(&mut self, config: ModelTokenConfig) {
        self.model_configs.insert(config.model.clone(), config);
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new()
    }
}
