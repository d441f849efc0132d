//! Cost calculation types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Usage information for cost calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageTokens {
    /// Input/prompt tokens
    pub prompt_tokens: u32,
    /// Output/completion tokens
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion)
    pub total_tokens: u32,
}

impl UsageTokens {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

/// Detailed cost breakdown after completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Total cost
    pub total_cost: f64,
    /// Input/prompt cost
    pub input_cost: f64,
    /// Output/completion cost
    pub output_cost: f64,
    /// Token usage breakdown
    pub usage: UsageTokens,
    /// Currency
    pub currency: String,
    /// Model used
    pub model: String,
    /// Provider family, when known
    pub provider: Option<String>,
}

impl CostBreakdown {
    pub fn new(model: String, provider: Option<String>, usage: UsageTokens) -> Self {
        Self {
            total_cost: 0.0,
            input_cost: 0.0,
            output_cost: 0.0,
            usage,
            currency: "USD".to_string(),
            model,
            provider,
        }
    }

    pub fn calculate_total(&mut self) {
        self.total_cost = self.input_cost + self.output_cost;
    }
}

/// Cost calculation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CostError {
    #[error("Missing pricing information for model: {model}")]
    MissingPricing { model: String },

    #[error("Invalid pricing for model {model}: {message}")]
    InvalidPricing { model: String, message: String },
}
