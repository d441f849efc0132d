//! Cost calculator
//!
//! Core cost calculation logic shared by every provider family.

use std::sync::Arc;

use crate::core::cost::types::{CostBreakdown, CostError, UsageTokens};
use crate::core::registry::{ModelInfo, ModelRegistry};

/// Prices completed requests against the model registry
#[derive(Clone)]
pub struct CostCalculator {
    registry: Arc<dyn ModelRegistry>,
}

impl std::fmt::Debug for CostCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostCalculator").finish_non_exhaustive()
    }
}

impl CostCalculator {
    pub fn new(registry: Arc<dyn ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Calculate the cost of a completed request
    pub fn cost_per_token(&self, model: &str, usage: &UsageTokens) -> Result<CostBreakdown, CostError> {
        let pricing = self
            .registry
            .lookup(model)
            .ok_or_else(|| CostError::MissingPricing {
                model: model.to_string(),
            })?;
        validate_pricing(model, &pricing)?;

        let mut breakdown =
            CostBreakdown::new(model.to_string(), pricing.litellm_provider.clone(), *usage);
        breakdown.input_cost = usage.prompt_tokens as f64 * pricing.input_cost_per_token;
        breakdown.output_cost = usage.completion_tokens as f64 * pricing.output_cost_per_token;
        breakdown.calculate_total();

        Ok(breakdown)
    }

    /// Total cost of a completed request in USD
    pub fn completion_cost(&self, model: &str, usage: &UsageTokens) -> Result<f64, CostError> {
        self.cost_per_token(model, usage).map(|b| b.total_cost)
    }
}

fn validate_pricing(model: &str, pricing: &ModelInfo) -> Result<(), CostError> {
    let rates = [pricing.input_cost_per_token, pricing.output_cost_per_token];
    if rates.iter().any(|r| !r.is_finite() || *r < 0.0) {
        return Err(CostError::InvalidPricing {
            model: model.to_string(),
            message: format!(
                "input={}, output={}",
                pricing.input_cost_per_token, pricing.output_cost_per_token
            ),
        });
    }
    Ok(())
}

/// Format a cost for log output
pub fn format_cost(cost: f64) -> String {
    if cost == 0.0 {
        "$0.00".to_string()
    } else if cost < 0.01 {
        format!("${:.6}", cost)
    } else {
        format!("${:.2}", cost)
    }
}
