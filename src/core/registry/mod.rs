//! Model registry
//!
//! Read-only lookup from a model identifier to its context limits, provider family
//! and per-token prices, in the shape of litellm's `model_prices_and_context_window.json`.

mod builtin;
mod pricing;

pub use pricing::{ModelInfo, PricingDatabase};

/// Source of model metadata consulted at model construction and for cost calculation
pub trait ModelRegistry: Send + Sync {
    /// Look up a model by its provider-qualified identifier (e.g. `azure/gpt-4o`)
    fn lookup(&self, model: &str) -> Option<ModelInfo>;
}

impl ModelRegistry for PricingDatabase {
    /// Exact match first, then the bare name when the prefix names the entry's own provider
    ///
    /// `openai/gpt-4` resolves to `gpt-4`; `hosted_vllm/gpt-4` does not.
    fn lookup(&self, model: &str) -> Option<ModelInfo> {
        self.get(model)
            .or_else(|| {
                let (provider, name) = model.split_once('/')?;
                self.get(name).filter(|info| info.provider() == Some(provider))
            })
            .cloned()
    }
}
