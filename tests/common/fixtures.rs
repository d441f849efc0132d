//! Test fixtures and data factories

use std::sync::Arc;
use std::time::Duration;

use litellm_model::{HistoryItem, ModelArguments, ModelInfo, PricingDatabase, RetryConfig};

/// Price of one input token of `test/priced-model`
pub const INPUT_COST: f64 = 0.001;
/// Price of one output token of `test/priced-model`
pub const OUTPUT_COST: f64 = 0.002;

/// Retry configuration with millisecond waits
pub fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        min_wait: Duration::from_millis(1),
        max_wait: Duration::from_millis(10),
        multiplier: 0.001,
    }
}

/// Builtin registry plus a small, cheap-to-reason-about test model
pub fn test_registry() -> Arc<PricingDatabase> {
    let mut db = PricingDatabase::builtin();
    db.insert(
        "test/priced-model",
        ModelInfo::chat("openai", 100, 20, INPUT_COST, OUTPUT_COST),
    );
    Arc::new(db)
}

/// Factory for model arguments pointing at a mock server
pub struct ArgsFactory;

impl ArgsFactory {
    pub fn priced(host_url: &str) -> ModelArguments {
        ModelArguments::new("litellm:test/priced-model")
            .with_host_url(host_url)
            .with_api_key("test-key")
            .with_temperature(0.0)
    }

    pub fn azure(host_url: &str) -> ModelArguments {
        ModelArguments::new("litellm:azure/gpt-4o")
            .with_host_url(host_url)
            .with_api_key("azure-key")
            .with_api_version("2024-06-01")
    }

    pub fn anthropic(host_url: &str) -> ModelArguments {
        ModelArguments::new("litellm:claude-3-5-haiku-20241022")
            .with_host_url(host_url)
            .with_api_key("anthropic-key")
    }
}

/// Factory for conversation histories
pub struct HistoryFactory;

impl HistoryFactory {
    pub fn short() -> Vec<HistoryItem> {
        vec![
            HistoryItem::system("You are terse."),
            HistoryItem::user("Ping?"),
        ]
    }

    pub fn oversized() -> Vec<HistoryItem> {
        vec![HistoryItem::user("lorem ipsum ".repeat(200))]
    }
}
