//! Model backed by the multi-provider completion layer

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use super::provider::{ProviderKind, ProviderStrategy};
use super::stats::Stats;
use crate::config::{ModelArguments, Validate};
use crate::core::completion::{
    CompletionRequest, CompletionResponse, CompletionTransport, HttpTransport,
};
use crate::core::cost::{CostCalculator, CostError, UsageTokens, format_cost};
use crate::core::registry::{ModelInfo, ModelRegistry, PricingDatabase};
use crate::core::types::errors::{CostScope, ModelError, Result};
use crate::core::types::{ChatMessage, HistoryItem, MessageRole, Messages};
use crate::utils::ai::counter::TokenCounter;
use crate::utils::error::recovery::{RetryConfig, RetryPolicy};

/// Provider family whose requests must always carry `max_tokens`
const ANTHROPIC_FAMILY: &str = "anthropic";

/// A configured model with cost accounting and retries
///
/// Statistics are kept behind a lock so `query` can take `&self`; one query per
/// instance is expected to be in flight at a time.
pub struct ProviderModel {
    args: ModelArguments,
    model_id: String,
    model_info: Option<ModelInfo>,
    provider: Box<dyn ProviderStrategy>,
    transport: Arc<dyn CompletionTransport>,
    counter: TokenCounter,
    cost_calculator: CostCalculator,
    retry: RetryPolicy,
    stats: Mutex<Stats>,
}

impl std::fmt::Debug for ProviderModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderModel")
            .field("model_id", &self.model_id)
            .field("provider", &self.provider.kind())
            .field("stats", &*self.stats.lock())
            .finish_non_exhaustive()
    }
}

impl ProviderModel {
    /// Create a model using the bundled registry and the HTTP transport
    pub fn new(args: ModelArguments) -> Result<Self> {
        Self::with_components(
            args,
            Arc::new(PricingDatabase::builtin()),
            Arc::new(HttpTransport::new()?),
            RetryConfig::default(),
        )
    }

    pub fn with_components(
        args: ModelArguments,
        registry: Arc<dyn ModelRegistry>,
        transport: Arc<dyn CompletionTransport>,
        retry: RetryConfig,
    ) -> Result<Self> {
        args.validate()?;
        let model_id = args.model_id()?.to_string();
        let model_info = registry.lookup(&model_id);
        let kind = ProviderKind::resolve(&model_id, model_info.as_ref(), &args);
        let provider = kind.configure(&args);

        info!(
            model = %model_id,
            provider = ?kind,
            max_input_tokens = ?model_info.as_ref().and_then(|m| m.max_input_tokens),
            "Initialized model"
        );

        Ok(Self {
            args,
            model_id,
            model_info,
            provider,
            transport,
            counter: TokenCounter::new(),
            cost_calculator: CostCalculator::new(registry),
            retry: RetryPolicy::new(retry),
            stats: Mutex::new(Stats::default()),
        })
    }

    /// Model identifier without the routing tag
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    pub fn max_input_tokens(&self) -> Option<u32> {
        self.model_info.as_ref().and_then(|m| m.max_input_tokens)
    }

    pub fn max_output_tokens(&self) -> Option<u32> {
        self.model_info.as_ref().and_then(|m| m.max_output_tokens)
    }

    /// Provider family from the registry, e.g. `openai`
    pub fn provider_family(&self) -> Option<&str> {
        self.model_info.as_ref().and_then(ModelInfo::provider)
    }

    /// Snapshot of the running statistics
    pub fn stats(&self) -> Stats {
        self.stats.lock().clone()
    }

    /// Send the history to the model and return the assistant's reply
    ///
    /// Transient failures are retried with random exponential backoff; budget,
    /// context-window and provider-rejection errors are returned immediately.
    pub async fn query(&self, history: &[HistoryItem], is_demonstration: bool) -> Result<String> {
        self.retry
            .call(move || self.query_once(history, is_demonstration))
            .await
    }

    async fn query_once(&self, history: &[HistoryItem], is_demonstration: bool) -> Result<String> {
        let messages = self
            .history_to_messages(history, is_demonstration)
            .into_structured()
            .ok_or_else(|| ModelError::runtime("a demonstration transcript cannot be queried"))?;

        let input_tokens = self.counter.count_messages(&self.model_id, &messages);
        match self.max_input_tokens() {
            None => warn!(model = %self.model_id, "No max input tokens found for model"),
            Some(max_tokens) if input_tokens > max_tokens => {
                return Err(ModelError::ContextWindowExceeded {
                    input_tokens,
                    max_tokens,
                });
            }
            Some(_) => {}
        }

        let request = self.build_request(messages);
        let response = self.transport.completion(&request).await.map_err(|e| {
            error!(model = %self.model_id, error = %e, "Error during LLM query");
            e
        })?;

        let output = response
            .first_content()
            .ok_or_else(|| ModelError::api(self.model_id.as_str(), None, "response has no choices"))?
            .to_string();

        let output_tokens = self.counter.count_text(&self.model_id, &output);
        let cost = self.completion_cost(&response, input_tokens, output_tokens);
        self.update_stats(input_tokens, output_tokens, cost)?;

        Ok(output)
    }

    fn build_request(&self, messages: Vec<ChatMessage>) -> CompletionRequest {
        let mut request = CompletionRequest::new(self.model_id.clone(), messages);
        request.temperature = self.args.temperature;
        request.top_p = self.args.top_p;
        request.api_version = self.args.api_version.clone();
        request.api_base = self.args.host_url.clone();
        request.extra = self.args.completion_kwargs.clone();

        self.provider.apply(&self.args, &mut request);

        if self.provider_family() == Some(ANTHROPIC_FAMILY) {
            request.max_tokens = self.max_output_tokens();
        }
        request
    }

    /// Cost of a completed call; prefers provider-reported usage over local counts
    fn completion_cost(
        &self,
        response: &CompletionResponse,
        input_tokens: u32,
        output_tokens: u32,
    ) -> f64 {
        let usage = response
            .usage
            .map(UsageTokens::from)
            .unwrap_or_else(|| UsageTokens::new(input_tokens, output_tokens));

        match self.cost_calculator.completion_cost(&self.model_id, &usage) {
            Ok(cost) => cost,
            Err(CostError::MissingPricing { model }) => {
                debug!(model = %model, "No pricing data for model, recording zero cost");
                0.0
            }
            Err(e) => {
                warn!(model = %self.model_id, error = %e, "Cost calculation failed, recording zero cost");
                0.0
            }
        }
    }

    /// Record a completed call and enforce the budget ceilings
    ///
    /// The call is recorded before the limits are checked, so an over-budget call
    /// still shows up in [`stats`](Self::stats).
    pub fn update_stats(&self, input_tokens: u32, output_tokens: u32, cost: f64) -> Result<f64> {
        let stats = {
            let mut stats = self.stats.lock();
            stats.record(input_tokens, output_tokens, cost);
            stats.clone()
        };

        debug!(
            input_tokens,
            output_tokens,
            instance_cost = %format_cost(stats.task_cost),
            cost = %format_cost(cost),
            "Updated model stats"
        );
        debug!(
            total_tokens_sent = stats.tokens_sent,
            total_tokens_received = stats.tokens_received,
            total_cost = %format_cost(stats.total_cost),
            total_api_calls = stats.api_calls,
            "Model totals"
        );

        check_limit(CostScope::Total, stats.total_cost, self.args.total_cost_limit)?;
        check_limit(
            CostScope::Instance,
            stats.task_cost,
            self.args.per_instance_cost_limit,
        )?;

        Ok(cost)
    }

    /// Convert conversation history into provider messages
    ///
    /// Demonstrations drop system turns and are flattened into newline-joined text.
    pub fn history_to_messages(&self, history: &[HistoryItem], is_demonstration: bool) -> Messages {
        if is_demonstration {
            let text = history
                .iter()
                .filter(|item| item.role != MessageRole::System)
                .map(HistoryItem::content_or_empty)
                .collect::<Vec<_>>()
                .join("\n");
            return Messages::Demonstration(text);
        }

        Messages::Structured(history.iter().map(ChatMessage::from).collect())
    }
}

/// A limit of zero or below is unlimited
fn check_limit(scope: CostScope, cost: f64, limit: f64) -> Result<()> {
    if limit > 0.0 && cost >= limit {
        warn!(
            scope = %scope,
            cost = %format_cost(cost),
            limit = %format_cost(limit),
            "Cost exceeds limit"
        );
        return Err(ModelError::CostLimitExceeded { scope, cost, limit });
    }
    Ok(())
}
