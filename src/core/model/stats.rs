//! Running usage statistics

use serde::{Deserialize, Serialize};

/// Cost and token totals of a model instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Lifetime spend in USD
    pub total_cost: f64,
    /// Spend of the current task in USD
    pub task_cost: f64,
    pub tokens_sent: u64,
    pub tokens_received: u64,
    pub api_calls: u64,
}

impl Stats {
    /// Add one completed call
    pub fn record(&mut self, input_tokens: u32, output_tokens: u32, cost: f64) {
        self.total_cost += cost;
        self.task_cost += cost;
        self.tokens_sent += u64::from(input_tokens);
        self.tokens_received += u64::from(output_tokens);
        self.api_calls += 1;
    }
}
