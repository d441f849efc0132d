//! Cost Calculation Module
//!
//! Turns token usage into USD using the per-token prices held by the model registry.
//! Models without pricing data cost nothing; the caller decides whether that matters.

pub mod calculator;
pub mod types;

pub use calculator::{CostCalculator, format_cost};
pub use types::{CostBreakdown, CostError, UsageTokens};
