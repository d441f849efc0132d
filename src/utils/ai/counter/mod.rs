//! Token counting utilities
//!
//! Character-based token estimates per model family. Counts are approximate and
//! only used for context-window checks and accounting when a provider reports no usage.

pub mod token_counter;
pub mod types;

pub use token_counter::TokenCounter;
pub use types::ModelTokenConfig;
