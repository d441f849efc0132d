//! Core type definition module
//!
//! Conversation history, provider-facing messages and the error taxonomy

pub mod errors;
pub mod message;

// Re-export all public types
pub use errors::*;
pub use message::*;
