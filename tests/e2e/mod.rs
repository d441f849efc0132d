//! End-to-end tests for litellm-model
//!
//! These tests make real provider calls and require API keys.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - OPENAI_API_KEY: For OpenAI tests

pub mod openai;
