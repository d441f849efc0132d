//! Integration tests for litellm-model
//!
//! These tests drive `ProviderModel` through the real HTTP transport against a
//! local mock provider server.

pub mod budget_tests;
pub mod query_tests;
pub mod retry_tests;
