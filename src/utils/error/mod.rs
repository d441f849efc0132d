//! Error handling utilities
//!
//! Error recovery for calls whose failures classify themselves as retryable.

pub mod recovery;

pub use recovery::*;
