//! Utility modules
//!
//! - **ai**: token counting
//! - **error**: retry and recovery
//! - **logging**: subscriber setup

pub mod ai;
pub mod error;
pub mod logging;
