//! Core functionality
//!
//! Data types, the model registry, cost calculation, the completion transport and
//! the model adapter built on top of them.

pub mod completion;
pub mod cost;
pub mod model;
pub mod registry;
pub mod types;
