//! AI-related utilities

pub mod counter;
