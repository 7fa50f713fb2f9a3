//! Error handling
//!
//! Defines error types and handling for configuration loading.

pub mod handlers;
pub mod types;

pub use types::*;
