//! # TimePal Domain
//!
//! Business domain types and models for TimePal.
//!
//! This crate contains:
//! - Record types shared with the app (Log, TodoItem, Goal, Filter, ...)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and local-time helpers
//!
//! ## Architecture
//! - No dependencies on other TimePal crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
