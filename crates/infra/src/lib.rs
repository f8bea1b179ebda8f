//! # TimePal Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - Tracing subscriber setup
//! - Repository implementations (in-memory and JSON files)
//!
//! ## Architecture
//! - Implements traits defined in `timepal-core`
//! - Depends on `timepal-domain` and `timepal-core`
//! - Contains all "impure" code (I/O, environment, global subscribers)

pub mod config;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use config::{load, resolve_timezone};
pub use observability::init_tracing;
pub use storage::{JsonFileStore, MemoryStore};
