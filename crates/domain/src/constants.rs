//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Time arithmetic
pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_DAY: i64 = 86_400_000;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;

// Focus scoring
pub const MAX_FOCUS_SCORE: u8 = 5;

// Goal progress
pub const PERCENTAGE_MAX: f64 = 100.0;

// Filter expression syntax
pub const TAG_PREFIX: char = '#';
pub const SCOPE_PREFIX: char = '%';
pub const TODO_PREFIX: char = '@';
pub const OR_SEPARATOR: char = '|';

// Storage collection keys
pub const COLLECTION_LOGS: &str = "logs";
pub const COLLECTION_TODOS: &str = "todos";
pub const COLLECTION_GOALS: &str = "goals";
