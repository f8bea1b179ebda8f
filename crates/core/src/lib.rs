//! # TimePal Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The goal progress engine and goal status evaluation
//! - The filter expression parser and log matcher
//! - Log splitting and todo progress bookkeeping
//! - Port interfaces (traits) and the services that drive them
//!
//! ## Architecture Principles
//! - Only depends on `timepal-domain`
//! - No database, file or platform code
//! - All external dependencies via traits
//! - Engines are pure functions over borrowed snapshots; only services log

pub mod filters;
pub mod goals;
pub mod logs;

// Re-export specific items to avoid ambiguity
pub use filters::{
    filter_stats, filtered_logs, matches_filter, parse_filter_expression, FilterContext,
};
pub use goals::ports::GoalRepository;
pub use goals::{
    calculate_goal_progress, calculate_goal_progress_in, evaluate_goal_status,
    evaluate_goal_status_in, format_goal_value, GoalService,
};
pub use logs::ports::{LogRepository, TodoRepository};
pub use logs::{split_log_by_days, split_log_by_days_in, LogService};
