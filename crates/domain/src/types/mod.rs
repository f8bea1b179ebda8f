//! Domain types and models
//!
//! Record shapes mirror the app's JSON snapshots (camelCase field names) so a
//! collection exported by the UI deserializes without an adapter layer.

pub mod catalog;
pub mod filter;
pub mod goal;
pub mod log;
pub mod todo;

pub use catalog::{Activity, Category, Scope};
pub use filter::{Filter, FilterCondition, FilterStats};
pub use goal::{Goal, GoalMetric, GoalProgress, GoalStatus, GoalStatusReport, ProgressState};
pub use log::Log;
pub use todo::{TodoCategory, TodoItem};
