//! Goal progress, status and management

pub mod format;
pub mod ports;
pub mod progress;
pub mod service;
pub mod status;

pub use format::format_goal_value;
pub use progress::{calculate_goal_progress, calculate_goal_progress_in};
pub use service::GoalService;
pub use status::{evaluate_goal_status, evaluate_goal_status_in};
