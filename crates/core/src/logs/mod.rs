//! Log utilities: day splitting and linked-todo progress bookkeeping

pub mod ports;
pub mod progress;
pub mod service;
pub mod split;

pub use progress::{apply_log_deleted, apply_log_saved, update_todo_progress};
pub use service::LogService;
pub use split::{
    is_crossing_midnight, is_crossing_midnight_in, split_log_by_days, split_log_by_days_in,
};
