//! Saved-filter engine: expression parsing, log matching and aggregates

pub mod matcher;
pub mod parser;
pub mod stats;

pub use matcher::{matches_filter, FilterContext};
pub use parser::parse_filter_expression;
pub use stats::{filter_stats, filtered_logs};
