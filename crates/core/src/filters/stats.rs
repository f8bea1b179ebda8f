//! Aggregates over the logs a saved filter selects
//!
//! Both functions parse the filter's expression on every call. Expressions
//! are short and collections are a personal history, so there is no parsed
//! condition cache.

use timepal_domain::{Filter, FilterStats, Log};

use super::matcher::{matches_filter, FilterContext};
use super::parser::parse_filter_expression;

/// Count and total duration (seconds) of matching logs
#[must_use]
pub fn filter_stats(logs: &[Log], filter: &Filter, context: &FilterContext<'_>) -> FilterStats {
    let condition = parse_filter_expression(&filter.filter_expression);

    logs.iter().filter(|log| matches_filter(log, &condition, context)).fold(
        FilterStats::default(),
        |mut stats, log| {
            stats.count += 1;
            stats.total_duration += log.duration;
            stats
        },
    )
}

/// Matching logs, in input order
#[must_use]
pub fn filtered_logs<'a>(logs: &'a [Log], filter: &Filter, context: &FilterContext<'_>) -> Vec<&'a Log> {
    let condition = parse_filter_expression(&filter.filter_expression);
    logs.iter().filter(|log| matches_filter(log, &condition, context)).collect()
}
