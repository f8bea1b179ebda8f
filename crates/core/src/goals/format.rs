//! Display formatting for goal values

use timepal_domain::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use timepal_domain::GoalMetric;

/// Render a goal value (current or target) in the metric's unit.
///
/// Durations are seconds rendered as `"{h}h {m}m"`, or `"{m}m"` below one
/// hour. Day and task counts are floored and suffixed with `天` / `个`.
///
/// # Examples
///
/// ```
/// use timepal_core::goals::format_goal_value;
/// use timepal_domain::GoalMetric;
///
/// assert_eq!(format_goal_value(5_400.0, GoalMetric::DurationRaw), "1h 30m");
/// assert_eq!(format_goal_value(2_700.0, GoalMetric::DurationWeighted), "45m");
/// assert_eq!(format_goal_value(12.0, GoalMetric::FrequencyDays), "12天");
/// ```
#[must_use]
pub fn format_goal_value(value: f64, metric: GoalMetric) -> String {
    match metric {
        GoalMetric::DurationRaw | GoalMetric::DurationWeighted | GoalMetric::DurationLimit => {
            format_duration(value)
        }
        GoalMetric::FrequencyDays => format!("{}天", floor_to_int(value)),
        GoalMetric::TaskCount => format!("{}个", floor_to_int(value)),
    }
}

fn format_duration(seconds: f64) -> String {
    let hours = floor_to_int(seconds / SECONDS_PER_HOUR);
    let minutes = floor_to_int((seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE);
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[allow(clippy::cast_possible_truncation)]
fn floor_to_int(value: f64) -> i64 {
    value.floor() as i64
}
