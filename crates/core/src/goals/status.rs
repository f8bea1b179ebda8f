//! Goal status evaluation
//!
//! A goal is only judged once its deadline has passed. Before that it is
//! in progress no matter how far along it is. After the deadline regular
//! goals succeed at 100%, and limit goals (`duration_limit`) succeed while
//! they stay under 100%.

use chrono::{Local, TimeZone, Utc};
use timepal_domain::constants::{MILLIS_PER_DAY, PERCENTAGE_MAX};
use timepal_domain::utils::time::end_of_day_millis;
use timepal_domain::{Goal, GoalMetric, GoalProgress, GoalStatusReport, Log, ProgressState, TodoItem};

use super::progress::calculate_goal_progress_in;

/// Status of `goal` right now, in the host's local zone.
pub fn evaluate_goal_status(goal: &Goal, logs: &[Log], todos: &[TodoItem]) -> GoalStatusReport {
    evaluate_goal_status_in(goal, logs, todos, Utc::now().timestamp_millis(), &Local)
}

/// Status of `goal` at `now_ms`, with days bucketed in `tz`.
pub fn evaluate_goal_status_in<Tz: TimeZone>(
    goal: &Goal,
    logs: &[Log],
    todos: &[TodoItem],
    now_ms: i64,
    tz: &Tz,
) -> GoalStatusReport {
    let progress = calculate_goal_progress_in(goal, logs, todos, tz);
    let deadline_ms = end_of_day_millis(tz, goal.end_date);
    let is_expired = now_ms > deadline_ms;

    GoalStatusReport {
        state: judge(goal.metric, &progress, is_expired),
        progress,
        days_until_deadline: days_until(deadline_ms, now_ms),
        is_expired,
    }
}

/// Outcome for a goal given its progress and whether the deadline passed.
#[must_use]
pub fn judge(metric: GoalMetric, progress: &GoalProgress, is_expired: bool) -> ProgressState {
    if !is_expired {
        return ProgressState::InProgress;
    }
    let reached = progress.percentage >= PERCENTAGE_MAX;
    let succeeded = if metric.is_limit() { !reached } else { reached };
    if succeeded {
        ProgressState::Completed
    } else {
        ProgressState::Failed
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn days_until(deadline_ms: i64, now_ms: i64) -> i64 {
    ((deadline_ms - now_ms) as f64 / MILLIS_PER_DAY as f64).ceil() as i64
}
