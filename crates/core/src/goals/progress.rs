//! Goal progress engine
//!
//! Computes the current value of a goal from the log and todo history. The
//! window is whole local days: midnight of `start_date` through
//! 23:59:59.999 of `end_date`, both inclusive.
//!
//! | metric              | current value                                  |
//! |---------------------|------------------------------------------------|
//! | `duration_raw`      | sum of log durations (seconds)                 |
//! | `duration_weighted` | sum of `duration * focus_score / 5`            |
//! | `frequency_days`    | distinct local days with a log starting        |
//! | `task_count`        | completed todos with `completed_at` in window  |
//! | `duration_limit`    | same as `duration_raw`; read as a ceiling      |

use std::collections::HashSet;

use chrono::{Local, TimeZone};
use timepal_domain::constants::{MAX_FOCUS_SCORE, PERCENTAGE_MAX};
use timepal_domain::utils::time::{local_date_of, DayWindow};
use timepal_domain::{Goal, GoalMetric, GoalProgress, Log, TodoItem};

/// Progress of `goal` with days bucketed in the host's local zone.
pub fn calculate_goal_progress(goal: &Goal, logs: &[Log], todos: &[TodoItem]) -> GoalProgress {
    calculate_goal_progress_in(goal, logs, todos, &Local)
}

/// Progress of `goal` with days bucketed in `tz`.
#[allow(clippy::cast_precision_loss)]
pub fn calculate_goal_progress_in<Tz: TimeZone>(
    goal: &Goal,
    logs: &[Log],
    todos: &[TodoItem],
    tz: &Tz,
) -> GoalProgress {
    let window = DayWindow::for_dates(tz, goal.start_date, goal.end_date);

    let current = match goal.metric {
        GoalMetric::DurationRaw | GoalMetric::DurationLimit => {
            relevant_logs(goal, logs, window).map(|log| log.duration).sum::<f64>()
        }
        GoalMetric::DurationWeighted => relevant_logs(goal, logs, window)
            .map(|log| {
                log.duration * f64::from(log.focus_score.unwrap_or(0)) / f64::from(MAX_FOCUS_SCORE)
            })
            .sum::<f64>(),
        GoalMetric::FrequencyDays => {
            let days: HashSet<_> = relevant_logs(goal, logs, window)
                .filter_map(|log| local_date_of(tz, log.start_time))
                .collect();
            days.len() as f64
        }
        GoalMetric::TaskCount => {
            todos.iter().filter(|todo| counts_as_completed_task(goal, todo, window)).count() as f64
        }
    };

    GoalProgress {
        current,
        target: goal.target_value,
        percentage: clamp_percentage(current, goal.target_value),
    }
}

/// `current / target` as a percentage within `0..=100`.
///
/// A non-positive or non-finite target yields 0 rather than NaN/Infinity;
/// stored goals are validated to have a positive target.
#[must_use]
pub fn clamp_percentage(current: f64, target: f64) -> f64 {
    if !target.is_finite() || target <= 0.0 {
        return 0.0;
    }
    let ratio = current / target * PERCENTAGE_MAX;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, PERCENTAGE_MAX)
}

fn relevant_logs<'a>(
    goal: &'a Goal,
    logs: &'a [Log],
    window: DayWindow,
) -> impl Iterator<Item = &'a Log> + 'a {
    logs.iter().filter(move |log| {
        window.contains(log.start_time)
            && log.has_scope(&goal.scope_id)
            && (goal.filter_activity_ids.is_empty()
                || goal.filter_activity_ids.contains(&log.activity_id))
    })
}

fn counts_as_completed_task(goal: &Goal, todo: &TodoItem, window: DayWindow) -> bool {
    if !todo.is_completed || !todo.has_default_scope(&goal.scope_id) {
        return false;
    }
    if !goal.filter_todo_categories.is_empty()
        && !goal.filter_todo_categories.contains(&todo.category_id)
    {
        return false;
    }
    todo.completed_at.is_some_and(|completed_at| window.contains(completed_at.timestamp_millis()))
}
