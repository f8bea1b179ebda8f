//! Goal progress and status engine behaviour over realistic histories.

mod support;

use chrono::Utc;
use chrono_tz::Asia::Shanghai;
use support::fixtures::{at, date, done_todo, goal, log, utc, DAY_MS, HOUR_MS};
use timepal_core::{calculate_goal_progress_in, evaluate_goal_status_in, format_goal_value};
use timepal_domain::{GoalMetric, ProgressState};

#[test]
fn duration_raw_sums_scoped_logs_and_clamps() {
    let goal = goal(GoalMetric::DurationRaw, 3_600.0, date(2024, 3, 1), date(2024, 3, 2));
    let logs = vec![
        log("l1", "a1", at(2024, 3, 1, 9, 0), 1_800, &["s1"]),
        log("l2", "a1", at(2024, 3, 2, 9, 0), 3_600, &["s1"]),
    ];

    let progress = calculate_goal_progress_in(&goal, &logs, &[], &Utc);

    assert!((progress.current - 5_400.0).abs() < f64::EPSILON);
    assert!((progress.target - 3_600.0).abs() < f64::EPSILON);
    assert!((progress.percentage - 100.0).abs() < f64::EPSILON);
}

#[test]
fn logs_outside_scope_window_or_activity_filter_are_ignored() {
    let mut goal = goal(GoalMetric::DurationRaw, 36_000.0, date(2024, 3, 1), date(2024, 3, 2));
    goal.filter_activity_ids = vec!["a1".to_string()];
    let logs = vec![
        log("in", "a1", at(2024, 3, 1, 9, 0), 3_600, &["s1", "s2"]),
        log("other-scope", "a1", at(2024, 3, 1, 10, 0), 3_600, &["s2"]),
        log("no-scope", "a1", at(2024, 3, 1, 11, 0), 3_600, &[]),
        log("other-activity", "a2", at(2024, 3, 1, 12, 0), 3_600, &["s1"]),
        log("before", "a1", at(2024, 2, 29, 23, 59), 3_600, &["s1"]),
        log("after", "a1", at(2024, 3, 3, 0, 0), 3_600, &["s1"]),
        log("last-minute", "a1", at(2024, 3, 2, 23, 59), 60, &["s1"]),
    ];

    let progress = calculate_goal_progress_in(&goal, &logs, &[], &Utc);

    assert!((progress.current - 3_660.0).abs() < f64::EPSILON);
}

#[test]
fn weighted_duration_ignores_unfocused_logs() {
    let raw = goal(GoalMetric::DurationRaw, 7_200.0, date(2024, 3, 1), date(2024, 3, 1));
    let weighted = goal(GoalMetric::DurationWeighted, 7_200.0, date(2024, 3, 1), date(2024, 3, 1));
    let unfocused = log("l1", "a1", at(2024, 3, 1, 9, 0), 3_600, &["s1"]);
    let mut focused = log("l2", "a1", at(2024, 3, 1, 11, 0), 3_600, &["s1"]);
    focused.focus_score = Some(4);
    let logs = vec![unfocused, focused];

    let raw_progress = calculate_goal_progress_in(&raw, &logs, &[], &Utc);
    let weighted_progress = calculate_goal_progress_in(&weighted, &logs, &[], &Utc);

    assert!((raw_progress.current - 7_200.0).abs() < f64::EPSILON);
    assert!((weighted_progress.current - 2_880.0).abs() < f64::EPSILON);
    assert!((weighted_progress.percentage - 40.0).abs() < 1e-9);
}

#[test]
fn frequency_counts_each_day_once() {
    let goal = goal(GoalMetric::FrequencyDays, 5.0, date(2024, 3, 1), date(2024, 3, 7));
    let logs = vec![
        log("l1", "a1", at(2024, 3, 1, 8, 0), 600, &["s1"]),
        log("l2", "a1", at(2024, 3, 1, 20, 0), 600, &["s1"]),
        log("l3", "a1", at(2024, 3, 3, 8, 0), 600, &["s1"]),
    ];

    let progress = calculate_goal_progress_in(&goal, &logs, &[], &Utc);

    assert!((progress.current - 2.0).abs() < f64::EPSILON);
    assert!((progress.percentage - 40.0).abs() < 1e-9);
}

#[test]
fn frequency_days_follow_the_evaluation_zone() {
    let goal = goal(GoalMetric::FrequencyDays, 5.0, date(2024, 3, 1), date(2024, 3, 7));
    // 15:00 and 17:00 UTC are the same UTC day but 23:00 and 01:00 in Shanghai
    let logs = vec![
        log("l1", "a1", at(2024, 3, 2, 15, 0), 600, &["s1"]),
        log("l2", "a1", at(2024, 3, 2, 17, 0), 600, &["s1"]),
    ];

    let in_utc = calculate_goal_progress_in(&goal, &logs, &[], &Utc);
    let in_shanghai = calculate_goal_progress_in(&goal, &logs, &[], &Shanghai);

    assert!((in_utc.current - 1.0).abs() < f64::EPSILON);
    assert!((in_shanghai.current - 2.0).abs() < f64::EPSILON);
}

#[test]
fn task_count_needs_completion_inside_window() {
    let mut goal = goal(GoalMetric::TaskCount, 4.0, date(2024, 3, 1), date(2024, 3, 31));
    goal.filter_todo_categories = vec!["tc1".to_string()];
    let mut open = done_todo("open", "tc1", utc(2024, 3, 5, 9), &["s1"]);
    open.is_completed = false;
    let mut undated = done_todo("undated", "tc1", utc(2024, 3, 5, 9), &["s1"]);
    undated.completed_at = None;
    let todos = vec![
        done_todo("t1", "tc1", utc(2024, 3, 5, 9), &["s1"]),
        done_todo("t2", "tc1", utc(2024, 3, 31, 23), &["s1"]),
        done_todo("too-late", "tc1", utc(2024, 4, 1, 0), &["s1"]),
        done_todo("too-early", "tc1", utc(2024, 2, 29, 23), &["s1"]),
        done_todo("other-category", "tc2", utc(2024, 3, 5, 9), &["s1"]),
        done_todo("other-scope", "tc1", utc(2024, 3, 5, 9), &["s2"]),
        open,
        undated,
    ];

    let progress = calculate_goal_progress_in(&goal, &[], &todos, &Utc);

    assert!((progress.current - 2.0).abs() < f64::EPSILON);
    assert!((progress.percentage - 50.0).abs() < 1e-9);
}

#[test]
fn limit_goal_succeeds_while_under_target() {
    let goal = goal(GoalMetric::DurationLimit, 7_200.0, date(2024, 3, 1), date(2024, 3, 1));
    let logs = vec![log("l1", "a1", at(2024, 3, 1, 21, 0), 3_600, &["s1"])];
    let after_deadline = at(2024, 3, 2, 8, 0);

    let report = evaluate_goal_status_in(&goal, &logs, &[], after_deadline, &Utc);

    assert!(report.is_expired);
    assert_eq!(report.state, ProgressState::Completed);
    assert!((report.progress.percentage - 50.0).abs() < 1e-9);
}

#[test]
fn limit_goal_fails_once_target_is_reached() {
    let goal = goal(GoalMetric::DurationLimit, 3_600.0, date(2024, 3, 1), date(2024, 3, 1));
    let logs = vec![log("l1", "a1", at(2024, 3, 1, 9, 0), 3_600, &["s1"])];

    let report = evaluate_goal_status_in(&goal, &logs, &[], at(2024, 3, 5, 0, 0), &Utc);

    assert_eq!(report.state, ProgressState::Failed);
    assert!(report.needs_alert());
}

#[test]
fn goal_stays_in_progress_until_deadline_passes() {
    let goal = goal(GoalMetric::DurationRaw, 3_600.0, date(2024, 3, 1), date(2024, 3, 10));
    let logs = vec![log("l1", "a1", at(2024, 3, 1, 9, 0), 7_200, &["s1"])];
    let now = at(2024, 3, 8, 12, 0);

    let report = evaluate_goal_status_in(&goal, &logs, &[], now, &Utc);

    assert!(!report.is_expired);
    assert_eq!(report.state, ProgressState::InProgress);
    assert!((report.progress.percentage - 100.0).abs() < f64::EPSILON);
    // 2024-03-10 23:59:59.999 is about 2.5 days away, rounded up
    assert_eq!(report.days_until_deadline, 3);
}

#[test]
fn expired_goal_below_target_fails() {
    let goal = goal(GoalMetric::FrequencyDays, 3.0, date(2024, 3, 1), date(2024, 3, 3));
    let logs = vec![log("l1", "a1", at(2024, 3, 1, 9, 0), 600, &["s1"])];
    let now = at(2024, 3, 3, 0, 0) + DAY_MS + HOUR_MS;

    let report = evaluate_goal_status_in(&goal, &logs, &[], now, &Utc);

    assert!(report.is_failed());
    assert!(report.days_until_deadline <= 0);
}

#[test]
fn progress_values_render_per_metric() {
    assert_eq!(format_goal_value(5_400.0, GoalMetric::DurationRaw), "1h 30m");
    assert_eq!(format_goal_value(3.0, GoalMetric::FrequencyDays), "3天");
    assert_eq!(format_goal_value(2.0, GoalMetric::TaskCount), "2个");
}
