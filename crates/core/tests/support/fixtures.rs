//! Record builders shared by the integration tests.
//!
//! All instants are UTC and every test evaluates days in `Utc`, so the
//! expected values do not depend on the host zone.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use timepal_domain::{Activity, Category, Goal, GoalMetric, Log, Scope, TodoCategory, TodoItem};

pub const HOUR_MS: i64 = 3_600_000;
pub const DAY_MS: i64 = 24 * HOUR_MS;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Epoch milliseconds of a UTC wall-clock time.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap().timestamp_millis()
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

pub fn activity(id: &str, name: &str) -> Activity {
    Activity {
        id: id.to_string(),
        name: name.to_string(),
        icon: String::new(),
        color: String::new(),
        keywords: Vec::new(),
    }
}

pub fn category(id: &str, name: &str, activities: Vec<Activity>) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: String::new(),
        theme_color: String::new(),
        activities,
    }
}

pub fn scope(id: &str, name: &str) -> Scope {
    Scope {
        id: id.to_string(),
        name: name.to_string(),
        icon: String::new(),
        description: None,
        is_archived: false,
        order: 0,
        theme_color: String::new(),
    }
}

pub fn todo_category(id: &str, name: &str) -> TodoCategory {
    TodoCategory { id: id.to_string(), name: name.to_string(), icon: String::new() }
}

/// Log of `seconds` starting at `start_ms`, filed under the given scopes.
pub fn log(id: &str, activity_id: &str, start_ms: i64, seconds: i64, scopes: &[&str]) -> Log {
    let mut log = Log::new(id, "c1", activity_id, start_ms, start_ms + seconds * 1_000);
    log.scope_ids = scopes.iter().map(ToString::to_string).collect();
    log
}

/// Completed todo in `category_id` with the given default scopes.
pub fn done_todo(id: &str, category_id: &str, completed_at: DateTime<Utc>, scopes: &[&str]) -> TodoItem {
    let mut todo = TodoItem::new(id, category_id, format!("todo {id}"));
    todo.is_completed = true;
    todo.completed_at = Some(completed_at);
    todo.default_scope_ids = scopes.iter().map(ToString::to_string).collect();
    todo
}

/// Progress-mode todo with `units` already recorded.
pub fn progress_todo(id: &str, title: &str, units: f64) -> TodoItem {
    let mut todo = TodoItem::new(id, "tc1", title);
    todo.is_progress = true;
    todo.total_amount = Some(100.0);
    todo.unit_amount = Some(1.0);
    todo.completed_units = Some(units);
    todo
}

pub fn goal(metric: GoalMetric, target: f64, start: NaiveDate, end: NaiveDate) -> Goal {
    Goal::new("g1", "Goal", "s1", metric, target, start, end)
}

/// Catalog used by the filter tests: "Work" with Coding/Reading, "Health"
/// with Running.
pub fn catalog() -> Vec<Category> {
    vec![
        category("c1", "Work", vec![activity("a1", "Coding"), activity("a2", "Reading")]),
        category("c2", "Health", vec![activity("a3", "Running")]),
    ]
}
