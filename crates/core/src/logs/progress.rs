//! Keeping progress todos in step with the logs that feed them
//!
//! A log linked to a progress todo carries `progress_increment` units. Saving
//! the log credits them, editing it moves the credit, deleting it takes the
//! credit back. The counter is clamped at zero on every change.

use timepal_domain::{Log, TodoItem};

/// Add `delta` (possibly negative) to the todo's completed units, never
/// going below zero.
pub fn update_todo_progress(todo: &mut TodoItem, delta: f64) {
    todo.completed_units = Some((todo.units_done() + delta).max(0.0));
}

/// Re-balance todo counters after `saved` replaced `previous`.
///
/// The previous version's credit is reverted first, then the saved version's
/// credit is applied. Only progress todos are touched. Returns the ids of the
/// todos that changed, in the order they were changed.
pub fn apply_log_saved(todos: &mut [TodoItem], previous: Option<&Log>, saved: &Log) -> Vec<String> {
    let mut touched = Vec::new();
    if let Some(previous) = previous {
        touched.extend(credit_linked_todo(todos, previous, -1.0));
    }
    if let Some(todo_id) = credit_linked_todo(todos, saved, 1.0) {
        if !touched.contains(&todo_id) {
            touched.push(todo_id);
        }
    }
    touched
}

/// Take back the credit of a deleted log. Returns the changed todo's id.
pub fn apply_log_deleted(todos: &mut [TodoItem], deleted: &Log) -> Option<String> {
    credit_linked_todo(todos, deleted, -1.0)
}

/// An increment of `Some(0.0)` is present and applied (a numeric no-op);
/// only `None` skips the todo.
fn credit_linked_todo(todos: &mut [TodoItem], log: &Log, sign: f64) -> Option<String> {
    let todo_id = log.linked_todo_id.as_deref()?;
    let increment = log.progress_increment?;
    let todo = todos.iter_mut().find(|todo| todo.id == todo_id && todo.is_progress)?;
    update_todo_progress(todo, sign * increment);
    Some(todo.id.clone())
}
