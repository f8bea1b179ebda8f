//! Log service - persists logs and keeps linked progress todos in step

use std::sync::Arc;

use chrono::{Local, TimeZone};
use timepal_domain::{Log, Result, TimePalError, TodoItem};
use tracing::{debug, info, warn};

use super::ports::{LogRepository, TodoRepository};
use super::progress::{apply_log_deleted, apply_log_saved};
use super::split::split_log_by_days_in;

/// Log service
pub struct LogService<Tz: TimeZone = Local> {
    logs: Arc<dyn LogRepository>,
    todos: Arc<dyn TodoRepository>,
    tz: Tz,
}

impl LogService<Local> {
    /// Create a new log service splitting days in the host's local zone
    pub fn new(logs: Arc<dyn LogRepository>, todos: Arc<dyn TodoRepository>) -> Self {
        Self { logs, todos, tz: Local }
    }
}

impl<Tz: TimeZone> LogService<Tz> {
    /// Split days in `tz` instead
    pub fn with_timezone<Other: TimeZone>(self, tz: Other) -> LogService<Other> {
        LogService { logs: self.logs, todos: self.todos, tz }
    }

    /// Insert or replace a log, moving linked-todo credit accordingly
    ///
    /// # Errors
    /// Returns `TimePalError::InvalidInput` when the log ends before it
    /// starts, or any repository error.
    pub fn save_log(&self, log: Log) -> Result<()> {
        ensure_ordered(&log)?;

        let previous = self.logs.get_log(&log.id)?;
        debug!(log_id = %log.id, replaced = previous.is_some(), "Saving log");
        self.logs.upsert_log(log.clone())?;

        // Credit moves only once the log itself is stored
        let was_linked = previous.as_ref().is_some_and(|prev| prev.linked_todo_id.is_some());
        if log.linked_todo_id.is_some() || was_linked {
            let mut todos = self.todos.list_todos()?;
            let touched = apply_log_saved(&mut todos, previous.as_ref(), &log);
            self.persist_todos(&todos, &touched)?;
        }
        Ok(())
    }

    /// Split a finished session at local midnights and save every piece
    ///
    /// # Errors
    /// Same as [`Self::save_log`], checked before any piece is written;
    /// pieces saved before a storage failure stay saved.
    pub fn save_split(&self, log: &Log) -> Result<Vec<Log>> {
        ensure_ordered(log)?;
        let pieces = split_log_by_days_in(log, &self.tz);
        if pieces.len() > 1 {
            info!(pieces = pieces.len(), "Log crosses midnight, saving one record per day");
        }
        for piece in &pieces {
            self.save_log(piece.clone())?;
        }
        Ok(pieces)
    }

    /// Delete a log and take back its linked-todo credit
    ///
    /// # Errors
    /// Returns `TimePalError::NotFound` when no log has this id.
    pub fn delete_log(&self, log_id: &str) -> Result<Log> {
        let removed = self
            .logs
            .delete_log(log_id)?
            .ok_or_else(|| TimePalError::NotFound(format!("log {log_id}")))?;

        if removed.linked_todo_id.is_some() {
            let mut todos = self.todos.list_todos()?;
            if let Some(todo_id) = apply_log_deleted(&mut todos, &removed) {
                self.persist_todos(&todos, &[todo_id])?;
            }
        }

        info!(log_id, "Deleted log");
        Ok(removed)
    }

    fn persist_todos(&self, todos: &[TodoItem], touched: &[String]) -> Result<()> {
        for todo_id in touched {
            match todos.iter().find(|todo| &todo.id == todo_id) {
                Some(todo) => {
                    debug!(todo_id = %todo.id, units = todo.units_done(), "Updating todo progress");
                    self.todos.upsert_todo(todo.clone())?;
                }
                None => warn!(todo_id = %todo_id, "Touched todo vanished before it could be saved"),
            }
        }
        Ok(())
    }
}

fn ensure_ordered(log: &Log) -> Result<()> {
    if log.end_time < log.start_time {
        return Err(TimePalError::InvalidInput(format!("Log {} ends before it starts", log.id)));
    }
    Ok(())
}
