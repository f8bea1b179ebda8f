//! Port interfaces for log and todo persistence

use timepal_domain::{Log, Result, TodoItem};

/// Trait for persisting logs
pub trait LogRepository: Send + Sync {
    /// All stored logs
    fn list_logs(&self) -> Result<Vec<Log>>;

    /// Log by id, `None` when absent
    fn get_log(&self, id: &str) -> Result<Option<Log>>;

    /// Insert, or replace the log with the same id
    fn upsert_log(&self, log: Log) -> Result<()>;

    /// Remove a log, returning it when it existed
    fn delete_log(&self, id: &str) -> Result<Option<Log>>;
}

/// Trait for persisting todos
pub trait TodoRepository: Send + Sync {
    /// All stored todos
    fn list_todos(&self) -> Result<Vec<TodoItem>>;

    /// Insert, or replace the todo with the same id
    fn upsert_todo(&self, todo: TodoItem) -> Result<()>;
}
