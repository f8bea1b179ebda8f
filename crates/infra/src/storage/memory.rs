//! In-memory repository implementation

use parking_lot::RwLock;
use timepal_core::{GoalRepository, LogRepository, TodoRepository};
use timepal_domain::{Goal, Log, Result, TodoItem};

use super::{find, remove, upsert};

/// Process-local store for goals, logs and todos
///
/// Lists come back in insertion order; replacing a record keeps its slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    goals: RwLock<Vec<Goal>>,
    logs: RwLock<Vec<Log>>,
    todos: RwLock<Vec<TodoItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing collections
    pub fn with_records(goals: Vec<Goal>, logs: Vec<Log>, todos: Vec<TodoItem>) -> Self {
        Self { goals: RwLock::new(goals), logs: RwLock::new(logs), todos: RwLock::new(todos) }
    }
}

impl GoalRepository for MemoryStore {
    fn list_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.read().clone())
    }

    fn get_goal(&self, id: &str) -> Result<Option<Goal>> {
        Ok(find(&self.goals.read(), id))
    }

    fn upsert_goal(&self, goal: Goal) -> Result<()> {
        upsert(&mut self.goals.write(), goal);
        Ok(())
    }

    fn delete_goal(&self, id: &str) -> Result<Option<Goal>> {
        Ok(remove(&mut self.goals.write(), id))
    }
}

impl LogRepository for MemoryStore {
    fn list_logs(&self) -> Result<Vec<Log>> {
        Ok(self.logs.read().clone())
    }

    fn get_log(&self, id: &str) -> Result<Option<Log>> {
        Ok(find(&self.logs.read(), id))
    }

    fn upsert_log(&self, log: Log) -> Result<()> {
        upsert(&mut self.logs.write(), log);
        Ok(())
    }

    fn delete_log(&self, id: &str) -> Result<Option<Log>> {
        Ok(remove(&mut self.logs.write(), id))
    }
}

impl TodoRepository for MemoryStore {
    fn list_todos(&self) -> Result<Vec<TodoItem>> {
        Ok(self.todos.read().clone())
    }

    fn upsert_todo(&self, todo: TodoItem) -> Result<()> {
        upsert(&mut self.todos.write(), todo);
        Ok(())
    }
}
