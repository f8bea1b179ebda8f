//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the core repository ports, enabling
//! deterministic service tests without touching the filesystem.

use std::sync::{Arc, Mutex};

use timepal_core::{GoalRepository, LogRepository, TodoRepository};
use timepal_domain::{Goal, Log, Result as DomainResult, TimePalError, TodoItem};

fn upsert_by_id<T: Clone>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> &str) {
    let id = id_of(&item).to_string();
    match items.iter_mut().find(|existing| id_of(existing) == id) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

/// In-memory mock for `GoalRepository`.
#[derive(Default, Clone)]
pub struct MockGoalRepository {
    goals: Arc<Mutex<Vec<Goal>>>,
}

impl MockGoalRepository {
    /// Create a new mock seeded with the provided goals.
    pub fn new(goals: Vec<Goal>) -> Self {
        Self { goals: Arc::new(Mutex::new(goals)) }
    }

    /// Snapshot of everything stored so far.
    pub fn stored(&self) -> Vec<Goal> {
        self.goals.lock().unwrap().clone()
    }
}

impl GoalRepository for MockGoalRepository {
    fn list_goals(&self) -> DomainResult<Vec<Goal>> {
        Ok(self.goals.lock().unwrap().clone())
    }

    fn get_goal(&self, id: &str) -> DomainResult<Option<Goal>> {
        Ok(self.goals.lock().unwrap().iter().find(|goal| goal.id == id).cloned())
    }

    fn upsert_goal(&self, goal: Goal) -> DomainResult<()> {
        upsert_by_id(&mut self.goals.lock().unwrap(), goal, |goal| goal.id.as_str());
        Ok(())
    }

    fn delete_goal(&self, id: &str) -> DomainResult<Option<Goal>> {
        let mut goals = self.goals.lock().unwrap();
        let index = goals.iter().position(|goal| goal.id == id);
        Ok(index.map(|index| goals.remove(index)))
    }
}

/// In-memory mock for `LogRepository`.
#[derive(Default, Clone)]
pub struct MockLogRepository {
    logs: Arc<Mutex<Vec<Log>>>,
}

impl MockLogRepository {
    /// Create a new mock seeded with the provided logs.
    pub fn new(logs: Vec<Log>) -> Self {
        Self { logs: Arc::new(Mutex::new(logs)) }
    }

    /// Snapshot of everything stored so far.
    pub fn stored(&self) -> Vec<Log> {
        self.logs.lock().unwrap().clone()
    }
}

impl LogRepository for MockLogRepository {
    fn list_logs(&self) -> DomainResult<Vec<Log>> {
        Ok(self.logs.lock().unwrap().clone())
    }

    fn get_log(&self, id: &str) -> DomainResult<Option<Log>> {
        Ok(self.logs.lock().unwrap().iter().find(|log| log.id == id).cloned())
    }

    fn upsert_log(&self, log: Log) -> DomainResult<()> {
        upsert_by_id(&mut self.logs.lock().unwrap(), log, |log| log.id.as_str());
        Ok(())
    }

    fn delete_log(&self, id: &str) -> DomainResult<Option<Log>> {
        let mut logs = self.logs.lock().unwrap();
        let index = logs.iter().position(|log| log.id == id);
        Ok(index.map(|index| logs.remove(index)))
    }
}

/// In-memory mock for `TodoRepository`.
#[derive(Default, Clone)]
pub struct MockTodoRepository {
    todos: Arc<Mutex<Vec<TodoItem>>>,
}

impl MockTodoRepository {
    /// Create a new mock seeded with the provided todos.
    pub fn new(todos: Vec<TodoItem>) -> Self {
        Self { todos: Arc::new(Mutex::new(todos)) }
    }

    /// Overwrite the completed units of a stored todo.
    pub fn upsert_units(&self, id: &str, units: f64) {
        let mut todos = self.todos.lock().unwrap();
        if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed_units = Some(units);
        }
    }

    /// Stored todo by id.
    pub fn get(&self, id: &str) -> Option<TodoItem> {
        self.todos.lock().unwrap().iter().find(|todo| todo.id == id).cloned()
    }
}

impl TodoRepository for MockTodoRepository {
    fn list_todos(&self) -> DomainResult<Vec<TodoItem>> {
        Ok(self.todos.lock().unwrap().clone())
    }

    fn upsert_todo(&self, todo: TodoItem) -> DomainResult<()> {
        upsert_by_id(&mut self.todos.lock().unwrap(), todo, |todo| todo.id.as_str());
        Ok(())
    }
}

/// Log repository whose writes always fail.
#[derive(Default, Clone)]
pub struct FailingLogRepository;

impl LogRepository for FailingLogRepository {
    fn list_logs(&self) -> DomainResult<Vec<Log>> {
        Ok(Vec::new())
    }

    fn get_log(&self, _id: &str) -> DomainResult<Option<Log>> {
        Ok(None)
    }

    fn upsert_log(&self, _log: Log) -> DomainResult<()> {
        Err(TimePalError::Storage("disk full".to_string()))
    }

    fn delete_log(&self, _id: &str) -> DomainResult<Option<Log>> {
        Err(TimePalError::Storage("disk full".to_string()))
    }
}
