//! JSON file repository implementation
//!
//! Each collection is a single pretty-printed JSON array in
//! `<data_dir>/<collection>.json`, the same shape the web client keeps in
//! local storage. Writes go to a sibling temp file that is then renamed over
//! the original. A missing file reads as an empty collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use timepal_core::{GoalRepository, LogRepository, TodoRepository};
use timepal_domain::constants::{COLLECTION_GOALS, COLLECTION_LOGS, COLLECTION_TODOS};
use timepal_domain::{Goal, Log, Result, StorageConfig, TimePalError, TodoItem};

use super::{find, remove, upsert};

/// File-backed store for goals, logs and todos
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    // Serialises read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open (creating if needed) a store rooted at `data_dir`
    ///
    /// # Errors
    /// Returns `TimePalError::Storage` if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| {
            TimePalError::Storage(format!("Failed to create {}: {e}", data_dir.display()))
        })?;
        tracing::info!(data_dir = %data_dir.display(), "Opened JSON file store");
        Ok(Self { data_dir, write_lock: Mutex::new(()) })
    }

    /// Open the store configured in `storage`
    ///
    /// # Errors
    /// Same as [`Self::open`].
    pub fn from_config(storage: &StorageConfig) -> Result<Self> {
        Self::open(&storage.data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    fn read_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let path = self.collection_path(collection);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TimePalError::Storage(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(|e| {
            TimePalError::Serialization(format!("Corrupt collection {}: {e}", path.display()))
        })
    }

    fn write_collection<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<()> {
        let path = self.collection_path(collection);
        let staging = path.with_extension("json.tmp");
        let body = serde_json::to_vec_pretty(records)?;

        fs::write(&staging, body).map_err(|e| {
            TimePalError::Storage(format!("Failed to write {}: {e}", staging.display()))
        })?;
        fs::rename(&staging, &path).map_err(|e| {
            TimePalError::Storage(format!("Failed to replace {}: {e}", path.display()))
        })?;

        tracing::debug!(collection, records = records.len(), "Wrote collection");
        Ok(())
    }

    fn modify<T, R, F>(&self, collection: &str, change: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let _guard = self.write_lock.lock();
        let mut records = self.read_collection(collection)?;
        let outcome = change(&mut records);
        self.write_collection(collection, &records)?;
        Ok(outcome)
    }
}

impl GoalRepository for JsonFileStore {
    fn list_goals(&self) -> Result<Vec<Goal>> {
        self.read_collection(COLLECTION_GOALS)
    }

    fn get_goal(&self, id: &str) -> Result<Option<Goal>> {
        Ok(find(&self.read_collection::<Goal>(COLLECTION_GOALS)?, id))
    }

    fn upsert_goal(&self, goal: Goal) -> Result<()> {
        self.modify(COLLECTION_GOALS, |goals: &mut Vec<Goal>| upsert(goals, goal))
    }

    fn delete_goal(&self, id: &str) -> Result<Option<Goal>> {
        self.modify(COLLECTION_GOALS, |goals: &mut Vec<Goal>| remove(goals, id))
    }
}

impl LogRepository for JsonFileStore {
    fn list_logs(&self) -> Result<Vec<Log>> {
        self.read_collection(COLLECTION_LOGS)
    }

    fn get_log(&self, id: &str) -> Result<Option<Log>> {
        Ok(find(&self.read_collection::<Log>(COLLECTION_LOGS)?, id))
    }

    fn upsert_log(&self, log: Log) -> Result<()> {
        self.modify(COLLECTION_LOGS, |logs: &mut Vec<Log>| upsert(logs, log))
    }

    fn delete_log(&self, id: &str) -> Result<Option<Log>> {
        self.modify(COLLECTION_LOGS, |logs: &mut Vec<Log>| remove(logs, id))
    }
}

impl TodoRepository for JsonFileStore {
    fn list_todos(&self) -> Result<Vec<TodoItem>> {
        self.read_collection(COLLECTION_TODOS)
    }

    fn upsert_todo(&self, todo: TodoItem) -> Result<()> {
        self.modify(COLLECTION_TODOS, |todos: &mut Vec<TodoItem>| upsert(todos, todo))
    }
}
