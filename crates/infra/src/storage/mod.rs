//! Repository implementations for the core ports
//!
//! - [`MemoryStore`]: process-local collections, for tests and embedding
//! - [`JsonFileStore`]: one JSON array file per collection under a data dir

pub mod json_store;
pub mod memory;

use timepal_domain::{Goal, Log, TodoItem};

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

/// Records stored by string id
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Goal {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Log {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for TodoItem {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Replace the record with the same key in place, or append.
pub(crate) fn upsert<T: Keyed>(records: &mut Vec<T>, record: T) {
    match records.iter_mut().find(|existing| existing.key() == record.key()) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}

pub(crate) fn remove<T: Keyed>(records: &mut Vec<T>, id: &str) -> Option<T> {
    let index = records.iter().position(|record| record.key() == id)?;
    Some(records.remove(index))
}

pub(crate) fn find<T: Keyed + Clone>(records: &[T], id: &str) -> Option<T> {
    records.iter().find(|record| record.key() == id).cloned()
}
