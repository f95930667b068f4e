//! Backend selection and the uniform storage handle.
//!
//! A [`StorageTarget`] names one of the two backends together with its
//! file path. [`TaskStore::open`] turns the target into a typed handle,
//! bootstrapping the SQLite store on first use, and every task operation
//! dispatches through that handle. The handle is chosen once per session
//! and owned by the caller; it is not shared global state and is not
//! designed for concurrent use from multiple threads.

use crate::db::tasks::Tasks;
use crate::libs::error::StorageError;
use crate::libs::flat_file::FlatFileTasks;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::msg_debug;
use std::path::PathBuf;

/// Storage backend plus the file path it persists to.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageTarget {
    FlatFile(PathBuf),
    Sqlite(PathBuf),
}

/// Active storage backend for a session.
///
/// Both variants expose the same contract: explicit save, filtered load,
/// strict update, and idempotent delete.
pub enum TaskStore {
    FlatFile(FlatFileTasks),
    Sqlite(Tasks),
}

impl TaskStore {
    /// Opens the selected backend.
    ///
    /// Opening a SQLite target whose file does not exist yet creates the
    /// schema and inserts the seed tasks. A flat-file target needs no
    /// bootstrap; the file appears lazily on first save.
    pub fn open(target: &StorageTarget) -> Result<Self, StorageError> {
        let store = match target {
            StorageTarget::FlatFile(path) => TaskStore::FlatFile(FlatFileTasks::new(path.clone())),
            StorageTarget::Sqlite(path) => TaskStore::Sqlite(Tasks::new(path)?),
        };
        let path = match target {
            StorageTarget::FlatFile(path) | StorageTarget::Sqlite(path) => path,
        };
        msg_debug!(Message::StorageReady(path.display().to_string()));

        Ok(store)
    }

    /// Persists a new task record.
    pub fn save(&mut self, task: &Task) -> Result<(), StorageError> {
        match self {
            TaskStore::FlatFile(store) => store.append(task),
            TaskStore::Sqlite(store) => store.insert(task),
        }
    }

    /// Loads all tasks accepted by the filter.
    pub fn load(&mut self, filter: &TaskFilter) -> Result<Vec<Task>, StorageError> {
        match self {
            TaskStore::FlatFile(store) => store.scan(filter),
            TaskStore::Sqlite(store) => store.fetch(filter),
        }
    }

    /// Rewrites the stored record with the task's id.
    ///
    /// Fails with [`StorageError::NotFound`] when the id is absent, in
    /// both backends.
    pub fn update(&mut self, task: &Task) -> Result<(), StorageError> {
        match self {
            TaskStore::FlatFile(store) => store.update(task),
            TaskStore::Sqlite(store) => store.update(task),
        }
    }

    /// Removes the record with the given id; deleting an absent id is a
    /// no-op in both backends.
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        match self {
            TaskStore::FlatFile(store) => store.delete(id),
            TaskStore::Sqlite(store) => store.delete(id),
        }
    }
}
