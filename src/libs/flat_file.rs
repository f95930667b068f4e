//! CSV-backed task store.
//!
//! One record per line, no header row, fields in the fixed order
//! id, title, description, urgency, status (integer), completion note.
//! The file is created lazily on first append; a missing file reads as
//! zero tasks. Rewrites go through a sibling temp file followed by an
//! atomic rename, so a failed rewrite leaves the original untouched.
//! There is no file locking; concurrent writers are out of scope.

use crate::libs::error::StorageError;
use crate::libs::task::{Task, TaskFilter, TaskStatus};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Default file name for the flat-file store.
pub const FLAT_FILE_NAME: &str = "tasks.csv";

pub struct FlatFileTasks {
    path: PathBuf,
}

impl FlatFileTasks {
    /// Binds the store to a file path without touching the filesystem.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Appends one record and flushes it to disk.
    pub fn append(&mut self, task: &Task) -> Result<(), StorageError> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(Self::record(task))?;
        writer.flush()?;

        Ok(())
    }

    /// Reads all records in file order and keeps the ones the filter accepts.
    pub fn scan(&self, filter: &TaskFilter) -> Result<Vec<Task>, StorageError> {
        Ok(self.read_all()?.into_iter().filter(|task| filter.matches(task)).collect())
    }

    /// Replaces the first record whose id matches the task's id.
    ///
    /// Fails with [`StorageError::NotFound`] when no record matches.
    pub fn update(&mut self, task: &Task) -> Result<(), StorageError> {
        let mut tasks = self.read_all()?;
        let slot = tasks
            .iter_mut()
            .find(|stored| stored.id == task.id)
            .ok_or_else(|| StorageError::NotFound(task.id.clone()))?;
        *slot = task.clone();

        self.write_all(&tasks)
    }

    /// Drops the first record with the given id; a no-op when absent.
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let mut tasks = self.read_all()?;
        match tasks.iter().position(|stored| stored.id == id) {
            Some(index) => {
                tasks.remove(index);
                self.write_all(&tasks)
            }
            None => Ok(()),
        }
    }

    fn read_all(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        // flexible(true) defers field-count checks to parse_record, which
        // reports the offending line instead of a bare csv error.
        let mut reader = ReaderBuilder::new().has_headers(false).flexible(true).from_path(&self.path)?;
        let mut tasks = Vec::new();
        for (index, record) in reader.records().enumerate() {
            tasks.push(Self::parse_record(index + 1, &record?)?);
        }

        Ok(tasks)
    }

    /// Serializes the full record set through a temp file and renames it
    /// over the original.
    fn write_all(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let tmp_path = self.path.with_extension("tmp");
        {
            let mut writer = WriterBuilder::new().has_headers(false).from_path(&tmp_path)?;
            for task in tasks {
                writer.write_record(Self::record(task))?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn record(task: &Task) -> [String; 6] {
        [
            task.id.clone(),
            task.title.clone(),
            task.description.clone(),
            task.urgency.to_string(),
            task.status.as_int().to_string(),
            task.completion_note.clone(),
        ]
    }

    fn parse_record(line: usize, record: &csv::StringRecord) -> Result<Task, StorageError> {
        if record.len() != 6 {
            return Err(StorageError::MalformedRecord {
                line,
                reason: format!("expected 6 fields, found {}", record.len()),
            });
        }

        let urgency: i64 = record[3].parse().map_err(|_| StorageError::MalformedRecord {
            line,
            reason: format!("urgency '{}' is not an integer", &record[3]),
        })?;
        let status_int: i64 = record[4].parse().map_err(|_| StorageError::MalformedRecord {
            line,
            reason: format!("status '{}' is not an integer", &record[4]),
        })?;
        let status = TaskStatus::from_int(status_int).ok_or_else(|| StorageError::MalformedRecord {
            line,
            reason: format!("unknown status value {}", status_int),
        })?;

        Ok(Task {
            id: record[0].to_string(),
            title: record[1].to_string(),
            description: record[2].to_string(),
            urgency,
            status,
            completion_note: record[5].to_string(),
        })
    }
}
