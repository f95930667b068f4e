//! Relational task store backed by SQLite.
//!
//! A single `task` table holds the six-field record. Every statement is
//! parameterized; caller-supplied values are never formatted into SQL
//! text. The content filter uses `instr` rather than `LIKE` so substring
//! matching stays case-sensitive, identical to the flat-file backend.

use super::db::Db;
use crate::libs::error::StorageError;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskStatus};
use crate::msg_debug;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};
use std::path::Path;

// Deliberately minimal schema: no primary key, no indexes. Uniqueness of
// task_id is the application's concern, not the database's.
const SCHEMA_TASK: &str = "CREATE TABLE IF NOT EXISTS task (
    task_id TEXT,
    title TEXT,
    desc TEXT,
    urgency INTEGER,
    status INTEGER,
    completion_note TEXT
)";
const INSERT_TASK: &str = "INSERT INTO task (task_id, title, desc, urgency, status, completion_note) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASKS: &str = "SELECT task_id, title, desc, urgency, status, completion_note FROM task";
const COUNT_TASK: &str = "SELECT COUNT(*) FROM task WHERE task_id = ?1";
const UPDATE_TASK: &str = "UPDATE task SET task_id = ?1, title = ?2, desc = ?3, urgency = ?4, status = ?5, completion_note = ?6 WHERE task_id = ?7";
const DELETE_TASK: &str = "DELETE FROM task WHERE task_id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the store, creating schema and seed data on first use.
    ///
    /// An existing database file is reused as-is; the seed rows are only
    /// inserted together with the freshly created schema.
    pub fn new(path: &Path) -> Result<Tasks, StorageError> {
        let db = Db::new(path)?;
        let mut tasks = Tasks { conn: db.conn };
        if db.created {
            tasks.bootstrap().map_err(|e| StorageError::Init {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        Ok(tasks)
    }

    pub fn insert(&mut self, task: &Task) -> Result<(), StorageError> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.urgency,
                task.status.as_int(),
                task.completion_note
            ],
        )?;

        Ok(())
    }

    /// Fetches tasks matching the filter.
    ///
    /// The WHERE clause mirrors [`TaskFilter::matches`]: empty dimensions
    /// add no predicate, non-empty ones combine with AND. Result order is
    /// whatever SQLite returns; no ORDER BY is applied.
    pub fn fetch(&mut self, filter: &TaskFilter) -> Result<Vec<Task>, StorageError> {
        let mut clauses: Vec<String> = Vec::new();
        let mut bindings: Vec<Value> = Vec::new();

        if !filter.statuses.is_empty() {
            clauses.push(format!("status IN ({})", vec!["?"; filter.statuses.len()].join(", ")));
            bindings.extend(filter.statuses.iter().map(|status| Value::Integer(status.as_int())));
        }
        if !filter.urgencies.is_empty() {
            clauses.push(format!("urgency IN ({})", vec!["?"; filter.urgencies.len()].join(", ")));
            bindings.extend(filter.urgencies.iter().map(|urgency| Value::Integer(*urgency)));
        }
        if !filter.content.is_empty() {
            clauses.push("(instr(title, ?) > 0 OR instr(desc, ?) > 0 OR instr(completion_note, ?) > 0)".to_string());
            bindings.extend(std::iter::repeat(Value::from(filter.content.clone())).take(3));
        }

        let sql = if clauses.is_empty() {
            SELECT_TASKS.to_string()
        } else {
            format!("{} WHERE {}", SELECT_TASKS, clauses.join(" AND "))
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bindings.iter()), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, i64>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut tasks = Vec::new();
        for (index, row) in rows.enumerate() {
            let (id, title, description, urgency, status_int, completion_note) = row?;
            let status = TaskStatus::from_int(status_int).ok_or(StorageError::MalformedRecord {
                line: index + 1,
                reason: format!("unknown status value {}", status_int),
            })?;
            tasks.push(Task {
                id,
                title,
                description,
                urgency,
                status,
                completion_note,
            });
        }

        Ok(tasks)
    }

    /// Updates all six columns of the row with the task's id.
    ///
    /// Fails with [`StorageError::NotFound`] when no such row exists.
    pub fn update(&mut self, task: &Task) -> Result<(), StorageError> {
        let count: i64 = self.conn.query_row(COUNT_TASK, params![task.id], |row| row.get(0))?;
        if count == 0 {
            return Err(StorageError::NotFound(task.id.clone()));
        }

        self.conn.execute(
            UPDATE_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.urgency,
                task.status.as_int(),
                task.completion_note,
                task.id
            ],
        )?;

        Ok(())
    }

    /// Deletes all rows with the given id; a no-op when none match.
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.conn.execute(DELETE_TASK, params![id])?;

        Ok(())
    }

    fn bootstrap(&mut self) -> rusqlite::Result<()> {
        self.conn.execute(SCHEMA_TASK, [])?;
        self.seed()
    }

    /// Inserts the three starter tasks, each with a fresh random id.
    fn seed(&mut self) -> rusqlite::Result<()> {
        let seed_tasks = [
            Task::new("Laundry", "Wash Clothes", 3),
            Task::new("Homework", "Math and Physics", 5),
            Task::new("Museum", "Egypt things", 4),
        ];

        let mut stmt = self.conn.prepare(INSERT_TASK)?;
        for task in &seed_tasks {
            stmt.execute(params![
                task.id,
                task.title,
                task.description,
                task.urgency,
                task.status.as_int(),
                task.completion_note
            ])?;
        }
        msg_debug!(Message::SeedLoaded(seed_tasks.len()));

        Ok(())
    }
}
