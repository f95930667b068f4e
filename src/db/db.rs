use crate::libs::error::StorageError;
use rusqlite::Connection;
use std::path::Path;

/// Default file name for the embedded SQLite store.
pub const DB_FILE_NAME: &str = "tasks.sqlite";

pub struct Db {
    pub conn: Connection,
    /// True when this open created the database file, which means the
    /// caller still has to create its schema and seed data.
    pub created: bool,
}

impl Db {
    /// Opens the database at the given path, creating the file if absent.
    pub fn new(path: &Path) -> Result<Db, StorageError> {
        let created = !path.exists();
        let conn = Connection::open(path).map_err(|e| StorageError::Init {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Db { conn, created })
    }
}
