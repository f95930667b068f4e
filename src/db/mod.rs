//! Relational storage layer built on SQLite.
//!
//! Holds the embedded-database half of the storage abstraction: connection
//! management, first-time schema creation with seed data, and parameterized
//! CRUD over the `task` table. The flat-file half lives in
//! [`crate::libs::flat_file`]; both are dispatched through
//! [`crate::libs::storage::TaskStore`].

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens SQLite connections and reports
/// whether the database file had to be created.
pub mod db;

/// Task CRUD operations over the `task` table.
///
/// Handles inserts, filtered queries, updates, deletes, and the one-time
/// seed-data load.
pub mod tasks;
