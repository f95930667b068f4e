//! # Takt - Task Keeping Tool
//!
//! A command-line personal task tracker with a dual-backend storage
//! layer: tasks persist either to a CSV flat file or to an embedded
//! SQLite database, behind one uniform contract.
//!
//! ## Features
//!
//! - **Task Management**: Create, list, edit, and delete tasks
//! - **Dual Storage**: CSV flat file or embedded SQLite, selected once
//!   per session through the configuration file
//! - **Consistent Filters**: Status, urgency, and content filters behave
//!   identically on both backends
//! - **Seed Bootstrap**: A fresh SQLite store starts with three sample
//!   tasks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use takt::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
