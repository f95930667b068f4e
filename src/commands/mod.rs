pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod new;

use crate::libs::config::Config;
use crate::libs::storage::TaskStore;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create and save a task")]
    New(new::NewArgs),
    #[command(about = "List tasks with optional filters")]
    List(list::ListArgs),
    #[command(about = "Edit a stored task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::New(args) => new::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
        }
    }
}

/// Opens the storage backend selected by the configuration file.
///
/// Every task command goes through this single entry point, so the
/// backend is chosen once per invocation and handed down explicitly.
pub(crate) fn open_store() -> Result<TaskStore> {
    let target = Config::read()?.storage_target()?;
    Ok(TaskStore::open(&target)?)
}
