use crate::{
    libs::messages::Message,
    libs::task::{TaskFilter, TaskStatus},
    libs::view::View,
    msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Keep only tasks with these statuses
    #[arg(short, long, value_enum)]
    status: Vec<TaskStatus>,

    /// Keep only tasks with these urgencies
    #[arg(short, long)]
    urgency: Vec<i64>,

    /// Case-sensitive substring of title, description, or note
    #[arg(short, long, default_value = "")]
    content: String,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let filter = TaskFilter {
        statuses: args.status,
        urgencies: args.urgency,
        content: args.content,
    };
    let tasks = super::open_store()?.load(&filter)?;
    crate::msg_debug!(Message::TasksFound(tasks.len()));

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }
    View::tasks(&tasks);

    Ok(())
}
