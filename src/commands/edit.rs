use crate::{
    libs::messages::Message,
    libs::task::{TaskFilter, TaskStatus},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to edit
    #[arg(required = true)]
    id: String,

    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New description
    #[arg(short, long)]
    description: Option<String>,

    /// New urgency from 1 (low) to 5 (high)
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..=5))]
    urgency: Option<i64>,

    /// New status
    #[arg(short, long, value_enum)]
    status: Option<TaskStatus>,

    /// Completion note
    #[arg(short, long)]
    note: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut store = super::open_store()?;

    let tasks = store.load(&TaskFilter::default())?;
    let Some(mut task) = tasks.into_iter().find(|task| task.id == args.id) else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id));
    };

    if let Some(title) = args.title {
        task.title = title;
    }
    if let Some(description) = args.description {
        task.description = description;
    }
    if let Some(urgency) = args.urgency {
        task.urgency = urgency;
    }
    if let Some(status) = args.status {
        task.status = status;
    }
    if let Some(note) = args.note {
        task.completion_note = note;
    }

    store.update(&task)?;

    msg_success!(Message::TaskUpdated(task.title));
    Ok(())
}
