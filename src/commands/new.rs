use crate::{libs::messages::Message, libs::task::Task, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Short task title
    #[arg(required = true)]
    title: String,

    /// Free-text description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Urgency from 1 (low) to 5 (high)
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(1..=5))]
    urgency: i64,
}

pub fn cmd(args: NewArgs) -> Result<()> {
    let task = Task::new(&args.title, &args.description, args.urgency);
    super::open_store()?.save(&task)?;

    msg_success!(Message::TaskCreated(task.title));
    Ok(())
}
