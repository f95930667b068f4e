use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    #[arg(required = true)]
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete task '{}'?", args.id))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    // Deleting an id that is already gone is not an error.
    super::open_store()?.delete(&args.id)?;

    msg_success!(Message::TaskDeleted(args.id));
    Ok(())
}
