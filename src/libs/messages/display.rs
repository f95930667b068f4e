//! Display implementation for takt application messages.
//!
//! Converts structured [`Message`] values into the human-readable text
//! shown in the terminal. Keeping every user-facing string in one place
//! keeps wording consistent and makes the text easy to revise.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task '{}' deleted", id),
            Message::TasksNotFound => "No tasks match the given filters".to_string(),
            Message::TaskNotFoundWithId(id) => format!("No task with id '{}'", id),
            Message::TasksFound(count) => format!("{} task(s) found", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigWizardHeader => "Configure takt storage".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageReady(path) => format!("Storage ready at {}", path),
            Message::SeedLoaded(count) => format!("Inserted {} starter task(s)", count),
        };
        write!(f, "{}", text)
    }
}
