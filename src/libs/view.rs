use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "URGENCY", "STATUS", "NOTE"]);
        for task in tasks {
            // Urgency renders as a star count; out-of-range values are
            // stored as-is, so clamp only for display.
            let stars = "★".repeat(task.urgency.clamp(0, 5) as usize);
            table.add_row(row![task.id, task.title, task.description, stars, task.status, task.completion_note]);
        }
        table.printstd();
    }
}
