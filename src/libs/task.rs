//! Task entity, status enum, and the shared filter contract.
//!
//! Both storage backends persist the same six-field record and answer
//! queries through [`TaskFilter`]. The flat-file backend applies
//! [`TaskFilter::matches`] directly while the SQLite backend builds an
//! equivalent parameterized WHERE clause, so filter results are
//! identical regardless of where the tasks live.

use clap::ValueEnum;
use rand::Rng;
use std::fmt;

/// Length of generated task identifiers.
pub const TASK_ID_LEN: usize = 8;

/// Lifecycle state of a task, ordered from creation to completion.
///
/// Stored as its integer value (0, 1, 2) in both backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum TaskStatus {
    Created,
    Ongoing,
    Completed,
}

impl TaskStatus {
    /// Integer representation used by both storage backends.
    pub fn as_int(&self) -> i64 {
        match self {
            TaskStatus::Created => 0,
            TaskStatus::Ongoing => 1,
            TaskStatus::Completed => 2,
        }
    }

    /// Parses the stored integer representation.
    pub fn from_int(value: i64) -> Option<Self> {
        match value {
            0 => Some(TaskStatus::Created),
            1 => Some(TaskStatus::Ongoing),
            2 => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// All statuses in lifecycle order.
    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::Created, TaskStatus::Ongoing, TaskStatus::Completed]
    }

    /// Human-readable labels for menu rendering.
    pub fn formatted_options() -> Vec<String> {
        Self::all().iter().map(|status| status.to_string()).collect()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Created => "Created",
            TaskStatus::Ongoing => "Ongoing",
            TaskStatus::Completed => "Completed",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub urgency: i64,
    pub status: TaskStatus,
    pub completion_note: String,
}

impl Task {
    /// Creates a task with a fresh random id and default status.
    ///
    /// Nothing is persisted until the caller saves the task explicitly.
    /// Urgency is taken as given; range checks belong to the input layer.
    pub fn new(title: &str, description: &str, urgency: i64) -> Self {
        Task {
            id: Self::random_id(),
            title: title.to_string(),
            description: description.to_string(),
            urgency,
            status: TaskStatus::Created,
            completion_note: String::new(),
        }
    }

    /// Generates an id of [`TASK_ID_LEN`] random lowercase ASCII letters.
    pub fn random_id() -> String {
        let mut rng = rand::rng();
        (0..TASK_ID_LEN).map(|_| rng.random_range('a'..='z')).collect()
    }
}

/// Predicate set applied when loading tasks.
///
/// An empty dimension places no constraint; non-empty dimensions combine
/// with logical AND. The content filter is a case-sensitive substring
/// test against title, description, or completion note.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub statuses: Vec<TaskStatus>,
    pub urgencies: Vec<i64>,
    pub content: String,
}

impl TaskFilter {
    /// Reference predicate shared by both backends.
    pub fn matches(&self, task: &Task) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&task.status) {
            return false;
        }
        if !self.urgencies.is_empty() && !self.urgencies.contains(&task.urgency) {
            return false;
        }
        if !self.content.is_empty()
            && !task.title.contains(&self.content)
            && !task.description.contains(&self.content)
            && !task.completion_note.contains(&self.content)
        {
            return false;
        }
        true
    }
}
