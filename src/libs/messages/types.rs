#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TasksNotFound,
    TaskNotFoundWithId(String),
    TasksFound(usize),

    // === CONFIGURATION MESSAGES ===
    ConfigWizardHeader,
    ConfigSaved,

    // === STORAGE MESSAGES ===
    StorageReady(String),
    SeedLoaded(usize),
}
