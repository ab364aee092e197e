use thiserror::Error;

use crate::domain::{ProjectId, TaskId, UserId};

/// Board-level errors
///
/// Operations on an absent task id are not errors; they return `None`.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Task composer is not open")]
    ComposerClosed,

    #[error("Unknown project: {0}")]
    UnknownProject(ProjectId),

    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(TaskId),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type BoardResult<T> = std::result::Result<T, BoardError>;
