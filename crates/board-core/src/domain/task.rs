//! Task Entity
//!
//! A card on the board. Only `status` changes after creation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, ProjectId, TaskId};
use super::status::{Priority, Status};
use super::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique across the whole board, not just within a project
    pub id: TaskId,
    pub project_id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub assignees: Vec<User>,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl Task {
    /// Create a task with no description, assignees, due date or tags
    pub fn new(
        id: impl Into<TaskId>,
        project_id: impl Into<ProjectId>,
        title: impl Into<String>,
        status: Status,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            title: title.into(),
            description: None,
            status,
            priority,
            assignees: Vec::new(),
            due_date: None,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_assignees(mut self, assignees: Vec<User>) -> Self {
        self.assignees = assignees;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive substring match on the title; empty query matches everything
    pub fn title_matches(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Due date as shown on a card (`MM/DD`)
    pub fn due_label(&self) -> Option<String> {
        self.due_date.map(|date| date.format("%m/%d").to_string())
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// User input captured by the add-task form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
