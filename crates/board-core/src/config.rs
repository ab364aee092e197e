//! Board Configuration
//!
//! Who acts on the board, which project opens first, and the tags stamped on new tasks.

use serde::Deserialize;

use crate::domain::{ProjectId, UserId};
use crate::error::BoardResult;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// User recorded as assignee on tasks created from the UI
    pub acting_user: UserId,
    /// Project selected at startup (first seeded project when unset or unknown)
    pub initial_project: Option<ProjectId>,
    /// Tags given to every newly created task
    pub default_tags: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            acting_user: UserId::from("u1"),
            initial_project: None,
            default_tags: vec!["New".to_string()],
        }
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
