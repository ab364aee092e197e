//! Project Entity
//!
//! Projects partition the task collection; the sidebar selects one at a time.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    /// Emoji shown in the sidebar
    pub icon: String,
}

impl Project {
    pub fn new(
        id: impl Into<ProjectId>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
