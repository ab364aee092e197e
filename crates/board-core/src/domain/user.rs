//! User Entity

use serde::{Deserialize, Serialize};
use super::entity::{Entity, UserId};

/// A board member that tasks can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar_url: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
