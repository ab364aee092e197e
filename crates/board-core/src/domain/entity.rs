//! Domain Layer - Core Entity Trait
//!
//! Every board entity carries a unique, cheaply comparable identifier.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Look up an entity by id in a slice
pub fn find_by_id<'a, E: Entity>(entities: &'a [E], id: &E::Id) -> Option<&'a E> {
    entities.iter().find(|entity| entity.id() == id)
}

/// Defines a string-backed identifier newtype.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

string_id!(
    /// Identifier of a [`super::User`]
    UserId
);
string_id!(
    /// Identifier of a [`super::Project`]
    ProjectId
);
string_id!(
    /// Identifier of a [`super::Task`], unique across the whole board
    TaskId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_conversion() {
        let id = TaskId::from("t1");
        assert_eq!(id.to_string(), "t1");
        assert_eq!(id.as_str(), "t1");
        assert_eq!(id, TaskId::new(String::from("t1")));
    }

    #[test]
    fn test_find_by_id() {
        let users = vec![
            crate::domain::User::new("u1", "Alex", ""),
            crate::domain::User::new("u2", "Sarah", ""),
        ];
        assert_eq!(find_by_id(&users, &UserId::from("u2")).map(|u| u.name.as_str()), Some("Sarah"));
        assert!(find_by_id(&users, &UserId::from("u9")).is_none());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProjectId::from("p2")).unwrap();
        assert_eq!(json, "\"p2\"");
    }
}
