//! Domain Layer
//!
//! Plain data shapes for the board. No behavior beyond small helpers.

mod entity;
mod project;
mod status;
mod task;
mod user;

pub use entity::{find_by_id, Entity, ProjectId, TaskId, UserId};
pub use project::Project;
pub use status::{column_title, Column, Priority, Status, COLUMNS};
pub use task::{Task, TaskDraft};
pub use user::User;
