//! Board Core
//!
//! In-memory kanban state:
//! - domain: users, projects, tasks, statuses and board columns
//! - store: the `Board`, sole owner of the task collection
//! - filter: per-column visible task derivation
//! - drag / composer: drag-and-drop and add-task flows over the board

pub mod composer;
pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod filter;
pub mod ids;
pub mod seed;
pub mod store;


pub use composer::TaskComposer;
pub use config::BoardConfig;
pub use domain::{
    column_title, Column, Entity, Priority, Project, ProjectId, Status, Task, TaskDraft, TaskId, User, UserId,
    COLUMNS,
};
pub use drag::{DragCoordinator, DragState};
pub use error::{BoardError, BoardResult};
pub use filter::visible_tasks;
pub use ids::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, TimestampIds};
pub use seed::Seed;
pub use store::Board;
