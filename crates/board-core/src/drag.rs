//! Drag Coordinator
//!
//! Tracks the task being dragged between columns, independent of any input
//! event system. A drop applies the status change through the [`Board`].

use tracing::debug;

use crate::domain::{Status, TaskId};
use crate::store::Board;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(TaskId),
}

#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    /// Id of the task currently held, if any
    pub fn dragging(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    /// Start holding `id`. Single pointer: a new drag replaces any held id.
    pub fn begin_drag(&mut self, id: TaskId) {
        debug!(id = %id, "drag started");
        self.state = DragState::Dragging(id);
    }

    /// Drop the held task onto `target`'s column and return to idle.
    ///
    /// Returns the moved id, or `None` when nothing was being dragged.
    pub fn drop(&mut self, board: &mut Board, target: Status) -> Option<TaskId> {
        let DragState::Dragging(id) = std::mem::take(&mut self.state) else {
            debug!(%target, "drop while idle ignored");
            return None;
        };
        board.move_task(&id, target);
        debug!(id = %id, %target, "drag dropped");
        Some(id)
    }

    /// Abort without touching any task
    pub fn cancel(&mut self) {
        if let DragState::Dragging(id) = std::mem::take(&mut self.state) {
            debug!(id = %id, "drag cancelled");
        }
    }
}
