//! Task Composer
//!
//! The add-task modal flow: which column it was opened from, and whether it
//! is showing. Submitting delegates to [`Board::add_task`].

use tracing::debug;

use crate::domain::{column_title, Status, Task, TaskDraft, User};
use crate::error::{BoardError, BoardResult};
use crate::store::Board;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskComposer {
    open: bool,
    target: Option<Status>,
}

impl TaskComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn target(&self) -> Option<Status> {
        self.target
    }

    /// Heading of the column the composer was opened from
    pub fn target_title(&self) -> &'static str {
        self.target.map(column_title).unwrap_or_default()
    }

    pub fn open_for(&mut self, status: Status) {
        debug!(%status, "composer opened");
        self.open = true;
        self.target = Some(status);
    }

    /// Create the task and close.
    ///
    /// A blank title is rejected here without calling the board, and the
    /// composer stays open.
    pub fn submit(&mut self, board: &mut Board, actor: &User, draft: TaskDraft) -> BoardResult<Task> {
        let target = match (self.open, self.target) {
            (true, Some(target)) => target,
            _ => return Err(BoardError::ComposerClosed),
        };
        if !draft.has_title() {
            return Err(BoardError::EmptyTitle);
        }
        let task = board.add_task(actor, target, draft)?;
        self.close();
        Ok(task)
    }

    pub fn cancel(&mut self) {
        debug!("composer cancelled");
        self.close();
    }

    fn close(&mut self) {
        self.open = false;
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::domain::Priority;
    use crate::seed::Seed;

    fn board() -> Board {
        Board::new(Seed::demo(), BoardConfig::default()).unwrap()
    }

    #[test]
    fn test_submit_adds_to_target_column_and_closes() {
        let mut board = board();
        let actor = board.acting_user().clone();
        let mut composer = TaskComposer::new();

        composer.open_for(Status::Review);
        assert_eq!(composer.target_title(), "审核中");

        let task = composer
            .submit(&mut board, &actor, TaskDraft::new("Audit", "", Priority::High))
            .unwrap();
        assert_eq!(task.status, Status::Review);
        assert!(!composer.is_open());
        assert_eq!(composer.target(), None);
        assert_eq!(board.tasks().len(), 7);
    }

    #[test]
    fn test_blank_title_keeps_composer_open() {
        let mut board = board();
        let actor = board.acting_user().clone();
        let mut composer = TaskComposer::new();
        composer.open_for(Status::Todo);

        let err = composer.submit(&mut board, &actor, TaskDraft::new("  ", "x", Priority::Low));
        assert!(matches!(err, Err(BoardError::EmptyTitle)));
        assert!(composer.is_open());
        assert_eq!(board.tasks().len(), 6);
    }

    #[test]
    fn test_submit_when_closed_is_rejected() {
        let mut board = board();
        let actor = board.acting_user().clone();
        let mut composer = TaskComposer::new();
        let err = composer.submit(&mut board, &actor, TaskDraft::new("x", "", Priority::Low));
        assert!(matches!(err, Err(BoardError::ComposerClosed)));
    }

    #[test]
    fn test_cancel_mutates_nothing() {
        let mut board = board();
        let before = board.tasks().to_vec();
        let mut composer = TaskComposer::new();
        composer.open_for(Status::Done);
        composer.cancel();
        assert!(!composer.is_open());
        assert_eq!(board.tasks(), before.as_slice());
    }
}
