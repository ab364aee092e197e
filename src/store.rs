//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity over the board,
//! the drag coordinator and the task composer.

use leptos::prelude::*;
use reactive_stores::Store;

use board_core::{Board, BoardResult, DragCoordinator, ProjectId, Status, Task, TaskComposer, TaskDraft, TaskId};

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Task collection plus active project / search filters
    pub board: Board,
    /// Task currently being dragged between columns
    pub drag: DragCoordinator,
    /// Add-task modal
    pub composer: TaskComposer,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            drag: DragCoordinator::new(),
            composer: TaskComposer::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Tasks for one column under the current project and search filters
pub fn store_column_tasks(store: &AppStore, status: Status) -> Vec<Task> {
    store.board().read().visible_tasks(status).into_iter().cloned().collect()
}

pub fn store_select_project(store: &AppStore, project_id: ProjectId) {
    store.board().write().set_active_project(project_id);
}

pub fn store_set_search(store: &AppStore, query: String) {
    store.board().write().set_search_query(query);
}

/// Remove a task by ID (no-op if already gone)
pub fn store_delete_task(store: &AppStore, task_id: &TaskId) {
    store.board().write().delete_task(task_id);
}

pub fn store_begin_drag(store: &AppStore, task_id: TaskId) {
    store.drag().write().begin_drag(task_id);
}

/// Drop the dragged task onto a column
///
/// Takes one write on the whole state: drag and board share the store lock.
pub fn store_drop_on(store: &AppStore, status: Status) {
    let mut state = store.write();
    let AppState { board, drag, .. } = &mut *state;
    drag.drop(board, status);
}

pub fn store_cancel_drag(store: &AppStore) {
    store.drag().write().cancel();
}

pub fn store_open_composer(store: &AppStore, status: Status) {
    store.composer().write().open_for(status);
}

/// Submit the add-task form as the configured acting user
pub fn store_submit_composer(store: &AppStore, draft: TaskDraft) -> BoardResult<Task> {
    let mut state = store.write();
    let AppState { board, composer, .. } = &mut *state;
    let actor = board.acting_user().clone();
    composer.submit(board, &actor, draft)
}

pub fn store_cancel_composer(store: &AppStore) {
    store.composer().write().cancel();
}
