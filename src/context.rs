//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use board_core::{Status, TaskId};

/// Drag signals keyed by task id, targeting board columns
pub type BoardDnd = DndSignals<TaskId, Status>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Pointer drag state for task cards and columns
    pub dnd: BoardDnd,
    /// Whether the login gate has been passed - read
    pub signed_in: ReadSignal<bool>,
    /// Whether the login gate has been passed - write
    set_signed_in: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(dnd: BoardDnd, signed_in: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            dnd,
            signed_in: signed_in.0,
            set_signed_in: signed_in.1,
        }
    }

    pub fn set_signed_in(&self, value: bool) {
        self.set_signed_in.set(value);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
