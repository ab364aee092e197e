//! Kanban Board App
//!
//! Login gate, then the board shell: project sidebar, header with search,
//! four status columns, add-task modal.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals};
use reactive_stores::Store;

use board_core::{Board, BoardConfig, Seed, Status, TaskId};
use crate::auth;
use crate::components::{AddTaskModal, BoardColumn, LoginPage, Sidebar};
use crate::context::{use_app_context, AppContext};
use crate::store::{
    store_begin_drag, store_cancel_drag, store_drop_on, store_set_search, use_app_store, AppState,
    AppStateStoreFields,
};

/// Board settings embedded at build time
const BOARD_CONFIG: &str = include_str!("../board.json");

/// Build the demo board, falling back to defaults when the embedded config is unusable
fn load_board() -> Board {
    let config = BoardConfig::from_json(BOARD_CONFIG).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[APP] Invalid board.json, using defaults: {}", e).into());
        BoardConfig::default()
    });
    Board::new(Seed::demo(), config).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[APP] Board config rejected, using defaults: {}", e).into());
        Board::new(Seed::demo(), BoardConfig::default()).expect("demo seed is valid")
    })
}

#[component]
pub fn App() -> impl IntoView {
    let (signed_in, set_signed_in) = signal(auth::is_signed_in());

    let store = Store::new(AppState::new(load_board()));
    provide_context(store);

    let dnd = create_dnd_signals::<TaskId, Status>();
    provide_context(AppContext::new(dnd, (signed_in, set_signed_in)));

    // Pointer release over a column drops there; anywhere else cancels
    bind_global_handlers(
        dnd,
        move |task_id| store_begin_drag(&store, task_id),
        move |_task_id, target| match target {
            Some(status) => store_drop_on(&store, status),
            None => store_cancel_drag(&store),
        },
    );

    view! {
        <Show when=move || signed_in.get() fallback=|| view! { <LoginPage /> }>
            <BoardShell />
        </Show>
    }
}

#[component]
fn BoardShell() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let project_name = move || {
        store
            .board()
            .read()
            .active_project()
            .map(|p| p.name.clone())
            .unwrap_or_default()
    };
    let search_query = move || store.board().read().search_query().to_string();
    let columns = store.board().read_untracked().columns();

    let sign_out = move |_| {
        auth::sign_out();
        ctx.set_signed_in(false);
    };

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                <header class="board-header">
                    <h1 class="board-title">{project_name}</h1>
                    <input
                        class="board-search"
                        type="text"
                        placeholder="搜索任务..."
                        prop:value=search_query
                        on:input=move |ev| store_set_search(&store, event_target_value(&ev))
                    />
                    <button class="sign-out-btn" on:click=sign_out>"退出"</button>
                </header>

                <div class="board-canvas">
                    {columns.iter().map(|&column| view! { <BoardColumn column=column /> }).collect_view()}
                </div>
            </main>

            <AddTaskModal />
        </div>
    }
}
