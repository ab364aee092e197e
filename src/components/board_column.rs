//! Board Column Component
//!
//! One status column: header with count and add button, then the cards.
//! The card area is a drop target for dragged tasks.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter};

use board_core::{Column, Task};
use crate::components::TaskCard;
use crate::context::use_app_context;
use crate::store::{store_column_tasks, store_open_composer, use_app_store};

#[component]
pub fn BoardColumn(column: Column) -> impl IntoView {
    let store = use_app_store();
    let dnd = use_app_context().dnd;
    let status = column.status;

    let tasks = Memo::new(move |_| store_column_tasks(&store, status));
    let is_drop_target = move || dnd.is_hovered(&status);
    let open_composer = move |_| store_open_composer(&store, status);

    view! {
        <section class="board-column" data-status=status.as_str()>
            <div class="column-header">
                <div class="column-title">
                    <span>{column.title}</span>
                    <span class="column-count">{move || tasks.with(Vec::len)}</span>
                </div>
                <button class="column-add-btn" title="添加任务" on:click=open_composer>
                    "+"
                </button>
            </div>

            <div
                class=move || if is_drop_target() { "column-body drop-active" } else { "column-body" }
                on:mouseenter=make_on_target_mouseenter(dnd, status)
                on:mouseleave=make_on_mouseleave(dnd)
            >
                <For
                    each=move || tasks.get()
                    key=|task| task.id.clone()
                    children=move |task: Task| view! { <TaskCard task=task /> }
                />

                <Show when=move || tasks.with(Vec::is_empty)>
                    <button class="column-empty-add" on:click=open_composer>
                        "+ 添加任务"
                    </button>
                </Show>
            </div>
        </section>
    }
}
