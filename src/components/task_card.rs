//! Task Card Component
//!
//! One draggable card: priority, title, description, tags, assignees, due date.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::make_on_mousedown;

use board_core::{Priority, Task};
use crate::clipboard;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_delete_task, use_app_store};

#[component]
fn PriorityBadge(priority: Priority) -> impl IntoView {
    let class = match priority {
        Priority::High => "priority-badge high",
        Priority::Medium => "priority-badge medium",
        Priority::Low => "priority-badge low",
    };
    view! { <span class=class>{priority.label()}</span> }
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let id = task.id.clone();
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let is_dragging = {
        let id = id.clone();
        move || dnd.is_dragging(&id)
    };
    let id_text = clipboard::task_id_text(&id);
    let on_copy = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let text = id_text.clone();
        spawn_local(async move {
            match clipboard::copy_text(&text).await {
                Ok(()) => web_sys::console::log_1(&format!("[BOARD] Copied {}", text).into()),
                Err(e) => web_sys::console::error_1(&format!("[BOARD] {}", e).into()),
            }
        });
    };
    let on_delete = Callback::new(move |_| store_delete_task(&store, &id));

    let description = task.description.clone().map(|text| view! { <p class="task-description">{text}</p> });
    let due = task.due_label().map(|label| view! { <span class="task-due">"📅 " {label}</span> });

    view! {
        <div
            class=move || if is_dragging() { "task-card dragging" } else { "task-card" }
            on:mousedown=on_mousedown
        >
            <div class="task-card-header">
                <PriorityBadge priority=task.priority />
                <button class="task-copy-btn" title="复制ID" on:click=on_copy>"⧉"</button>
                <DeleteConfirmButton button_class="task-delete-btn" on_confirm=on_delete />
            </div>

            <h3 class="task-title">{task.title.clone()}</h3>
            {description}

            <div class="task-tags">
                {task.tags.iter().map(|tag| view! { <span class="task-tag">"#" {tag.clone()}</span> }).collect_view()}
            </div>

            <div class="task-card-footer">
                <div class="avatar-stack">
                    {task.assignees.iter().map(|user| view! {
                        <img class="avatar" src=user.avatar_url.clone() alt=user.name.clone() title=user.name.clone() />
                    }).collect_view()}
                </div>
                {due}
            </div>
        </div>
    }
}
