//! Add Task Modal Component
//!
//! Form for creating a task in the column the modal was opened from.

use leptos::prelude::*;

use board_core::{BoardError, Priority, TaskDraft};
use crate::store::{store_cancel_composer, store_submit_composer, use_app_store, AppStateStoreFields};

#[component]
pub fn AddTaskModal() -> impl IntoView {
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::Medium);

    let is_open = move || store.composer().read().is_open();
    let column_title = move || store.composer().read().target_title();

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_priority.set(Priority::Medium);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft::new(title.get_untracked(), description.get_untracked(), priority.get_untracked());
        match store_submit_composer(&store, draft) {
            Ok(task) => {
                web_sys::console::log_1(&format!("[BOARD] Created task {} in {}", task.id, task.status).into());
                reset();
            }
            // Blank title: keep the modal open and let the user keep typing
            Err(BoardError::EmptyTitle) => {}
            Err(e) => web_sys::console::error_1(&format!("[BOARD] Failed to create task: {}", e).into()),
        }
    };

    let on_close = move |_| store_cancel_composer(&store);

    view! {
        <Show when=is_open>
            <div class="modal-root">
                <div class="modal-backdrop" on:click=on_close></div>

                <div class="modal">
                    <div class="modal-header">
                        <h3>"添加任务到 " <span class="modal-column">{column_title}</span></h3>
                        <button class="modal-close" on:click=on_close>"✕"</button>
                    </div>

                    <form class="modal-form" on:submit=on_submit>
                        <label>
                            "任务标题"
                            <input
                                type="text"
                                placeholder="例如：更新着陆页设计"
                                autofocus=true
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                        </label>

                        <div class="priority-selector">
                            <span>"优先级"</span>
                            {Priority::CHOICES.iter().map(|&choice| view! {
                                <button
                                    type="button"
                                    class=move || if priority.get() == choice { "priority-btn active" } else { "priority-btn" }
                                    on:click=move |_| set_priority.set(choice)
                                >
                                    {choice.as_str()}
                                </button>
                            }).collect_view()}
                        </div>

                        <label>
                            "描述"
                            <textarea
                                rows=3
                                placeholder="添加详细描述..."
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=on_close>"取消"</button>
                            <button type="submit" class="submit-btn" disabled=move || title.with(|t| t.trim().is_empty())>
                                "✓ 创建任务"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
