//! Sidebar Component
//!
//! Project list; clicking a project makes it the active board.

use leptos::prelude::*;

use board_core::Project;
use crate::store::{store_select_project, use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();

    let projects = move || store.board().read().projects().to_vec();

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Kanban"</div>
            <div class="sidebar-section-title">"项目"</div>
            <nav class="project-list">
                <For
                    each=projects
                    key=|project| project.id.clone()
                    children=move |project: Project| {
                        let id = project.id.clone();
                        let is_active = {
                            let id = id.clone();
                            move || store.board().read().active_project_id() == &id
                        };
                        view! {
                            <button
                                class=move || if is_active() { "project-item active" } else { "project-item" }
                                title=project.description.clone()
                                on:click=move |_| store_select_project(&store, id.clone())
                            >
                                <span class="project-icon">{project.icon.clone()}</span>
                                <span class="project-name">{project.name.clone()}</span>
                            </button>
                        }
                    }
                />
            </nav>
        </aside>
    }
}
