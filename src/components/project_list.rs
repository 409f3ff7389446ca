//! Project List Component
//!
//! Project cards in display order with drag-and-drop reordering.

use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::store::{store_reorder_projects, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Project list with DnD support
#[component]
pub fn ProjectList() -> impl IntoView {
    let store = use_app_store();
    
    let dnd = create_dnd_signals();
    let drag_enabled = Signal::derive(|| true);
    
    bind_global_mouseup(dnd, move |from, to| {
        log::debug!("Move project: from={}, to={}", from, to);
        store_reorder_projects(&store, from, to);
    });
    
    let projects = move || {
        store.projects().read().items().iter().cloned().enumerate().collect::<Vec<_>>()
    };

    view! {
        <div class="project-list">
            <Show when=move || store.projects().read().is_empty()>
                <div class="empty-state">
                    <h3>"No projects yet"</h3>
                    <p>"Create your first content project and start organizing your creative workflow!"</p>
                </div>
            </Show>

            <DropSlot dnd=dnd slot=0 />
            
            <For
                each=projects
                key=|(index, project)| {
                    (
                        *index,
                        project.id.clone(),
                        project.title.clone(),
                        project.project_type,
                        project.status,
                        project.publish_date,
                        project.script.clone(),
                        project.order,
                        project.updated_at,
                    )
                }
                children=move |(index, project)| {
                    let on_mousedown = make_on_mousedown(dnd, index, drag_enabled);
                    let is_dragging = move || dnd.dragging_read.get() == Some(index);
                    
                    view! {
                        <div
                            class=move || if is_dragging() { "project-wrapper dragging" } else { "project-wrapper" }
                            on:mousedown=on_mousedown
                        >
                            <ProjectCard project=project />
                        </div>
                        <DropSlot dnd=dnd slot=index + 1 />
                    }
                }
            />
        </div>
    }
}
