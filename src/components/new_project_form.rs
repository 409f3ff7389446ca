//! New Project Form Component
//!
//! Form for creating new projects with type selector.

use leptos::prelude::*;

use grid_store::ProjectDraft;
use crate::components::TypeSelector;
use crate::models::ProjectType;
use crate::store::{store_create_project, use_app_store};

/// Form for creating new projects
#[component]
pub fn NewProjectForm() -> impl IntoView {
    let store = use_app_store();
    
    let (new_title, set_new_title) = signal(String::new());
    let (project_type, set_project_type) = signal(ProjectType::default());

    let create_project = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() { return; }
        
        let draft = ProjectDraft::new(title, project_type.get());
        if let Some(project) = store_create_project(&store, draft) {
            log::info!("Created project {}", project.id);
            set_new_title.set(String::new());
            set_project_type.set(ProjectType::default());
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_project>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Project title..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || new_title.get().trim().is_empty()>"Add Project"</button>
            </div>
            
            <TypeSelector
                current_type=project_type
                on_change=move |t| set_project_type.set(t)
            />
        </form>
    }
}
