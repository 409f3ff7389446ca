//! Project Card Component
//!
//! One project: editable title, type, status, publish date and script.

use leptos::prelude::*;

use chrono::Utc;
use grid_store::ProjectPatch;

use crate::components::{DeleteConfirmButton, ScriptEditor, TypeSelector};
use crate::models::{format_date_input, parse_date_input, relative_time, status_class, Project, ProjectStatus};
use crate::store::{store_delete_project, store_update_project, use_app_store};

/// Script preview length in characters
const SCRIPT_PREVIEW_CHARS: usize = 80;

/// A single project card
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let store = use_app_store();
    
    let id = StoredValue::new(project.id.clone());
    let title = project.title.clone();
    let script_title = StoredValue::new(project.title.clone());
    let project_type = project.project_type;
    let status = project.status;
    let age = relative_time(project.created_at, Utc::now());
    let date_value = project.publish_date.map(format_date_input).unwrap_or_default();
    let script = StoredValue::new(project.script.clone());
    let script_preview: String = project.script.chars().take(SCRIPT_PREVIEW_CHARS).collect();
    let has_more_script = project.script.chars().count() > SCRIPT_PREVIEW_CHARS;
    
    let (editing_title, set_editing_title) = signal(false);
    let (title_text, set_title_text) = signal(project.title.clone());
    let (script_open, set_script_open) = signal(false);
    
    let update = move |patch: ProjectPatch| {
        id.with_value(|id| store_update_project(&store, id, patch));
    };
    
    let save_title = move || {
        let text = title_text.get_untracked();
        if text.trim().is_empty() { return; }
        update(ProjectPatch::default().title(text));
        set_editing_title.set(false);
    };

    view! {
        <div class="project-card">
            <div class="project-title-row">
                {move || if editing_title.get() {
                    view! {
                        <form class="title-edit" on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            save_title();
                        }>
                            <input
                                type="text"
                                prop:value=move || title_text.get()
                                on:input=move |ev| set_title_text.set(event_target_value(&ev))
                            />
                            <button type="submit" class="confirm-btn">"✓"</button>
                            <button type="button" class="cancel-btn" on:click=move |_| set_editing_title.set(false)>"✗"</button>
                        </form>
                    }.into_any()
                } else {
                    let title = title.clone();
                    view! {
                        <h3 class="project-title" on:dblclick=move |_| set_editing_title.set(true)>{title}</h3>
                        <button class="edit-btn" title="Rename" on:click=move |_| set_editing_title.set(true)>"✎"</button>
                    }.into_any()
                }}
                <DeleteConfirmButton
                    noun="project"
                    on_confirm=move |_| {
                        id.with_value(|id| store_delete_project(&store, id));
                    }
                />
            </div>
            
            <TypeSelector
                current_type=Signal::stored(project_type)
                on_change=move |t| update(ProjectPatch::default().project_type(t))
            />
            
            <label class="field">
                <span>"Status"</span>
                <select
                    class=status_class(status)
                    on:change=move |ev| {
                        if let Some(status) = ProjectStatus::parse(&event_target_value(&ev)) {
                            update(ProjectPatch::default().status(status));
                        }
                    }
                >
                    {ProjectStatus::ALL.iter().map(|s| view! {
                        <option value=s.as_str() selected={*s == status}>{s.as_str()}</option>
                    }).collect_view()}
                </select>
            </label>
            
            <label class="field">
                <span>"Publish date"</span>
                <input
                    type="date"
                    prop:value=date_value
                    on:change=move |ev| {
                        update(ProjectPatch::default().publish_date(parse_date_input(&event_target_value(&ev))));
                    }
                />
            </label>
            
            <div class="project-script">
                <button class="script-btn" on:click=move |_| set_script_open.set(true)>"📝 Script"</button>
                {(!script_preview.is_empty()).then(|| view! {
                    <p class="script-preview">
                        {script_preview.clone()}
                        {if has_more_script { "..." } else { "" }}
                    </p>
                })}
            </div>
            
            <p class="project-meta">{format!("✨ {}", age)}</p>
            
            <Show when=move || script_open.get()>
                <ScriptEditor
                    title=script_title.get_value()
                    initial=script.get_value()
                    on_save=move |text: String| {
                        update(ProjectPatch::default().script(text));
                        set_script_open.set(false);
                    }
                    on_cancel=move |_| set_script_open.set(false)
                />
            </Show>
        </div>
    }
}
