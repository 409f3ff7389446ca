//! Type Selector Component
//!
//! Project type selector buttons.

use leptos::prelude::*;

use crate::models::ProjectType;

/// Type selector buttons for projects
#[component]
pub fn TypeSelector(
    #[prop(into)] current_type: Signal<ProjectType>,
    on_change: impl Fn(ProjectType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {ProjectType::ALL.iter().map(|project_type| {
                let project_type = *project_type;
                let is_selected = move || current_type.get() == project_type;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(project_type)
                    >
                        {project_type.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
