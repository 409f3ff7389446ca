//! Projects Page
//!
//! New project form over the reorderable project grid.

use leptos::prelude::*;

use crate::components::{NewProjectForm, ProjectList};
use crate::models::{count_label, status_class, status_counts};
use crate::store::{use_app_store, AppStateStoreFields};

/// Projects page component
#[component]
pub fn ProjectBoard() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="project-board">
            <header>
                <h1>"Projects"</h1>
                <p class="subtitle">"Track every piece of content from idea to published"</p>
            </header>

            <NewProjectForm />
            <ProjectList />

            <Show when=move || !store.projects().read().is_empty()>
                <div class="item-count stats-bar">
                    <span>
                        {move || count_label(store.projects().read().len(), "project", "projects")}
                    </span>
                    {move || {
                        status_counts(store.projects().read().items())
                            .into_iter()
                            .map(|(status, count)| view! {
                                <span class="status-count">
                                    <span class={format!("{} status-dot", status_class(status))}></span>
                                    {format!("{} {}", count, status.as_str().to_lowercase())}
                                </span>
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
