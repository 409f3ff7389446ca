//! CreatorGrid Frontend App
//!
//! Main application component: navigation bar over the active page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BrainDump, NavBar, ProjectBoard, Welcome};
use crate::context::AppContext;
use crate::models::Page;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::load());
    let (current_page, set_current_page) = signal(Page::Home);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((current_page, set_current_page)));

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match current_page.get() {
                    Page::Home => view! { <Welcome /> }.into_any(),
                    Page::BrainDump => view! { <BrainDump /> }.into_any(),
                    Page::Projects => view! { <ProjectBoard /> }.into_any(),
                }}
            </main>
        </div>
    }
}
