//! Navigation Bar Component
//!
//! Tab bar for switching between pages.

use leptos::prelude::*;

use crate::components::LogPanel;
use crate::context::AppContext;
use crate::models::Page;

/// Navigation bar component
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"CreatorGrid"</span>
            {Page::ALL.iter().map(|page| {
                let page = *page;
                let is_active = move || ctx.current_page.get() == page;
                let tab_class = move || {
                    if is_active() { "nav-tab active" } else { "nav-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| ctx.navigate(page)
                    >
                        {page.label()}
                    </button>
                }
            }).collect_view()}
            <span class="nav-spacer"></span>
            <LogPanel />
        </nav>
    }
}
