//! Welcome Page Component
//!
//! Greets the user by the stored display name and links to the tools.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{needs_name_prompt, Page};
use crate::store::{store_set_display_name, use_app_store, AppStateStoreFields};

/// Home page with name prompt
#[component]
pub fn Welcome() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (editing, set_editing) = signal(false);
    let (temp_name, set_temp_name) = signal(store.display_name().get_untracked());

    let save_name = move || {
        store_set_display_name(&store, &temp_name.get());
        set_temp_name.set(store.display_name().get_untracked());
        set_editing.set(false);
    };

    view! {
        <section class="welcome">
            <h1>"CreatorGrid"</h1>

            {move || if needs_name_prompt(editing.get(), &store.display_name().read()) {
                view! {
                    <form class="name-form" on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        save_name();
                    }>
                        <label>"What should we call you?"</label>
                        <input
                            type="text"
                            placeholder="Your name"
                            prop:value=move || temp_name.get()
                            on:input=move |ev| set_temp_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"Save"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <div class="greeting">
                        <h2>{move || format!("Welcome back, {}!", store.display_name().get())}</h2>
                        <p class="tagline">"What are you cooking?"</p>
                        <button class="ghost-btn" on:click=move |_| set_editing.set(true)>
                            "Change name"
                        </button>
                    </div>
                }.into_any()
            }}

            <div class="tool-links">
                <button class="tool-card" on:click=move |_| ctx.navigate(Page::BrainDump)>
                    <h3>"Brain Dump"</h3>
                    <p>"Capture thoughts quickly and sort them later"</p>
                </button>
                <button class="tool-card" on:click=move |_| ctx.navigate(Page::Projects)>
                    <h3>"Projects"</h3>
                    <p>"Track content from idea to published"</p>
                </button>
            </div>
        </section>
    }
}
