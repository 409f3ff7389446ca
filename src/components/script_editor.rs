//! Script Editor Component
//!
//! Overlay for writing a project's script.

use leptos::prelude::*;

/// Script editor overlay
#[component]
pub fn ScriptEditor(
    #[prop(into)] title: String,
    initial: String,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (text, set_text) = signal(initial);

    view! {
        <div class="script-overlay" on:click=move |_| on_cancel.run(())>
            <div class="script-editor" on:click=|ev| ev.stop_propagation()>
                <h3>{format!("Script: {}", title)}</h3>
                <textarea
                    class="script-textarea"
                    placeholder="Write your script here..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            on_cancel.run(());
                        }
                    }
                />
                <div class="script-actions">
                    <button class="cancel-btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="confirm-btn" on:click=move |_| on_save.run(text.get_untracked())>"Save Script"</button>
                </div>
            </div>
        </div>
    }
}
