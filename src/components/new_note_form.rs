//! New Note Form Component
//!
//! Textarea for capturing a note. Ctrl+Enter submits.

use leptos::prelude::*;

use crate::store::{store_create_note, use_app_store};

/// Form for creating new notes
#[component]
pub fn NewNoteForm() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let is_blank = move || new_text.get().trim().is_empty();

    let add_note = move || {
        let text = new_text.get_untracked();
        if text.trim().is_empty() { return; }
        if let Some(note) = store_create_note(&store, text) {
            log::info!("Created note {}", note.id);
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            add_note();
        }>
            <textarea
                placeholder="What's on your mind?"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
                        ev.prevent_default();
                        add_note();
                    }
                }
            />
            <div class="new-item-row">
                <span class="hint">"Press Ctrl+Enter to add quickly"</span>
                <button type="submit" disabled=is_blank>"Add Note"</button>
            </div>
        </form>
    }
}
