//! Brain Dump Page
//!
//! Note capture, search and the reorderable note list.

use leptos::prelude::*;

use grid_store::PinOperations;
use crate::components::{NewNoteForm, NoteList};
use crate::models::count_label;
use crate::store::{use_app_store, AppStateStoreFields};

/// Brain dump page component
#[component]
pub fn BrainDump() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());

    let note_count = move || store.notes().read().len();
    let pinned_count = move || store.notes().read().pinned_count();

    view! {
        <section class="brain-dump">
            <header>
                <h1>"Brain Dump"</h1>
                <p class="subtitle">"Capture your thoughts quickly and organize them later"</p>
            </header>

            <NewNoteForm />

            <Show when=move || { note_count() > 0 }>
                <div class="search-row">
                    <input
                        type="search"
                        placeholder="Search notes..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <Show when=move || !query.get().trim().is_empty()>
                        <span class="search-hint">"Reordering is off while searching"</span>
                    </Show>
                </div>
            </Show>

            <NoteList query=query />

            <Show when=move || { note_count() > 0 }>
                <p class="item-count">
                    {move || {
                        let pinned = pinned_count();
                        let mut line = format!("{} total", count_label(note_count(), "note", "notes"));
                        if pinned > 0 {
                            line.push_str(&format!(" • {} pinned", pinned));
                        }
                        line
                    }}
                </p>
            </Show>
        </section>
    }
}
