//! Note Row Component
//!
//! Individual note with pin, inline edit and delete.

use leptos::prelude::*;

use chrono::Utc;

use crate::components::DeleteConfirmButton;
use crate::models::{relative_time, Note};
use crate::store::{store_delete_note, store_toggle_pin, store_update_note, use_app_store, AppStateStoreFields};

/// A single note row
#[component]
pub fn NoteRow(
    note: Note,
    drag_enabled: Signal<bool>,
) -> impl IntoView {
    let store = use_app_store();
    
    let id = StoredValue::new(note.id.clone());
    let pinned = note.pinned;
    let text = note.text.clone();
    let age = relative_time(note.created_at, Utc::now());
    let edited = note.updated_at.is_some();
    
    let (editing, set_editing) = signal(false);
    let (edit_text, set_edit_text) = signal(note.text.clone());
    
    let save_edit = move || {
        let text = edit_text.get_untracked();
        if text.trim().is_empty() { return; }
        id.with_value(|id| store_update_note(&store, id, text));
        set_editing.set(false);
    };
    let cancel_edit = move || {
        let current = id.with_value(|id| {
            store.notes().read_untracked().get(id).map(|n| n.text.clone()).unwrap_or_default()
        });
        set_edit_text.set(current);
        set_editing.set(false);
    };

    view! {
        <div class=move || if pinned { "note-row pinned" } else { "note-row" }>
            <Show when=move || drag_enabled.get()>
                <span class="drag-handle" title="Drag to reorder">"⋮⋮"</span>
            </Show>
            
            {move || if editing.get() {
                view! {
                    <div class="note-edit">
                        <textarea
                            prop:value=move || edit_text.get()
                            on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
                                    ev.prevent_default();
                                    save_edit();
                                } else if ev.key() == "Escape" {
                                    cancel_edit();
                                }
                            }
                        />
                        <button class="confirm-btn" on:click=move |_| save_edit()>"Save"</button>
                        <button class="cancel-btn" on:click=move |_| cancel_edit()>"Cancel"</button>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="note-body">
                        <p class="note-text">{text.clone()}</p>
                        <span class="note-meta">
                            {age.clone()}
                            {if edited { " · edited" } else { "" }}
                        </span>
                    </div>
                }.into_any()
            }}
            
            <button
                class={if pinned { "pin-btn active" } else { "pin-btn" }}
                title={if pinned { "Unpin" } else { "Pin" }}
                on:click=move |_| {
                    id.with_value(|id| store_toggle_pin(&store, id));
                }
            >
                "📌"
            </button>
            <button class="edit-btn" title="Edit" on:click=move |_| set_editing.set(true)>"✎"</button>
            <DeleteConfirmButton
                noun="note"
                on_confirm=move |_| {
                    id.with_value(|id| store_delete_note(&store, id));
                }
            />
        </div>
    }
}

