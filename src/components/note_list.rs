//! Note List Component
//!
//! Displays notes in display order with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit DropSlots between rows.

use leptos::prelude::*;

use crate::components::NoteRow;
use crate::store::{store_reorder_notes, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Note list with DnD support. Dragging is disabled while `query` filters the list.
#[component]
pub fn NoteList(
    #[prop(into)] query: Signal<String>,
) -> impl IntoView {
    let store = use_app_store();
    
    // Create DnD signals
    let dnd = create_dnd_signals();
    let drag_enabled = Signal::derive(move || query.get().trim().is_empty());
    
    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |from, to| {
        log::debug!("Move note: from={}, to={}", from, to);
        store_reorder_notes(&store, from, to);
    });
    
    let visible_notes = move || {
        let q = query.get();
        store.notes().read().search(&q).into_iter().cloned().enumerate().collect::<Vec<_>>()
    };
    let total = move || store.notes().read().len();

    view! {
        <div class="note-list">
            <Show when=move || { total() == 0 }>
                <p class="empty-state">"No notes yet. Start capturing your ideas above!"</p>
            </Show>
            <Show when=move || { total() > 0 && visible_notes().is_empty() }>
                <p class="empty-state">{move || format!("No notes found matching \"{}\"", query.get())}</p>
            </Show>

            // Initial drop slot at top
            <DropSlot dnd=dnd slot=0 />
            
            <For
                each=visible_notes
                key=|(index, note)| {
                    // Every displayed field, so edits re-render the row
                    (
                        *index,
                        note.id.clone(),
                        note.text.clone(),
                        note.pinned,
                        note.order,
                        note.updated_at,
                    )
                }
                children=move |(index, note)| {
                    let on_mousedown = make_on_mousedown(dnd, index, drag_enabled);
                    let is_dragging = move || dnd.dragging_read.get() == Some(index);
                    let row_class = move || {
                        let mut c = String::from("note-wrapper");
                        if drag_enabled.get() { c.push_str(" draggable"); }
                        if is_dragging() { c.push_str(" dragging"); }
                        c
                    };
                    
                    view! {
                        <div class=row_class on:mousedown=on_mousedown>
                            <NoteRow note=note drag_enabled=drag_enabled />
                        </div>
                        
                        // Drop slot after this row
                        <DropSlot dnd=dnd slot=index + 1 />
                    }
                }
            />
        </div>
    }
}
