//! Leptos DragDrop Utilities
//! 
//! Simple drag-and-drop reordering of flat lists using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Rows are addressed by their display index. Drop slots sit between rows:
//! slot `k` is the gap just before row `k`, slot `n` the gap after the last.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Row index being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Slot under the pointer
    pub drop_slot_read: ReadSignal<Option<usize>>,
    pub drop_slot_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether a pointer offset is far enough to turn a press into a drag
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// Final index of a row dragged from `from` and dropped on `slot`.
///
/// `None` when the drop would leave the row where it is (the slots
/// directly above and below it).
pub fn slot_to_index(from: usize, slot: usize) -> Option<usize> {
    if slot == from || slot == from + 1 {
        None
    } else if slot > from {
        Some(slot - 1)
    } else {
        Some(slot)
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_slot_read, drop_slot_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_slot_read,
        drop_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.try_set(None);
    dnd.drop_slot_write.try_set(None);
    dnd.pending_write.try_set(None);
    dnd.drag_just_ended_write.try_set(true);
    
    // Swallow the click that follows mouseup
    let clear = dnd.drag_just_ended_write;
    set_timeout(move || { clear.try_set(false); }, Duration::from_millis(100));
}

/// Removal callbacks for document-level listeners.
///
/// Lists remount on every page switch, so listeners bound by a list must
/// go away with it.
#[derive(Default)]
pub struct ListenerSet {
    removers: Vec<Box<dyn FnOnce() + Send + Sync>>,
}

impl ListenerSet {
    pub fn add(&mut self, remove: impl FnOnce() + Send + Sync + 'static) {
        self.removers.push(Box::new(remove));
    }

    pub fn len(&self) -> usize {
        self.removers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removers.is_empty()
    }

    pub fn remove_all(self) {
        for remove in self.removers {
            remove();
        }
    }

    /// Remove every listener when the current reactive owner is disposed
    pub fn remove_on_cleanup(self) {
        on_cleanup(move || self.remove_all());
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize, enabled: Signal<bool>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || !enabled.get_untracked() {
            return;
        }
        // Ignore presses on form controls
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(index));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind mousemove on the window - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) -> WindowListenerHandle {
    window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_read.try_get_untracked().flatten() else { return };
        if dnd.dragging_read.try_get_untracked().flatten().is_some() {
            return;
        }
        let dx = ev.client_x() - dnd.start_x_read.get_untracked();
        let dy = ev.client_y() - dnd.start_y_read.get_untracked();
        if exceeds_threshold(dx, dy) {
            dnd.dragging_write.set(Some(pending));
        }
    })
}

/// Create mouseenter handler for drop slots
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(Some(slot));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(None);
        }
    }
}

/// Bind global mouseup (and mousemove) handlers for drop detection.
///
/// `on_drop(from, to)` receives display indices ready for a list move and
/// is not called for drops that would not move anything. Both listeners
/// are removed when the calling component is disposed.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, usize) + 'static,
{
    let mut listeners = ListenerSet::default();

    let on_mouseup = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.try_get_untracked().flatten();
        let slot = dnd.drop_slot_read.try_get_untracked().flatten();
        
        dnd.pending_write.try_set(None);
        end_drag(&dnd);
        
        // A press without movement falls through to the click handler
        if let (Some(from), Some(slot)) = (dragging, slot) {
            if let Some(to) = slot_to_index(from, slot) {
                on_drop(from, to);
            }
        }
    });
    listeners.add(move || on_mouseup.remove());

    let on_mousemove = bind_global_mousemove(dnd);
    listeners.add(move || on_mousemove.remove());

    listeners.remove_on_cleanup();
}

/// Drop slot - a horizontal separator between rows
#[component]
pub fn DropSlot(
    dnd: DndSignals,
    slot: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);
    
    let is_active = move || dnd.drop_slot_read.get() == Some(slot);
    let is_dragging = move || dnd.dragging_read.get().is_some();
    
    let slot_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };
    
    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_next_to_row_do_not_move() {
        assert_eq!(slot_to_index(2, 2), None);
        assert_eq!(slot_to_index(2, 3), None);
    }

    #[test]
    fn test_drop_below_shifts_by_one() {
        // [C, B, A]: drag C (0) to the gap after A (slot 3)
        assert_eq!(slot_to_index(0, 3), Some(2));
        assert_eq!(slot_to_index(1, 3), Some(2));
    }

    #[test]
    fn test_drop_above_keeps_slot() {
        assert_eq!(slot_to_index(2, 0), Some(0));
        assert_eq!(slot_to_index(3, 1), Some(1));
    }

    #[test]
    fn test_listeners_removed_with_owner() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let removed = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let mut listeners = ListenerSet::default();
            for _ in 0..2 {
                let removed = Arc::clone(&removed);
                listeners.add(move || {
                    removed.fetch_add(1, Ordering::SeqCst);
                });
            }
            assert_eq!(listeners.len(), 2);
            listeners.remove_on_cleanup();
        });

        // Still mounted
        assert_eq!(removed.load(Ordering::SeqCst), 0);
        owner.cleanup();
        assert_eq!(removed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold(5, -5));
        assert!(exceeds_threshold(-6, 0));
        assert!(exceeds_threshold(0, 6));
    }
}
