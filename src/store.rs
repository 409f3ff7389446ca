//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Notes and
//! projects live in their ordered stores; every helper below runs one store
//! operation, which persists to local storage before returning.

use leptos::prelude::*;
use reactive_stores::Store;

use grid_store::{
    keys, read_json, write_json, NotePatch, NoteStore, PinOperations, ProjectDraft, ProjectPatch,
    ProjectStore,
};
use crate::local_storage::LocalStorage;
use crate::models::{Note, Project};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Brain dump notes, in display order
    pub notes: NoteStore<LocalStorage>,
    /// Content projects, in display order
    pub projects: ProjectStore<LocalStorage>,
    /// Name shown on the welcome page
    pub display_name: String,
}

impl AppState {
    /// Load everything from local storage
    pub fn load() -> Self {
        let notes = NoteStore::open(LocalStorage, keys::NOTES);
        let projects = ProjectStore::open(LocalStorage, keys::PROJECTS);
        let display_name = read_json(&LocalStorage, keys::DISPLAY_NAME, String::new());
        log::info!("Loaded {} notes, {} projects", notes.len(), projects.len());
        Self {
            notes,
            projects,
            display_name,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a note; blank text creates nothing
pub fn store_create_note(store: &AppStore, text: String) -> Option<Note> {
    store.notes().write().create(text)
}

/// Replace a note's text
pub fn store_update_note(store: &AppStore, id: &str, text: String) -> bool {
    store.notes().write().update(id, NotePatch::text(text))
}

/// Remove a note by ID
pub fn store_delete_note(store: &AppStore, id: &str) -> bool {
    store.notes().write().delete(id)
}

/// Pin or unpin a note by ID
pub fn store_toggle_pin(store: &AppStore, id: &str) -> bool {
    store.notes().write().toggle_pin(id)
}

/// Move a note between display positions
pub fn store_reorder_notes(store: &AppStore, from: usize, to: usize) -> bool {
    store.notes().write().reorder(from, to)
}

/// Add a project; blank title creates nothing
pub fn store_create_project(store: &AppStore, draft: ProjectDraft) -> Option<Project> {
    store.projects().write().create(draft)
}

/// Merge fields into a project
pub fn store_update_project(store: &AppStore, id: &str, patch: ProjectPatch) -> bool {
    store.projects().write().update(id, patch)
}

/// Remove a project by ID
pub fn store_delete_project(store: &AppStore, id: &str) -> bool {
    store.projects().write().delete(id)
}

/// Move a project between display positions
pub fn store_reorder_projects(store: &AppStore, from: usize, to: usize) -> bool {
    store.projects().write().reorder(from, to)
}

/// Save the welcome name (trimmed)
pub fn store_set_display_name(store: &AppStore, name: &str) {
    let name = name.trim().to_string();
    write_json(&LocalStorage, keys::DISPLAY_NAME, &name);
    *store.display_name().write() = name;
}
