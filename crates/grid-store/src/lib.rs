//! CreatorGrid Store
//!
//! Layered like the app it serves:
//! - domain: notes, projects and the traits that put them in order
//! - repository: key-value persistence and the ordered store itself

mod domain;
mod repository;

pub use domain::{
    Entity, Note, NotePatch, OrderedEntity, Pinnable, Project, ProjectDraft, ProjectPatch,
    ProjectStatus, ProjectType, StorageError, StorageResult,
};
pub use repository::{
    compare_for_display, move_item, normalize_legacy_order, read_json, remove_key, renumber,
    sort_for_display, write_json, KeyValueStore, MemoryStorage, OrderedStore, PinOperations,
};

/// Fixed storage keys, one record per collection
pub mod keys {
    pub const NOTES: &str = "cg:notes";
    pub const PROJECTS: &str = "cg:projects";
    pub const DISPLAY_NAME: &str = "cg:name";
}

/// Brain dump notes
pub type NoteStore<S> = OrderedStore<Note, S>;

/// Content projects
pub type ProjectStore<S> = OrderedStore<Project, S>;
