//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! No storage code lives here; only serde and chrono are used.

mod entity;
mod error;
mod note;
mod project;

pub use entity::{Entity, OrderedEntity, Pinnable};
pub use error::{StorageError, StorageResult};
pub use note::{Note, NotePatch};
pub use project::{Project, ProjectDraft, ProjectPatch, ProjectStatus, ProjectType};
