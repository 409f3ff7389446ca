//! Domain Layer - Core Entity Traits
//!
//! Every record in a collection has a unique id. Records that live in an
//! ordered collection also carry an order value, timestamps and know how
//! to build themselves from user input.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// An entity kept in a user-ordered, persisted collection
pub trait OrderedEntity: Entity + Serialize + DeserializeOwned {
    /// User input needed to create a new entity
    type Draft;
    /// Partial update merged into an existing entity
    type Patch;

    /// Build a fresh entity, `None` when the draft has no content after trimming.
    ///
    /// The returned entity has `order = Some(0)`.
    fn from_draft(draft: Self::Draft, id: String, now: DateTime<Utc>) -> Option<Self>;

    /// Merge a patch. Returns `false` and leaves the entity untouched when
    /// the patch would blank its content.
    fn apply(&mut self, patch: Self::Patch) -> bool;

    /// Display rank; `None` only for records written before ordering existed
    fn order(&self) -> Option<i64>;

    fn set_order(&mut self, order: i64);

    fn created_at(&self) -> DateTime<Utc>;

    /// Stamp `updated_at`
    fn touch(&mut self, now: DateTime<Utc>);

    /// Text matched by search
    fn content(&self) -> &str;

    /// Pinned entities sort ahead of everything else
    fn is_pinned(&self) -> bool {
        false
    }
}

/// Entities that can be pinned to the top of their collection
pub trait Pinnable: OrderedEntity {
    fn set_pinned(&mut self, pinned: bool);
}
