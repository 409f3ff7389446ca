//! Ordered Store Module
//!
//! The ordered collection split into specialized sub-modules:
//! - ordered_store: open, create, update, delete, reorder, queries
//! - ordered_positioning: display sort rule, list moves, renumbering
//! - ordered_pinning: pin toggling for pinnable entities
//! - ordered_migration: one-time fix-up of records saved without an order

mod ordered_store;
mod ordered_positioning;
mod ordered_pinning;
mod ordered_migration;

pub use ordered_store::OrderedStore;

pub use ordered_positioning::{compare_for_display, move_item, renumber, sort_for_display};
pub use ordered_pinning::PinOperations;
pub use ordered_migration::normalize_legacy_order;
