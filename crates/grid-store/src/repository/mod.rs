//! Repository Layer
//!
//! Key-value persistence and the ordered collection built on top of it.

mod traits;
mod storage;
mod memory;
mod ordered;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use storage::{read_json, remove_key, write_json};
pub use memory::MemoryStorage;
pub use ordered::{
    compare_for_display, move_item, normalize_legacy_order, renumber, sort_for_display,
    OrderedStore, PinOperations,
};
