//! Ordered Pinning Operations
//!
//! Pin toggling for collections whose entities can be pinned.

use super::ordered_positioning::sort_for_display;
use super::ordered_store::OrderedStore;
use crate::domain::{Entity, OrderedEntity, Pinnable};
use crate::repository::traits::KeyValueStore;

/// Trait for pin operations
pub trait PinOperations {
    /// Flip the pin of `id`, re-sort and persist. Missing ids are a no-op.
    fn toggle_pin(&mut self, id: &str) -> bool;

    /// Number of pinned records
    fn pinned_count(&self) -> usize;
}

impl<T: Pinnable, S: KeyValueStore> PinOperations for OrderedStore<T, S> {
    fn toggle_pin(&mut self, id: &str) -> bool {
        let now = (self.clock)();
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        let pinned = !item.is_pinned();
        item.set_pinned(pinned);
        item.touch(now);

        sort_for_display(&mut self.items);
        log::debug!("[{}] {} {}", self.key, if pinned { "Pinned" } else { "Unpinned" }, id);
        self.persist();
        true
    }

    fn pinned_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_pinned()).count()
    }
}
