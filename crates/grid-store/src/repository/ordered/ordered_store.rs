//! Ordered Store
//!
//! Owns one collection, keeps it in display order and writes the whole
//! sequence back to its key after every mutation.

use chrono::{DateTime, Utc};

use super::ordered_migration::normalize_legacy_order;
use super::ordered_positioning::{move_item, renumber, sort_for_display};
use crate::domain::{Entity, OrderedEntity};
use crate::repository::storage::{read_json, write_json};
use crate::repository::traits::KeyValueStore;

/// An ordered, persisted collection of `T`
///
/// Mutations never fail: missing ids and blank content are no-ops, and
/// storage errors are logged while the in-memory collection stays
/// authoritative. Each mutating call returns whether it changed anything.
#[derive(Debug, Clone)]
pub struct OrderedStore<T, S> {
    pub(super) key: String,
    pub(super) items: Vec<T>,
    pub(super) storage: S,
    pub(super) clock: fn() -> DateTime<Utc>,
    pub(super) next_id: fn() -> String,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl<T: OrderedEntity, S: KeyValueStore> OrderedStore<T, S> {
    /// Load the collection stored under `key`
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        Self::open_with(storage, key, Utc::now, new_id)
    }

    /// Load with explicit clock and id source
    pub fn open_with(
        storage: S,
        key: impl Into<String>,
        clock: fn() -> DateTime<Utc>,
        next_id: fn() -> String,
    ) -> Self {
        let key = key.into();
        let mut items: Vec<T> = read_json(&storage, &key, Vec::new());

        let migrated = normalize_legacy_order(&mut items, clock());
        sort_for_display(&mut items);

        let store = Self {
            key,
            items,
            storage,
            clock,
            next_id,
        };

        if migrated > 0 {
            log::info!("[{}] Assigned order to {} legacy records", store.key, migrated);
            store.persist();
        }
        log::debug!("[{}] Loaded {} records", store.key, store.items.len());
        store
    }

    /// Storage key this collection persists under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Records in display order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Display index of `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Case-insensitive substring match on content, in display order.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let query = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| query.is_empty() || item.content().to_lowercase().contains(&query))
            .collect()
    }

    /// Create a record at the top of its group.
    ///
    /// The draft must have non-blank content; otherwise nothing is created
    /// and `None` is returned.
    pub fn create(&mut self, draft: T::Draft) -> Option<T> {
        let now = (self.clock)();
        let Some(item) = T::from_draft(draft, (self.next_id)(), now) else {
            log::debug!("[{}] Skipped create with blank content", self.key);
            return None;
        };

        for existing in self.items.iter_mut() {
            if let Some(order) = existing.order() {
                existing.set_order(order + 1);
            }
        }
        self.items.insert(0, item.clone());
        sort_for_display(&mut self.items);

        log::debug!("[{}] Created {}", self.key, item.id());
        self.persist();
        Some(item)
    }

    /// Merge `patch` into the record with `id` and stamp `updated_at`
    pub fn update(&mut self, id: &str, patch: T::Patch) -> bool {
        let now = (self.clock)();
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        if !item.apply(patch) {
            log::debug!("[{}] Skipped update of {} with blank content", self.key, id);
            return false;
        }
        item.touch(now);

        sort_for_display(&mut self.items);
        self.persist();
        true
    }

    /// Remove the record with `id`. Remaining order values keep their gaps.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == before {
            return false;
        }

        log::debug!("[{}] Deleted {}", self.key, id);
        self.persist();
        true
    }

    /// Move the record displayed at `from` to display index `to` and
    /// renumber the whole collection 0..n-1.
    ///
    /// Only the moved record gets a new `updated_at`. The moved sequence is
    /// kept as is, without re-sorting.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let len = self.items.len();
        if from >= len || to >= len {
            log::warn!(
                "[{}] Ignored reorder {} -> {} on {} records",
                self.key,
                from,
                to,
                len
            );
            return false;
        }

        move_item(&mut self.items, from, to);
        renumber(&mut self.items);
        self.items[to].touch((self.clock)());

        log::debug!("[{}] Moved {} -> {}", self.key, from, to);
        self.persist();
        true
    }

    /// Write the full sequence to storage. Failures are logged by the helper.
    pub(super) fn persist(&self) -> bool {
        write_json(&self.storage, &self.key, &self.items)
    }
}
