//! Legacy Order Migration
//!
//! Early versions saved records without an order value. On load they are
//! given `now_ms + index`, which keeps them after every ordered record and
//! in their saved sequence.

use chrono::{DateTime, Utc};

use crate::domain::OrderedEntity;

/// Assign an order to every record lacking one. Returns how many changed.
pub fn normalize_legacy_order<T: OrderedEntity>(items: &mut [T], now: DateTime<Utc>) -> usize {
    let base = now.timestamp_millis();
    let mut migrated = 0;

    for (index, item) in items.iter_mut().enumerate() {
        if item.order().is_none() {
            item.set_order(base + index as i64);
            migrated += 1;
        }
    }

    migrated
}
