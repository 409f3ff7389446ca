//! Ordered Positioning Operations
//!
//! Sort rule and list moves shared by every ordered collection.

use std::cmp::Ordering;

use crate::domain::OrderedEntity;

/// Display order: pinned first, then ascending `order`.
///
/// When either side has no order value the newer `created_at` wins.
pub fn compare_for_display<T: OrderedEntity>(a: &T, b: &T) -> Ordering {
    b.is_pinned()
        .cmp(&a.is_pinned())
        .then_with(|| match (a.order(), b.order()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => b.created_at().cmp(&a.created_at()),
        })
}

/// Stable sort into display order
pub fn sort_for_display<T: OrderedEntity>(items: &mut [T]) {
    items.sort_by(compare_for_display);
}

/// Move the element at `from` so it ends up at `to`; the ones in between shift by one.
///
/// Both indices must be in bounds.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

/// Set every order value to its index (0, 1, 2, ...)
pub fn renumber<T: OrderedEntity>(items: &mut [T]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_order(index as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use chrono::{Duration, TimeZone, Utc};

    fn note(id: &str, order: Option<i64>, pinned: bool, age_minutes: i64) -> Note {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Note {
            id: id.to_string(),
            text: id.to_string(),
            created_at: base - Duration::minutes(age_minutes),
            updated_at: None,
            pinned,
            order,
        }
    }

    fn ids(items: &[Note]) -> Vec<&str> {
        items.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_pinned_before_lower_order() {
        let mut items = vec![note("a", Some(0), false, 0), note("b", Some(5), true, 0)];
        sort_for_display(&mut items);
        assert_eq!(ids(&items), vec!["b", "a"]);
    }

    #[test]
    fn test_ascending_order_within_group() {
        let mut items = vec![
            note("c", Some(2), false, 0),
            note("a", Some(0), false, 0),
            note("b", Some(1), false, 0),
        ];
        sort_for_display(&mut items);
        assert_eq!(ids(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_order_falls_back_to_newest_first() {
        let mut items = vec![note("old", None, false, 30), note("new", None, false, 1)];
        sort_for_display(&mut items);
        assert_eq!(ids(&items), vec!["new", "old"]);
    }

    #[test]
    fn test_sort_is_stable_on_gaps_and_ties() {
        let mut items = vec![
            note("x", Some(3), false, 0),
            note("y", Some(3), false, 0),
            note("z", Some(9), false, 0),
        ];
        sort_for_display(&mut items);
        assert_eq!(ids(&items), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_move_forward_and_back() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        move_item(&mut v, 0, 2);
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
        move_item(&mut v, 3, 0);
        assert_eq!(v, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_renumber_is_dense() {
        let mut items = vec![note("a", Some(7), false, 0), note("b", None, true, 0)];
        renumber(&mut items);
        assert_eq!(items[0].order, Some(0));
        assert_eq!(items[1].order, Some(1));
    }
}
