//! Repository Integration Tests
//!
//! Tests for OrderedStore with in-memory storage.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::{
        Note, NotePatch, Project, ProjectDraft, ProjectPatch, ProjectStatus, ProjectType,
    };
    use crate::keys;
    use crate::repository::{read_json, KeyValueStore, MemoryStorage, OrderedStore, PinOperations};

    type Notes = OrderedStore<Note, Arc<MemoryStorage>>;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    fn setup_notes() -> (Arc<MemoryStorage>, Notes) {
        let storage = Arc::new(MemoryStorage::new());
        let notes = OrderedStore::open(storage.clone(), keys::NOTES);
        (storage, notes)
    }

    /// Notes A, B, C created in that order
    fn setup_abc() -> (Arc<MemoryStorage>, Notes) {
        let (storage, mut notes) = setup_notes();
        for text in ["A", "B", "C"] {
            notes.create(text.to_string()).expect("Failed to create");
        }
        (storage, notes)
    }

    fn texts(notes: &Notes) -> Vec<&str> {
        notes.items().iter().map(|n| n.text.as_str()).collect()
    }

    fn order_of(notes: &Notes, text: &str) -> i64 {
        notes
            .items()
            .iter()
            .find(|n| n.text == text)
            .and_then(|n| n.order)
            .expect("note with order")
    }

    fn persisted(storage: &MemoryStorage) -> Vec<Note> {
        read_json(storage, keys::NOTES, Vec::new())
    }

    #[test]
    fn test_create_puts_newest_first() {
        let (storage, notes) = setup_abc();

        assert_eq!(texts(&notes), vec!["C", "B", "A"]);
        assert_eq!(order_of(&notes, "C"), 0);
        assert_eq!(order_of(&notes, "B"), 1);
        assert_eq!(order_of(&notes, "A"), 2);
        assert_eq!(persisted(&storage), notes.items());
    }

    #[test]
    fn test_create_returns_trimmed_note() {
        let (_, mut notes) = setup_notes();
        let note = notes.create("  idea  ".to_string()).unwrap();
        assert_eq!(note.text, "idea");
        assert_eq!(notes.get(&note.id), Some(&note));
    }

    #[test]
    fn test_create_blank_is_noop() {
        let (storage, mut notes) = setup_abc();
        let before = persisted(&storage);

        assert!(notes.create("   ".to_string()).is_none());
        assert_eq!(notes.len(), 3);
        assert_eq!(persisted(&storage), before);
    }

    #[test]
    fn test_ids_are_unique() {
        let (_, mut notes) = setup_notes();
        for i in 0..50 {
            notes.create(format!("note {}", i));
        }
        let ids: BTreeSet<&str> = notes.items().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_newest_unpinned_first_even_with_pins() {
        let (_, mut notes) = setup_abc();
        let b = notes.items()[1].id.clone();
        notes.toggle_pin(&b);

        let newest = notes.create("D".to_string()).unwrap();
        let unpinned: Vec<&Note> = notes.items().iter().filter(|n| !n.pinned).collect();
        assert_eq!(unpinned[0].id, newest.id);
        let min = unpinned.iter().filter_map(|n| n.order).min();
        assert_eq!(min, Some(0));
        assert_eq!(texts(&notes), vec!["B", "D", "C", "A"]);
    }

    #[test]
    fn test_reorder_scenario() {
        let (storage, mut notes) = setup_abc();

        assert!(notes.reorder(0, 2));
        assert_eq!(texts(&notes), vec!["B", "A", "C"]);
        assert_eq!(order_of(&notes, "B"), 0);
        assert_eq!(order_of(&notes, "A"), 1);
        assert_eq!(order_of(&notes, "C"), 2);
        assert_eq!(persisted(&storage), notes.items());

        // A keeps order 1 but jumps the queue once pinned
        let a = notes.items()[1].id.clone();
        assert!(notes.toggle_pin(&a));
        assert_eq!(texts(&notes), vec!["A", "B", "C"]);
        assert_eq!(order_of(&notes, "A"), 1);
    }

    #[test]
    fn test_reorder_stamps_only_moved_note() {
        let (_, mut notes) = setup_abc();
        notes.reorder(2, 0);

        assert_eq!(texts(&notes), vec!["A", "C", "B"]);
        assert!(notes.items()[0].updated_at.is_some());
        assert!(notes.items()[1].updated_at.is_none());
        assert!(notes.items()[2].updated_at.is_none());
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let (storage, mut notes) = setup_abc();
        let before = notes.items().to_vec();
        let stored = storage.get(keys::NOTES).unwrap();

        assert!(!notes.reorder(1, 1));
        assert_eq!(notes.items(), before.as_slice());
        assert_eq!(storage.get(keys::NOTES).unwrap(), stored);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let (_, mut notes) = setup_abc();
        let before = notes.items().to_vec();
        assert!(!notes.reorder(0, 3));
        assert!(!notes.reorder(7, 0));
        assert_eq!(notes.items(), before.as_slice());
    }

    #[test]
    fn test_reorder_makes_orders_dense() {
        let (_, mut notes) = setup_notes();
        for i in 0..6 {
            notes.create(format!("n{}", i));
        }
        // Deletes leave gaps
        let victims: Vec<String> = notes.items().iter().step_by(2).map(|n| n.id.clone()).collect();
        for id in &victims {
            notes.delete(id);
        }
        notes.create("late".to_string());

        for (from, to) in [(0, 3), (3, 1), (2, 0), (1, 2)] {
            assert!(notes.reorder(from, to));
            let orders: Vec<i64> = notes.items().iter().filter_map(|n| n.order).collect();
            let expected: Vec<i64> = (0..notes.len() as i64).collect();
            assert_eq!(orders, expected);
        }
    }

    #[test]
    fn test_pin_precedence() {
        let (storage, mut notes) = setup_abc();
        let a = notes.items()[2].id.clone();

        assert!(notes.toggle_pin(&a));
        assert_eq!(texts(&notes), vec!["A", "C", "B"]);
        assert_eq!(order_of(&notes, "A"), 2);
        assert_eq!(notes.pinned_count(), 1);
        assert!(notes.get(&a).unwrap().updated_at.is_some());
        assert_eq!(persisted(&storage), notes.items());

        assert!(notes.toggle_pin(&a));
        assert_eq!(texts(&notes), vec!["C", "B", "A"]);
        assert_eq!(notes.pinned_count(), 0);
    }

    #[test]
    fn test_pinned_group_keeps_order_among_pins() {
        let (_, mut notes) = setup_abc();
        let ids: Vec<String> = notes.items().iter().map(|n| n.id.clone()).collect();
        for id in &ids {
            notes.toggle_pin(id);
        }
        assert_eq!(texts(&notes), vec!["C", "B", "A"]);
        assert!(!notes.toggle_pin("missing"));
    }

    #[test]
    fn test_update_merges_and_stamps() {
        let (storage, mut notes) = setup_abc();
        let b = notes.items()[1].id.clone();

        assert!(notes.update(&b, NotePatch::text("  B2 ")));
        let note = notes.get(&b).unwrap();
        assert_eq!(note.text, "B2");
        assert!(note.updated_at.is_some());
        assert_eq!(texts(&notes), vec!["C", "B2", "A"]);
        assert_eq!(persisted(&storage), notes.items());
    }

    #[test]
    fn test_update_missing_or_blank_is_noop() {
        let (_, mut notes) = setup_abc();
        let before = notes.items().to_vec();
        let c = before[0].id.clone();

        assert!(!notes.update("nope", NotePatch::text("x")));
        assert!(!notes.update(&c, NotePatch::text(" ")));
        assert_eq!(notes.items(), before.as_slice());
    }

    #[test]
    fn test_delete_keeps_gaps() {
        let (storage, mut notes) = setup_abc();
        let b = notes.items()[1].id.clone();

        assert!(notes.delete(&b));
        assert_eq!(texts(&notes), vec!["C", "A"]);
        assert_eq!(order_of(&notes, "C"), 0);
        assert_eq!(order_of(&notes, "A"), 2);
        assert_eq!(persisted(&storage).len(), 2);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let (storage, mut notes) = setup_abc();
        let before = notes.items().to_vec();
        let stored = storage.get(keys::NOTES).unwrap();

        assert!(!notes.delete("not-there"));
        assert_eq!(notes.items(), before.as_slice());
        assert_eq!(storage.get(keys::NOTES).unwrap(), stored);
    }

    #[test]
    fn test_reopen_round_trip() {
        let (storage, mut notes) = setup_abc();
        let c = notes.items()[0].id.clone();
        notes.toggle_pin(&c);
        notes.reorder(1, 2);

        let reopened: Notes = OrderedStore::open(storage.clone(), keys::NOTES);
        assert_eq!(reopened.items(), notes.items());
    }

    #[test]
    fn test_legacy_records_are_migrated_on_open() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                keys::NOTES,
                r#"[
                    {"id":"new","text":"ordered","createdAt":"2024-02-01T00:00:00Z","order":0},
                    {"id":"old1","text":"first legacy","createdAt":"2023-01-01T00:00:00Z"},
                    {"id":"old2","text":"second legacy","createdAt":"2023-01-02T00:00:00Z","pinned":true}
                ]"#,
            )
            .unwrap();

        let notes: Notes =
            OrderedStore::open_with(storage.clone(), keys::NOTES, fixed_now, || "id".to_string());
        let base = fixed_now().timestamp_millis();

        assert_eq!(texts(&notes), vec!["second legacy", "ordered", "first legacy"]);
        assert_eq!(notes.get("old1").unwrap().order, Some(base + 1));
        assert_eq!(notes.get("old2").unwrap().order, Some(base + 2));
        assert!(persisted(&storage).iter().all(|n| n.order.is_some()));
    }

    #[test]
    fn test_corrupt_storage_opens_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::NOTES, "[{\"id\":").unwrap();

        let mut notes: Notes = OrderedStore::open(storage.clone(), keys::NOTES);
        assert!(notes.is_empty());

        notes.create("fresh".to_string());
        assert_eq!(persisted(&storage).len(), 1);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let storage = Arc::new(MemoryStorage::with_quota(64));
        let mut notes: Notes = OrderedStore::open(storage.clone(), keys::NOTES);

        let note = notes.create("x".repeat(200)).expect("created in memory");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.get(&note.id).unwrap().text.len(), 200);
        assert!(storage.get(keys::NOTES).unwrap().is_none());

        assert!(notes.delete(&note.id));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_unavailable_storage_still_works_in_memory() {
        let mut notes = OrderedStore::<Note, _>::open(MemoryStorage::unavailable(), keys::NOTES);
        notes.create("A".to_string());
        notes.create("B".to_string());
        assert!(notes.reorder(0, 1));
        let texts: Vec<&str> = notes.items().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let (_, mut notes) = setup_notes();
        for text in ["Buy milk", "call mom", "MILKSHAKE recipe"] {
            notes.create(text.to_string());
        }

        let hits: Vec<&str> = notes.search("milk").iter().map(|n| n.text.as_str()).collect();
        assert_eq!(hits, vec!["MILKSHAKE recipe", "Buy milk"]);
        assert_eq!(notes.search("  ").len(), 3);
        assert!(notes.search("zzz").is_empty());
    }

    #[test]
    fn test_projects_lifecycle() {
        let storage = Arc::new(MemoryStorage::new());
        let mut projects: OrderedStore<Project, _> =
            OrderedStore::open_with(storage.clone(), keys::PROJECTS, fixed_now, || {
                uuid::Uuid::new_v4().to_string()
            });

        let intro = projects
            .create(ProjectDraft::new("Intro", ProjectType::ShortForm))
            .unwrap();
        let deep = projects
            .create(ProjectDraft::new("Deep dive", ProjectType::LongForm))
            .unwrap();
        assert!(projects
            .create(ProjectDraft::new("  ", ProjectType::LongForm))
            .is_none());

        let titles = |p: &OrderedStore<Project, Arc<MemoryStorage>>| -> Vec<String> {
            p.items().iter().map(|p| p.title.clone()).collect()
        };
        assert_eq!(titles(&projects), vec!["Deep dive", "Intro"]);

        assert!(projects.update(
            &intro.id,
            ProjectPatch::default()
                .status(ProjectStatus::Scripted)
                .script("Hook, story, call to action"),
        ));
        let updated = projects.get(&intro.id).unwrap();
        assert_eq!(updated.status, ProjectStatus::Scripted);
        assert_eq!(updated.updated_at, Some(fixed_now()));
        assert_eq!(updated.order, Some(1));

        assert!(projects.reorder(1, 0));
        assert_eq!(titles(&projects), vec!["Intro", "Deep dive"]);
        assert_eq!(projects.position(&deep.id), Some(1));

        let reopened: OrderedStore<Project, _> = OrderedStore::open(storage.clone(), keys::PROJECTS);
        assert_eq!(reopened.items(), projects.items());

        assert!(projects.delete(&deep.id));
        assert_eq!(titles(&projects), vec!["Intro"]);
    }
}
