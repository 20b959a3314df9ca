//! Repository Integration Tests
//!
//! ItemRepository over each store implementation.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Item, ItemId};
    use crate::repository::{
        decode_items, encode_items, ItemRepository, JsonFileStore, KeyValueStore, MemoryStore,
        Repository, SqliteStore,
    };

    fn sample_items() -> Vec<Item> {
        let mut done = Item::new(2, "Walk dog");
        done.completed = true;
        vec![Item::new(1, "Buy milk"), done, Item::with_id(ItemId::from("legacy-3"), "Call mom")]
    }

    fn assert_round_trip<S: KeyValueStore>(mut repo: ItemRepository<S>) {
        let items = sample_items();
        repo.save_all(&items).expect("Save failed");

        let loaded = repo.load_all().expect("Load failed");
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_round_trip_memory() {
        assert_round_trip(ItemRepository::new(MemoryStore::new(), "todos"));
    }

    #[test]
    fn test_round_trip_sqlite() {
        let store = SqliteStore::open_in_memory().expect("Failed to open test DB");
        assert_round_trip(ItemRepository::new(store, "todos"));
    }

    #[test]
    fn test_round_trip_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_round_trip(ItemRepository::new(store, "todos"));
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let repo = ItemRepository::new(MemoryStore::new(), "todos");
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        for raw in ["not json", "{\"id\":1}", "[{\"text\":\"no id\"}]", "[1, 2]"] {
            let repo = ItemRepository::new(MemoryStore::with_entry("todos", raw), "todos");
            assert!(
                matches!(repo.load_all(), Err(DomainError::Serialization(_))),
                "expected error for {raw}"
            );
        }
    }

    #[test]
    fn test_save_overwrites_whole_list() {
        let mut repo = ItemRepository::new(MemoryStore::new(), "todos");
        repo.save_all(&sample_items()).unwrap();
        repo.save_all(&[Item::new(9, "Only one")]).unwrap();

        let loaded = repo.load_all().unwrap();
        assert_eq!(loaded, vec![Item::new(9, "Only one")]);
    }

    #[test]
    fn test_uses_configured_key() {
        let mut repo = ItemRepository::new(MemoryStore::new(), "my-list");
        repo.save_all(&sample_items()).unwrap();

        assert_eq!(repo.key(), "my-list");
        assert!(repo.store().get("my-list").unwrap().is_some());
        assert!(repo.store().get("todos").unwrap().is_none());
    }

    #[test]
    fn test_rejected_write_surfaces_storage_error() {
        let mut repo = ItemRepository::new(MemoryStore::new(), "todos");
        repo.store_mut().set_reject_writes(true);

        assert!(matches!(repo.save_all(&sample_items()), Err(DomainError::Storage(_))));
    }

    #[test]
    fn test_load_repaired_rewrites_dropped_records() {
        let raw = r#"[{"id": 1, "text": "keep", "completed": false}, {"id": 2, "text": "", "completed": true}]"#;
        let mut repo = ItemRepository::new(MemoryStore::with_entry("todos", raw), "todos");

        let items = repo.load_repaired().unwrap();
        assert_eq!(items, vec![Item::new(1, "keep")]);
        assert_eq!(
            repo.store().get("todos").unwrap().as_deref(),
            Some(r#"[{"id":1,"text":"keep","completed":false}]"#)
        );
    }

    #[test]
    fn test_load_repaired_keeps_malformed_value() {
        let mut repo = ItemRepository::new(MemoryStore::with_entry("todos", "not json"), "todos");

        assert!(repo.load_repaired().is_err());
        assert_eq!(repo.store().get("todos").unwrap().as_deref(), Some("not json"));
        assert_eq!(repo.store().write_count(), 0);
    }

    #[test]
    fn test_load_repaired_survives_rejected_rewrite() {
        let raw = r#"[{"id": 1, "text": "keep", "completed": false}, {"id": 1, "text": "dupe", "completed": false}]"#;
        let mut repo = ItemRepository::new(MemoryStore::with_entry("todos", raw), "todos");
        repo.store_mut().set_reject_writes(true);

        assert_eq!(repo.load_repaired().unwrap(), vec![Item::new(1, "keep")]);
    }

    #[test]
    fn test_decode_drops_blank_and_duplicate_records() {
        let raw = r#"[
            {"id": 1, "text": "keep", "completed": false},
            {"id": 2, "text": "   ", "completed": false},
            {"id": 1, "text": "dupe", "completed": true},
            {"id": "1", "text": "string id is distinct", "completed": true}
        ]"#;

        let items = decode_items(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "keep");
        assert_eq!(items[1].id, ItemId::Text("1".to_string()));
    }

    #[test]
    fn test_encode_layout() {
        let raw = encode_items(&[Item::new(1, "a")]).unwrap();
        assert_eq!(raw, r#"[{"id":1,"text":"a","completed":false}]"#);
    }
}
