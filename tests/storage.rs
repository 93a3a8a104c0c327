use std::collections::HashSet;

use datastore::{DataStorage, Value};
use rand::distributions::{Distribution, Uniform};

#[test]
fn add_and_get_item() {
    let mut storage = DataStorage::new();
    storage.insert("user", Value::from("Герман"));

    assert_eq!(storage.get("user"), Some(&Value::from("Герман")));
}

#[test]
fn remove_item() {
    let mut storage = DataStorage::new();
    storage.insert("temp", Value::from(123));
    storage.remove("temp");

    assert_eq!(storage.get("temp"), None);
}

#[test]
fn count_items() {
    let mut storage = DataStorage::new();
    storage.insert("a", 1);
    storage.insert("b", 2);

    assert_eq!(storage.count(), 2);
}

#[test]
fn overwrite_keeps_last_value() {
    let mut storage = DataStorage::new();
    storage.insert("a", 1);
    storage.insert("a", 2);

    assert_eq!(storage.get("a"), Some(&2));
    assert_eq!(storage.count(), 1);
}

#[test]
fn fresh_storage_is_empty() {
    let storage: DataStorage<String, Value> = DataStorage::new();

    assert_eq!(storage.count(), 0);
    assert!(storage.is_empty());
    assert_eq!(storage.get("anything"), None);
}

#[test]
fn remove_missing_key_is_noop() {
    let mut storage = DataStorage::new();
    storage.insert("a", 1);

    storage.remove("missing");
    storage.remove("missing");

    assert_eq!(storage.count(), 1);
    assert_eq!(storage.get("missing"), None);
}

#[test]
fn remove_is_idempotent() {
    let mut storage = DataStorage::new();
    storage.insert("k", "v");

    storage.remove("k");
    storage.remove("k");

    assert_eq!(storage.get("k"), None);
    assert_eq!(storage.count(), 0);
}

#[test]
fn reinsert_after_remove() {
    let mut storage = DataStorage::new();
    storage.insert("k", 1);
    storage.remove("k");
    storage.insert("k", 2);

    assert_eq!(storage.get("k"), Some(&2));
    assert_eq!(storage.count(), 1);
}

#[test]
fn owned_keys_borrowed_lookup() {
    let mut storage: DataStorage<String, Value> = DataStorage::with_capacity(16);
    storage.insert("user".to_owned(), Value::Bool(true));

    assert!(storage.contains_key("user"));
    assert_eq!(storage.get("user"), Some(&Value::Bool(true)));

    storage.remove("user");
    assert!(!storage.contains_key("user"));
}

#[test]
fn integer_keys() {
    let mut storage = DataStorage::default();
    storage.insert(1u32, "one");
    storage.insert(2u32, "two");

    assert_eq!(storage.get(&1), Some(&"one"));
    assert_eq!(storage.get(&3), None);
}

#[test]
fn iter_visits_every_entry() {
    let mut storage = DataStorage::new();
    storage.insert("a", 1);
    storage.insert("b", 2);
    storage.insert("a", 3);

    let mut entries: Vec<_> = storage.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort();

    assert_eq!(entries, vec![("a", 3), ("b", 2)]);
}

// Count must track the number of distinct live keys for any sequence of
// inserts and removes.
#[test]
fn count_matches_distinct_keys() {
    let mut rng = rand::thread_rng();
    let keys = Uniform::from(0..50u32);

    let mut storage = DataStorage::new();
    let mut live = HashSet::new();

    for i in 0..1000 {
        let key = keys.sample(&mut rng);

        if i % 3 == 0 {
            storage.remove(&key);
            live.remove(&key);
            assert_eq!(storage.get(&key), None);
        } else {
            storage.insert(key, i);
            live.insert(key);
            assert_eq!(storage.get(&key), Some(&i));
        }

        assert_eq!(storage.count(), live.len());
    }
}
