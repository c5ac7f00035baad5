#![cfg(test)]

use std::num::NonZeroUsize;

use super::*;
use crate::util::hash::{BadHasherBuilder, ManualHash};
use crate::util::logger::init_test_logger;

fn countries() -> ChainedHashMap<&'static str, i32> {
    let mut map = ChainedHashMap::new();
    map.insert("India", 100);
    map.insert("China", 69);
    map.insert("US", 60);
    map.insert("Korea", 10);
    map
}

#[test]
fn test_basic_operations() {
    let mut map = ChainedHashMap::new();
    map.insert("India", 100);
    map.insert("China", 69);

    assert_eq!(map.get("India"), Some(&100));
    assert!(map.contains_key("China"));
    assert_eq!(map.remove("China"), Some(69));
    assert!(
        !map.contains_key("China"),
        "A removed key shouldn't be contained in the map."
    );
    assert_eq!(map.len(), 1);
}

#[test]
fn test_missing_key() {
    let mut map = ChainedHashMap::<String, u32>::new();

    assert_eq!(map.get("missing"), None, "Getting an absent key should return None.");
    assert!(!map.contains_key("missing"));
    assert_eq!(map.remove("missing"), None);
    assert_eq!(map.len(), 0, "Removing an absent key shouldn't change the length.");
}

#[test]
fn test_overwrite() {
    let mut map = countries();
    let len = map.len();

    assert_eq!(map.insert("India", 1), Some(100), "Overwriting should return the old value.");
    assert_eq!(map.insert("India", 2), Some(1));
    assert_eq!(map.get("India"), Some(&2));
    assert_eq!(map.len(), len, "Overwriting a key shouldn't change the length.");
}

#[test]
fn test_emptiness() {
    let mut map = ChainedHashMap::<u8, u8>::new();
    assert!(map.is_empty(), "A new map should be empty.");

    map.insert(1, 1);
    assert!(!map.is_empty());

    map.remove(&1);
    assert!(map.is_empty(), "A map should be empty once its only entry is removed.");
}

#[test]
fn test_growth_at_threshold() {
    init_test_logger();
    let mut map = ChainedHashMap::new();
    assert_eq!(map.bucket_count(), 4);

    for i in 0..8 {
        map.insert(i, i * 10);
    }
    assert_eq!(
        map.bucket_count(), 4,
        "A load factor of exactly 2 shouldn't trigger growth."
    );

    map.insert(8, 80);
    assert_eq!(map.len(), 9);
    assert_eq!(
        map.bucket_count(), 8,
        "The ninth entry in four buckets should double the bucket count."
    );

    for i in 0..9 {
        assert_eq!(map.get(&i), Some(&(i * 10)), "Every entry should survive growth.");
    }
}

#[test]
fn test_overwrite_at_threshold() {
    let mut map = ChainedHashMap::new();
    for i in 0..8 {
        map.insert(i, i);
    }

    assert_eq!(map.insert(3, 30), Some(3));
    assert_eq!(
        map.bucket_count(), 4,
        "Overwriting at a load factor of exactly 2 shouldn't trigger growth."
    );
    assert_eq!(map.len(), 8);

    map.insert(8, 8);
    assert_eq!(map.bucket_count(), 8);

    for _ in 0..3 {
        map.remove(&8);
        map.insert(8, 8);
    }
    assert_eq!(
        map.bucket_count(), 8,
        "Re-inserting a removed key below the threshold shouldn't grow the table again."
    );
    assert_eq!(map.get(&3), Some(&30));
}

#[test]
fn test_load_factor_bound() {
    let mut map = ChainedHashMap::new();

    for i in 0..1000_u32 {
        map.insert(i, i);
        assert!(
            map.load_factor() <= 2.0,
            "Load factor should never exceed 2 after an insertion."
        );
    }

    assert_eq!(map.len(), 1000);
    assert_eq!(map.bucket_count(), 512);
}

#[test]
fn test_growth_keeps_last_written() {
    let mut map = ChainedHashMap::new();

    for i in 0..100 {
        map.insert(i, i);
    }
    for i in (0..100).step_by(3) {
        map.insert(i, i + 1000);
    }
    for i in 100..300 {
        map.insert(i, i);
    }

    for i in 0..100 {
        let expected = if i % 3 == 0 { i + 1000 } else { i };
        assert_eq!(map.get(&i), Some(&expected));
    }
    assert_eq!(map.len(), 300);
}

#[test]
fn test_remove_never_shrinks() {
    let mut map = ChainedHashMap::new();
    for i in 0..50 {
        map.insert(i, ());
    }
    let bucket_count = map.bucket_count();

    for i in 0..50 {
        map.remove(&i);
    }

    assert!(map.is_empty());
    assert_eq!(
        map.bucket_count(), bucket_count,
        "Removing entries shouldn't reduce the bucket count."
    );
}

#[test]
fn test_hash_collisions() {
    let mut map = ChainedHashMap::with_hasher(BadHasherBuilder);
    map.insert(ManualHash::new(0, "zero"), 0);
    map.insert(ManualHash::new(0, "one"), 1);
    map.insert(ManualHash::new(4, "two"), 2);
    map.insert(ManualHash::new(0, "three"), 3);
    map.insert(ManualHash::new(1, "four"), 4);

    assert_eq!(map.remove(&ManualHash::new(0, "one")), Some(1));

    assert_eq!(map.get(&ManualHash::new(0, "zero")), Some(&0));
    assert_eq!(
        map.get(&ManualHash::new(0, "three")), Some(&3),
        "Removing from the middle of a chain shouldn't lose later entries."
    );
    assert_eq!(map.get(&ManualHash::new(4, "two")), Some(&2));
    assert_eq!(map.get(&ManualHash::new(0, "one")), None);

    assert_eq!(
        map.into_values().collect::<Vec<_>>(),
        [0, 2, 3, 4],
        "Colliding entries should stay in insertion order within their bucket."
    );
}

#[test]
fn test_growth_redistributes() {
    let mut map = ChainedHashMap::with_hasher(BadHasherBuilder);
    for hash in 0..9 {
        map.insert(ManualHash::new(hash, hash), ());
    }

    assert_eq!(map.bucket_count(), 8);
    assert_eq!(
        map.into_keys().map(ManualHash::value).collect::<Vec<_>>(),
        [0, 8, 1, 2, 3, 4, 5, 6, 7],
        "Entries should be placed by their hash modulo the new bucket count."
    );
}

#[test]
fn test_failed_growth_is_atomic() {
    init_test_logger();
    let mut map = countries();
    let before = map.clone();

    let result = map.rehash(NonZeroUsize::new(usize::MAX / 2).unwrap());

    assert!(result.is_err(), "An unallocatable table should be reported.");
    assert_eq!(map.bucket_count(), 4, "A failed growth should keep the old table.");
    assert_eq!(map, before, "A failed growth shouldn't lose or change entries.");
}

#[test]
fn test_try_insert() {
    let mut map = countries();

    assert_eq!(map.try_insert(Some("Japan"), 5), Ok(None));
    assert_eq!(map.try_insert(Some("Japan"), 6), Ok(Some(5)));

    let error = map.try_insert(None, 7).unwrap_err();
    assert!(error.is_invalid_key(), "An absent key should be rejected.");
    assert_eq!(error.to_string(), "Unable to hash an absent key!");
    assert_eq!(map.len(), 5, "A rejected key shouldn't change the map.");
}

#[test]
fn test_optional_values() {
    let mut map = ChainedHashMap::new();
    map.insert("absent", None::<u8>);

    assert_eq!(
        map.get("absent"), Some(&None),
        "A stored None should be distinguishable from a missing key."
    );
    assert_eq!(map.get("missing"), None);
}

#[test]
fn test_key_set() {
    let map = countries();
    let mut keys = map.key_set();
    keys.sort();

    assert_eq!(keys, ["China", "India", "Korea", "US"]);
    assert_eq!(map.len(), 4, "Taking a key set shouldn't consume the map.");
}

#[test]
fn test_iteration() {
    let mut map = countries();

    assert_eq!(map.iter().len(), 4);
    assert_eq!(map.values().sum::<i32>(), 239);

    for value in map.values_mut() {
        *value *= 2;
    }
    for (_, value) in &mut map {
        *value += 1;
    }

    assert_eq!(map.get("India"), Some(&201));

    let mut entries = map.into_iter().collect::<Vec<_>>();
    entries.sort();
    assert_eq!(entries, [("China", 139), ("India", 201), ("Korea", 21), ("US", 121)]);
}

#[test]
fn test_clear() {
    let mut map = (0..20).map(|i| (i, i)).collect::<ChainedHashMap<_, _>>();
    let bucket_count = map.bucket_count();
    map.clear();

    assert!(map.is_empty());
    assert_eq!(map.iter().count(), 0);
    assert_eq!(map.bucket_count(), bucket_count, "Clearing shouldn't shrink the table.");
}

#[test]
fn test_get_mut_and_entry() {
    let mut map = ChainedHashMap::new();
    map.insert(String::from("a"), 1);

    if let Some(value) = map.get_mut("a") {
        *value = 5;
    }

    assert_eq!(map.get_entry("a"), Some((&String::from("a"), &5)));
    assert_eq!(map.remove_entry("a"), Some((String::from("a"), 5)));
}

#[test]
fn test_display() {
    let mut map = ChainedHashMap::<u8, u8>::new();
    map.insert(1, 2);

    assert_eq!(map.to_string(), "#{1: 2}");
    assert_eq!(ChainedHashMap::<u8, u8>::new().to_string(), "#{}");
}

#[test]
fn test_adaptor_lengths() {
    let mut map = countries();

    assert_eq!(map.keys().len(), 4);
    assert_eq!(map.values().len(), 4);
    assert_eq!(map.values_mut().len(), 4);

    let mut values = map.clone().into_values();
    values.next();
    assert_eq!(values.len(), 3, "Adaptors should track the entries left to yield.");
    assert_eq!(map.into_keys().size_hint(), (4, Some(4)));
}
