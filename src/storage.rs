use std::borrow::Borrow;
use std::collections::hash_map::{HashMap, Iter};
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// In-memory key-value storage.
///
/// A thin wrapper over a `HashMap`: every key maps to exactly one value and
/// inserting an existing key overwrites it. Lookups of missing keys return
/// `None`, removals of missing keys do nothing. No operation can fail.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "K: Serialize + Eq + Hash, V: Serialize",
            deserialize = "K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>"
        )
    )
)]
pub struct DataStorage<K, V> {
    items: HashMap<K, V>,
}

impl<K, V> DataStorage<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity(capacity),
        }
    }

    /// Associates `key` with `value`, replacing any previous value.
    pub fn insert(&mut self, key: K, value: V) {
        self.items.insert(key, value);
    }

    /// Returns the value stored under `key`, or `None` if there is none.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.get(key)
    }

    /// Removes `key` if present. Removing a missing key is a no-op.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.remove(key);
    }

    /// Number of keys currently held
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains_key(key)
    }

    // Iteration order is unspecified
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.items.iter()
    }
}

impl<K, V> Default for DataStorage<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
