//! A separate-chaining Hashtable with explicit errors and a predictable growth policy.
//!
//! [`HashtableMap`] backs both the Node index of a [`Graph`](crate::Graph) and the
//! finalized-Node bookkeeping of every Dijkstra search.

mod config;
pub use self::config::HashtableConfig;

mod key;
pub use self::key::TableKey;

use crate::{Error, Lookup, Result};
use hashbrown::hash_map::DefaultHashBuilder;
use std::borrow::Borrow;
use std::hash::BuildHasher;

/// A generic Map from Keys to Values, built from an Array of Buckets.
///
/// Every Key is placed in the Bucket `hash(key) % capacity`. Once the ratio of stored Pairs to
/// Buckets reaches the configured load factor (`0.8` by default), the number of Buckets doubles
/// and every Pair is moved to its new Bucket. The Table never shrinks.
///
/// Unlike [`std::collections::HashMap`], inserting an existing Key is an error instead of an
/// overwrite, and lookups of missing Keys return [`Error::NotFound`].
///
/// ## Examples
/// Basic usage:
/// ```
/// use campus_pathfinding::{Error, HashtableMap};
///
/// let mut map = HashtableMap::new();
/// map.put("Bascom Hall", 1).unwrap();
///
/// assert_eq!(map.get("Bascom Hall"), Ok(&1));
/// assert_eq!(map.put("Bascom Hall", 2), Err(Error::DuplicateKey));
/// assert_eq!(map.put("", 3), Err(Error::InvalidKey));
///
/// assert_eq!(map.remove("Bascom Hall"), Ok(1));
/// assert!(!map.contains_key("Bascom Hall"));
/// ```
#[derive(Clone, Debug)]
pub struct HashtableMap<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    max_load_factor: f64,
    hash_builder: S,
}

impl<K: TableKey, V> HashtableMap<K, V, DefaultHashBuilder> {
    /// Creates an empty Map with the default capacity of 64 Buckets
    pub fn new() -> Self {
        Self::with_config(HashtableConfig::default())
    }

    /// Creates an empty Map with `capacity` Buckets
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(HashtableConfig::with_capacity(capacity))
    }

    /// Creates an empty Map using the given [`HashtableConfig`]
    pub fn with_config(config: HashtableConfig) -> Self {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: TableKey, V> Default for HashtableMap<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TableKey, V, S: BuildHasher> HashtableMap<K, V, S> {
    /// Creates an empty Map with the default capacity that hashes its Keys with `hash_builder`
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_config_and_hasher(HashtableConfig::default(), hash_builder)
    }

    /// Creates an empty Map from a [`HashtableConfig`] and a custom hasher
    pub fn with_config_and_hasher(config: HashtableConfig, hash_builder: S) -> Self {
        HashtableMap {
            buckets: empty_buckets(config.capacity()),
            len: 0,
            max_load_factor: config.load_factor(),
            hash_builder,
        }
    }

    /// Adds a new Pair to the Map.
    ///
    /// ## Errors
    /// - [`Error::InvalidKey`] if `key` is vacant (see [`TableKey`])
    /// - [`Error::DuplicateKey`] if `key` is already present. The stored Value is left untouched.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        if key.is_vacant() {
            return Err(Error::InvalidKey);
        }
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if bucket.iter().any(|(k, _)| *k == key) {
            return Err(Error::DuplicateKey);
        }
        bucket.push((key, value));
        self.len += 1;

        if self.len as f64 / self.buckets.len() as f64 >= self.max_load_factor {
            self.grow_and_rehash();
        }
        Ok(())
    }

    /// Returns the Value associated with `key`, or [`Error::NotFound`].
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.find(key)
            .map(|(_, v)| v)
            .ok_or(Error::NotFound(Lookup::Key))
    }

    /// Returns a mutable reference to the Value associated with `key`, or [`Error::NotFound`].
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        if key.is_vacant() {
            return Err(Error::NotFound(Lookup::Key));
        }
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
            .ok_or(Error::NotFound(Lookup::Key))
    }

    /// Checks whether `key` is present. Vacant Keys are never present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes `key` from the Map and returns the Value it mapped to, or [`Error::NotFound`].
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        if key.is_vacant() {
            return Err(Error::NotFound(Lookup::Key));
        }
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket
            .iter()
            .position(|(k, _)| k.borrow() == key)
            .ok_or(Error::NotFound(Lookup::Key))?;
        self.len -= 1;
        Ok(bucket.swap_remove(position).1)
    }

    /// Removes all Pairs. The capacity stays the same.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// The number of stored Pairs
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no Pairs are stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of Buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// An Iterator over all stored Pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    /// An Iterator over all stored Keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    fn find<Q>(&self, key: &Q) -> Option<&(K, V)>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        if key.is_vacant() {
            return None;
        }
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(k, _)| k.borrow() == key)
    }

    fn bucket_index<Q: TableKey + ?Sized>(&self, key: &Q) -> usize {
        index_for(self.hash_builder.hash_one(key), self.buckets.len())
    }

    fn grow_and_rehash(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let mut new_buckets = empty_buckets(new_capacity);
        for (key, value) in self.buckets.drain(..).flatten() {
            let index = index_for(self.hash_builder.hash_one(&key), new_capacity);
            new_buckets[index].push((key, value));
        }
        self.buckets = new_buckets;

        debug_log!(
            "HashtableMap grew to {} buckets holding {} pairs",
            new_capacity,
            self.len
        );
    }
}

/// The hash is unsigned, so the remainder is always a valid Bucket.
fn index_for(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Vec<(K, V)>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{BuildHasherDefault, Hasher};

    #[test]
    fn put_and_get() {
        let mut map = HashtableMap::new();
        map.put("key1", 10).unwrap();
        map.put("key2", 20).unwrap();
        map.put("key3", 40).unwrap();
        map.put("key4", 40).unwrap();

        assert_eq!(map.get("key1"), Ok(&10));
        assert_eq!(map.get("key2"), Ok(&20));
        assert_eq!(map.get("key3"), Ok(&40));
        assert_eq!(map.get("key4"), Ok(&40));
        assert_eq!(map.get("key5"), Err(Error::NotFound(Lookup::Key)));
    }

    #[test]
    fn duplicate_key_keeps_old_value() {
        let mut map = HashtableMap::new();
        map.put(String::from("Union South"), 1).unwrap();
        assert_eq!(
            map.put(String::from("Union South"), 2),
            Err(Error::DuplicateKey)
        );
        assert_eq!(map.get("Union South"), Ok(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn vacant_keys() {
        let mut map: HashtableMap<String, u32> = HashtableMap::new();
        assert_eq!(map.put(String::new(), 1), Err(Error::InvalidKey));
        assert!(!map.contains_key(""));
        assert_eq!(map.get(""), Err(Error::NotFound(Lookup::Key)));
        assert_eq!(map.remove(""), Err(Error::NotFound(Lookup::Key)));
        assert!(map.is_empty());
    }

    #[test]
    fn contains_key() {
        let mut map = HashtableMap::new();
        map.put("key1", 10).unwrap();
        map.put("key2", 20).unwrap();
        map.put("key3", 30).unwrap();

        assert!(map.contains_key("key1"));
        assert!(map.contains_key("key2"));
        assert!(map.contains_key("key3"));
        assert!(!map.contains_key("key4"));

        let empty: HashtableMap<&str, i32> = HashtableMap::new();
        assert!(!empty.contains_key("key1"));
    }

    #[test]
    fn remove() {
        let mut map = HashtableMap::new();
        map.put("key1", 10).unwrap();
        map.put("key2", 20).unwrap();
        map.put("key3", 30).unwrap();

        assert_eq!(map.remove("key1"), Ok(10));
        assert!(!map.contains_key("key1"));
        assert_eq!(map.get("key1"), Err(Error::NotFound(Lookup::Key)));
        assert_eq!(map.remove("key4"), Err(Error::NotFound(Lookup::Key)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn get_mut() {
        let mut map = HashtableMap::new();
        map.put(7u32, vec![1]).unwrap();
        map.get_mut(&7).unwrap().push(2);
        assert_eq!(map.get(&7), Ok(&vec![1, 2]));
        assert!(map.get_mut(&8).is_err());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut map = HashtableMap::new();
        for i in 0..100u32 {
            map.put(i, i).unwrap();
        }
        let capacity = map.capacity();
        map.clear();
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), capacity);
        assert!(!map.contains_key(&5));

        let mut empty: HashtableMap<u32, u32> = HashtableMap::new();
        empty.clear();
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn grows_at_load_factor() {
        let mut map = HashtableMap::new();
        assert_eq!(map.capacity(), 64);

        // 51 / 64 < 0.8
        for i in 0..51u32 {
            map.put(i, i * 2).unwrap();
        }
        assert_eq!(map.capacity(), 64);

        // 52 / 64 >= 0.8
        map.put(51, 102).unwrap();
        assert_eq!(map.capacity(), 128);

        for i in 52..500u32 {
            map.put(i, i * 2).unwrap();
        }
        assert!(map.capacity() >= 512);
        assert_eq!(map.len(), 500);
        for i in 0..500u32 {
            assert_eq!(map.get(&i), Ok(&(i * 2)));
        }
    }

    #[test]
    fn configured_growth() {
        let mut map = HashtableMap::with_config(HashtableConfig {
            initial_capacity: 4,
            max_load_factor: 0.5,
        });
        map.put('a', ()).unwrap();
        assert_eq!(map.capacity(), 4);
        map.put('b', ()).unwrap();
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.keys().count(), 2);
    }

    /// Every Key lands in the same Bucket, so all lookups walk the chain.
    #[derive(Default)]
    struct Collide;
    impl Hasher for Collide {
        fn write(&mut self, _: &[u8]) {}
        fn finish(&self) -> u64 {
            u64::MAX
        }
    }

    #[test]
    fn colliding_keys_and_huge_hashes() {
        let mut map = HashtableMap::with_hasher(BuildHasherDefault::<Collide>::default());
        for i in 0..40i64 {
            map.put(-i, i).unwrap();
        }
        for i in 0..40i64 {
            assert_eq!(map.get(&-i), Ok(&i));
        }
        assert_eq!(map.remove(&-17), Ok(17));
        assert_eq!(map.get(&-18), Ok(&18));
        assert_eq!(map.iter().count(), 39);
    }
}
