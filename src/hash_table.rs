//! Hash table with separate chaining or linear probing
//!
//! The collision strategy is picked once, at construction, through
//! [`CollisionMethod`]. Both strategies share the same growth policy: an
//! insert that would bring the load factor to the threshold (0.7 by default)
//! first doubles the capacity and re-inserts every live entry. The table
//! never shrinks.
//!
//! Keys are hashed with FxHash, which is deterministic across runs, and
//! reduced modulo the current capacity. Bucket indices are therefore only
//! meaningful for one bucket array and are re-derived after every resize.
//!
//! # Linear probing deletes
//!
//! A lookup stops at the first empty slot, so clearing a slot could hide
//! entries that probed past it. After a delete, every entry of the trailing
//! cluster is taken out and re-inserted through [`HashTable::insert`].
//!
//! # Example
//!
//! ```rust
//! use classic_algos::hash_table::{CollisionMethod, HashTable};
//!
//! let mut table = HashTable::with_method(CollisionMethod::LinearProbing);
//! table.insert("apple", 3).unwrap();
//! table.insert("pear", 5).unwrap();
//! assert_eq!(table.get("apple"), Some(&3));
//!
//! table.delete("apple").unwrap();
//! assert_eq!(table.get("apple"), None);
//! assert_eq!(table.get("pear"), Some(&5));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::str::FromStr;

use rustc_hash::FxHasher;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::ContainerError;

/// Default number of buckets for a fresh table
pub const DEFAULT_CAPACITY: usize = 16;

/// Default load factor at which the table doubles
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.7;

/// How colliding keys are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollisionMethod {
    /// Each bucket holds a short list of entries
    #[default]
    Chaining,
    /// Each slot holds at most one entry; collisions move to the next free slot
    LinearProbing,
}

impl FromStr for CollisionMethod {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chaining" => Ok(CollisionMethod::Chaining),
            "linear" | "linear_probing" => Ok(CollisionMethod::LinearProbing),
            other => Err(ContainerError::InvalidConfiguration(format!(
                "unknown collision method '{other}', expected 'chaining' or 'linear'"
            ))),
        }
    }
}

impl fmt::Display for CollisionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionMethod::Chaining => write!(f, "chaining"),
            CollisionMethod::LinearProbing => write!(f, "linear"),
        }
    }
}

/// Construction parameters for a [`HashTable`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HashTableConfig {
    pub initial_capacity: usize,
    pub method: CollisionMethod,
    /// Resize happens before an insert that would make `size / capacity` reach this
    pub load_factor_threshold: f64,
}

impl HashTableConfig {
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_method(mut self, method: CollisionMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_load_factor_threshold(mut self, threshold: f64) -> Self {
        self.load_factor_threshold = threshold;
        self
    }

    fn validate(&self) -> Result<(), ContainerError> {
        if self.initial_capacity == 0 {
            return Err(ContainerError::InvalidConfiguration(
                "initial capacity must be non-zero".into(),
            ));
        }
        if !(self.load_factor_threshold > 0.0 && self.load_factor_threshold <= 1.0) {
            return Err(ContainerError::InvalidConfiguration(format!(
                "load factor threshold {} is outside (0, 1]",
                self.load_factor_threshold
            )));
        }
        Ok(())
    }
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            method: CollisionMethod::default(),
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
        }
    }
}

type Chain<K, V> = SmallVec<[(K, V); 2]>;

#[derive(Debug, Clone)]
enum Storage<K, V> {
    Chaining(Vec<Chain<K, V>>),
    LinearProbing(Vec<Option<(K, V)>>),
}

impl<K, V> Storage<K, V> {
    fn empty(method: CollisionMethod, capacity: usize) -> Self {
        match method {
            CollisionMethod::Chaining => {
                Storage::Chaining((0..capacity).map(|_| SmallVec::new()).collect())
            }
            CollisionMethod::LinearProbing => {
                Storage::LinearProbing((0..capacity).map(|_| None).collect())
            }
        }
    }

    fn method(&self) -> CollisionMethod {
        match self {
            Storage::Chaining(_) => CollisionMethod::Chaining,
            Storage::LinearProbing(_) => CollisionMethod::LinearProbing,
        }
    }

    fn into_entries(self) -> Vec<(K, V)> {
        match self {
            Storage::Chaining(buckets) => buckets.into_iter().flatten().collect(),
            Storage::LinearProbing(slots) => slots.into_iter().flatten().collect(),
        }
    }
}

/// A hash map with a fixed collision strategy and doubling growth
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    storage: Storage<K, V>,
    capacity: usize,
    size: usize,
    load_factor_threshold: f64,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Creates a chaining table with the default capacity
    pub fn new() -> Self {
        Self::with_method(CollisionMethod::Chaining)
    }

    /// Creates a table with the default capacity and the given strategy
    pub fn with_method(method: CollisionMethod) -> Self {
        Self::build(HashTableConfig::default().with_method(method))
    }

    /// Creates a table from an explicit configuration
    ///
    /// # Errors
    /// Returns [`ContainerError::InvalidConfiguration`] for a zero capacity or a
    /// load factor threshold outside (0, 1].
    pub fn with_config(config: HashTableConfig) -> Result<Self, ContainerError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Creates a table from a method name, `"chaining"` or `"linear"`
    pub fn from_method_name(capacity: usize, method: &str) -> Result<Self, ContainerError> {
        let method = method.parse()?;
        Self::with_config(
            HashTableConfig::default()
                .with_capacity(capacity)
                .with_method(method),
        )
    }

    fn build(config: HashTableConfig) -> Self {
        Self {
            storage: Storage::empty(config.method, config.initial_capacity),
            capacity: config.initial_capacity,
            size: 0,
            load_factor_threshold: config.load_factor_threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets (chaining) or slots (linear probing)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn method(&self) -> CollisionMethod {
        self.storage.method()
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity as f64
    }

    /// Inserts a key-value pair, returning the previous value for the key
    ///
    /// While the insert would bring the load factor to the threshold, the
    /// table doubles first, so the target bucket is computed against the
    /// final capacity.
    ///
    /// # Errors
    /// Returns [`ContainerError::CapacityExhausted`] if linear probing wraps
    /// around without a free slot. The growth policy keeps this unreachable.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, ContainerError> {
        // Low thresholds on small tables can need more than one doubling
        while (self.size + 1) as f64 / self.capacity as f64 >= self.load_factor_threshold {
            self.resize()?;
        }
        self.place(key, value)
    }

    /// Returns a reference to the value for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let home = self.bucket_index(key);
        match &self.storage {
            Storage::Chaining(buckets) => buckets[home]
                .iter()
                .find(|(k, _)| key_matches(k, key))
                .map(|(_, v)| v),
            Storage::LinearProbing(slots) => {
                let index = Self::probe_for(slots, self.capacity, home, key)?;
                slots[index].as_ref().map(|(_, v)| v)
            }
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value if it was present
    ///
    /// With linear probing the rest of the cluster is re-inserted through
    /// [`insert`](Self::insert), so a delete goes through the same resize
    /// check as an insert. Every re-insert happens right after its own slot
    /// was cleared, which keeps the projected load below the threshold, but
    /// the walk still stops if the capacity ever changes underneath it.
    ///
    /// # Errors
    /// Propagates errors from re-inserting the cluster.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<Option<V>, ContainerError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let home = self.bucket_index(key);
        let capacity = self.capacity;

        let slot = match &mut self.storage {
            Storage::Chaining(buckets) => {
                let bucket = &mut buckets[home];
                let removed = bucket
                    .iter()
                    .position(|(k, _)| key_matches(k, key))
                    .map(|pos| bucket.remove(pos).1);
                if removed.is_some() {
                    self.size -= 1;
                }
                return Ok(removed);
            }
            Storage::LinearProbing(slots) => match Self::probe_for(slots, capacity, home, key) {
                Some(slot) => slot,
                None => return Ok(None),
            },
        };

        let removed = match self.take_slot(slot) {
            Some((_, value)) => value,
            None => return Ok(None),
        };
        self.size -= 1;

        let mut next = (slot + 1) % capacity;
        let mut moved = 0usize;
        while let Some((k, v)) = self.take_slot(next) {
            self.size -= 1;
            self.insert(k, v)?;
            moved += 1;
            if self.capacity != capacity {
                break;
            }
            next = (next + 1) % capacity;
        }
        trace!(slot, moved, "re-inserted probe cluster after delete");

        Ok(Some(removed))
    }

    /// Iterates over all live entries in bucket order
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        match &self.storage {
            Storage::Chaining(buckets) => {
                Box::new(buckets.iter().flatten().map(|(k, v)| (k, v)))
            }
            Storage::LinearProbing(slots) => {
                Box::new(slots.iter().flatten().map(|(k, v)| (k, v)))
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        (hasher.finish() % self.capacity as u64) as usize
    }

    /// Walk forward from `home` until the key, an empty slot, or a full wrap
    fn probe_for<Q>(
        slots: &[Option<(K, V)>],
        capacity: usize,
        home: usize,
        key: &Q,
    ) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut index = home;
        while let Some((k, _)) = &slots[index] {
            if key_matches(k, key) {
                return Some(index);
            }
            index = (index + 1) % capacity;
            if index == home {
                break;
            }
        }
        None
    }

    fn take_slot(&mut self, index: usize) -> Option<(K, V)> {
        match &mut self.storage {
            Storage::LinearProbing(slots) => slots[index].take(),
            Storage::Chaining(_) => None,
        }
    }

    /// Insert without the load check
    fn place(&mut self, key: K, value: V) -> Result<Option<V>, ContainerError> {
        let home = self.bucket_index(&key);
        let capacity = self.capacity;

        match &mut self.storage {
            Storage::Chaining(buckets) => {
                let bucket = &mut buckets[home];
                if let Some((_, existing)) = bucket.iter_mut().find(|(k, _)| *k == key) {
                    return Ok(Some(mem::replace(existing, value)));
                }
                bucket.push((key, value));
                self.size += 1;
                Ok(None)
            }
            Storage::LinearProbing(slots) => {
                let mut index = home;
                loop {
                    if slots[index].is_none() {
                        slots[index] = Some((key, value));
                        self.size += 1;
                        return Ok(None);
                    }
                    if let Some((k, existing)) = &mut slots[index] {
                        if *k == key {
                            return Ok(Some(mem::replace(existing, value)));
                        }
                    }
                    index = (index + 1) % capacity;
                    if index == home {
                        return Err(ContainerError::CapacityExhausted { capacity });
                    }
                }
            }
        }
    }

    /// Double the capacity and re-insert every live entry
    fn resize(&mut self) -> Result<(), ContainerError> {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity * 2;
        let method = self.method();

        let old = mem::replace(&mut self.storage, Storage::empty(method, new_capacity));
        self.capacity = new_capacity;
        self.size = 0;

        for (key, value) in old.into_entries() {
            self.place(key, value)?;
        }

        debug!(
            %method,
            old_capacity,
            new_capacity,
            size = self.size,
            "resized hash table"
        );
        Ok(())
    }
}

fn key_matches<K: Borrow<Q>, Q: Eq + ?Sized>(stored: &K, key: &Q) -> bool {
    <K as Borrow<Q>>::borrow(stored) == key
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
