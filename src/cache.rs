//! Small hand-rolled caches for the memoization policy of §5: a bounded LRU (`decompose`,
//! capacity 1024) and an unbounded memo map (`simplify_at_loops`, `mhgraph_sat`).
//!
//! No LRU crate appears anywhere in the retrieval pack, so this is rolled by hand in the
//! manner of the teacher's `ConfigIterator`: a small owned state machine, here guarded by a
//! `Mutex` so it can be shared across recursive calls without `&mut self` propagating through
//! the whole decomposition engine.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Mutex;

struct LruInner<K, V> {
    map: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V: Clone> LruInner<K, V> {
    fn touch(&mut self, key: &K) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let k = self.order.remove(pos).expect("position just found");
            self.order.push_back(k);
        }
    }

    fn get(&mut self, key: &K) -> Option<V> {
        let value = self.map.get(key).cloned();
        if value.is_some() {
            self.touch(key);
        }
        value
    }

    fn insert(&mut self, key: K, value: V) {
        if !self.map.contains_key(&key) && self.map.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.map.remove(&oldest);
            }
        }
        self.touch(&key);
        if !self.order.contains(&key) {
            self.order.push_back(key.clone());
        }
        self.map.insert(key, value);
    }
}

/// A bounded, least-recently-used cache, safe to call through a shared reference.
pub struct LruCache<K, V> {
    inner: Mutex<LruInner<K, V>>,
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
    /// A fresh cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LruInner {
                map: HashMap::new(),
                order: VecDeque::new(),
                capacity: capacity.max(1),
            }),
        }
    }

    /// Look up `key`, marking it most-recently-used on a hit.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().expect("lru cache mutex poisoned").get(key)
    }

    /// Insert or overwrite `key`, evicting the least-recently-used entry if at capacity.
    pub fn insert(&self, key: K, value: V) {
        self.inner.lock().expect("lru cache mutex poisoned").insert(key, value);
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("lru cache mutex poisoned").map.len()
    }
}

/// An unbounded memoization map, safe to call through a shared reference.
pub struct MemoMap<K, V> {
    inner: Mutex<HashMap<K, V>>,
}

impl<K: Eq + Hash + Clone, V: Clone> MemoMap<K, V> {
    /// A fresh, empty memo map.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a memoized result.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().expect("memo map mutex poisoned").get(key).cloned()
    }

    /// Record a memoized result.
    pub fn insert(&self, key: K, value: V) {
        self.inner.lock().expect("memo map mutex poisoned").insert(key, value);
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Default for MemoMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "unit_tests/cache.rs"]
mod tests;
