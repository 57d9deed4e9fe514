//! Memo Cache Module
//!
//! Bounded memoization of a computed value keyed by its dependency list.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::memo::{InsertionOrder, MemoStats};

// == Memo Cache ==
/// Memoizes the result of a pure computation for a dependency list.
///
/// Two checks gate recomputation. The dependency list is first compared
/// element-wise with the list from the previous call; any difference forces a
/// recompute even when the serialized key is still cached. Only when nothing
/// changed is the cache consulted under the serialized key.
///
/// At most `capacity` entries are kept. The entry inserted earliest is evicted
/// first, regardless of how recently it was read.
#[derive(Debug)]
pub struct MemoCache<D, T> {
    /// Serialized dependency list -> computed value
    entries: HashMap<String, T>,
    /// First-insertion order of keys
    order: InsertionOrder,
    /// Dependency list seen on the previous call
    last_deps: Vec<D>,
    stats: MemoStats,
    capacity: usize,
}

impl<D, T> MemoCache<D, T>
where
    D: Serialize + PartialEq + Clone,
    T: Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` values.
    ///
    /// A capacity of zero disables storage; every call recomputes.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            last_deps: Vec::new(),
            stats: MemoStats::new(capacity),
            capacity,
        }
    }

    // == Get ==
    /// Returns the value for `deps`, running `compute` when needed.
    ///
    /// # Arguments
    /// * `compute` - Pure function producing the value
    /// * `deps` - Values the computation depends on
    pub fn get<F>(&mut self, compute: F, deps: &[D]) -> T
    where
        F: FnOnce() -> T,
    {
        let changed = self.deps_changed(deps);
        let key = dependency_key(deps);

        if !changed {
            if let Some(value) = key.as_ref().and_then(|k| self.entries.get(k)) {
                let value = value.clone();
                self.stats.record_hit();
                self.last_deps = deps.to_vec();
                return value;
            }
        }

        let value = compute();
        self.stats.record_computation();

        if let Some(key) = key {
            self.store(key, value.clone());
        }

        self.last_deps = deps.to_vec();
        value
    }

    // == Deps Changed ==
    /// Shallow comparison against the previous call's dependency list.
    ///
    /// Only indices of the new list are compared, so a list that is a prefix
    /// of the previous one counts as unchanged.
    fn deps_changed(&self, deps: &[D]) -> bool {
        deps.iter()
            .enumerate()
            .any(|(i, dep)| self.last_deps.get(i) != Some(dep))
    }

    // == Store ==
    /// Inserts a value, evicting the oldest entry if a new key would not fit.
    fn store(&mut self, key: String, value: T) {
        if self.capacity == 0 {
            return;
        }

        if !self.entries.contains_key(&key) {
            while self.entries.len() >= self.capacity {
                match self.order.evict_oldest() {
                    Some(oldest) => {
                        self.entries.remove(&oldest);
                        self.stats.record_eviction();
                    }
                    None => break,
                }
            }
            self.order.push(key.clone());
        }

        self.entries.insert(key, value);
        debug_assert_eq!(self.order.len(), self.entries.len());
        debug_assert!(self
            .order
            .peek_oldest()
            .is_some_and(|oldest| self.entries.contains_key(oldest)));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Contains ==
    /// Checks whether a value is cached for `deps`.
    pub fn contains(&self, deps: &[D]) -> bool {
        dependency_key(deps).is_some_and(|k| self.entries.contains_key(&k))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> MemoStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of cached values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Utility Functions ==
/// Serializes a dependency list to its JSON text.
///
/// Returns None when the list cannot be serialized; such values are computed
/// but never cached.
pub fn dependency_key<D: Serialize>(deps: &[D]) -> Option<String> {
    match serde_json::to_string(deps) {
        Ok(key) => Some(key),
        Err(err) => {
            warn!("Dependency list is not serializable, skipping memo: {}", err);
            None
        }
    }
}
