//! Counted multiset over hashable keys.
//!
//! Backs every term statistic in the crate: per-document term counts and the
//! corpus-wide document-frequency table. Counts only accumulate; nothing here
//! removes or overwrites an entry.
//!
//! Key iteration follows the hash map's bucket order. The hasher is unseeded,
//! so the order is reproducible for a fixed insertion sequence, but it is not
//! sorted and callers must not rely on any particular arrangement.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// A multiset: a set whose elements carry an occurrence count.
///
/// `count_all` is maintained incrementally so that term-frequency math never
/// walks the map. Invariant: `count_all() == sum of count(k) over all keys`,
/// and every stored count is at least 1.
#[derive(Debug, Clone)]
pub struct Multiset<T> {
    counts: FxHashMap<T, usize>,
    total: usize,
}

impl<T: Eq + Hash> Multiset<T> {
    /// Creates an empty multiset.
    pub fn new() -> Self {
        Multiset {
            counts: FxHashMap::default(),
            total: 0,
        }
    }

    /// Records one occurrence of `item`.
    pub fn add(&mut self, item: T) {
        self.total += 1;
        *self.counts.entry(item).or_insert(0) += 1;
    }

    /// Returns true if `item` has been added at least once.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(item)
    }

    /// Occurrence count for `item`; 0 if it was never added.
    pub fn count<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Total number of occurrences across all keys.
    pub fn count_all(&self) -> usize {
        self.total
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over the distinct keys, each yielded exactly once.
    pub fn keys(&self) -> impl Iterator<Item = &T> {
        self.counts.keys()
    }

    /// Distinct keys present in `self` or `other`, each yielded exactly once.
    ///
    /// Keys of `self` come first in `self`'s iteration order, followed by the
    /// keys that appear only in `other`. Counts play no part here; this is a
    /// membership union.
    pub fn union_keys<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a T> {
        self.keys()
            .chain(other.keys().filter(move |key| !self.contains(*key)))
    }
}

impl<T: Eq + Hash> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = Multiset::new();
        multiset.extend(iter);
        multiset
    }
}
