//! Read-only collection views returned by deck queries.
//!
//! None of these types hand out mutable access to their contents. The
//! `insert`, `remove` and `clear` methods exist for callers that treat every
//! collection as mutable; they always fail with [`MutationError::Unsupported`].

use alloc::collections::{BTreeMap, BTreeSet, btree_map, btree_set};

use crate::error::{Mutation, MutationError};

const fn unsupported<T>(mutation: Mutation) -> Result<T, MutationError> {
    Err(MutationError::Unsupported(mutation))
}

/// A sorted set that cannot be modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImmutableSet<T: Ord> {
    items: BTreeSet<T>,
}

impl<T: Ord> ImmutableSet<T> {
    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether the set contains `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Returns the smallest element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the largest element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a borrowed view of the underlying set.
    #[must_use]
    pub const fn as_set(&self) -> &BTreeSet<T> {
        &self.items
    }

    /// Always fails: the set is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unsupported`] with [`Mutation::Insert`].
    pub fn insert(&self, _value: T) -> Result<bool, MutationError> {
        unsupported(Mutation::Insert)
    }

    /// Always fails: the set is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unsupported`] with [`Mutation::Remove`].
    pub const fn remove(&self, _value: &T) -> Result<bool, MutationError> {
        unsupported(Mutation::Remove)
    }

    /// Always fails: the set is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unsupported`] with [`Mutation::Clear`].
    pub const fn clear(&self) -> Result<(), MutationError> {
        unsupported(Mutation::Clear)
    }
}

impl<T: Ord> Default for ImmutableSet<T> {
    fn default() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }
}

impl<T: Ord> From<BTreeSet<T>> for ImmutableSet<T> {
    fn from(items: BTreeSet<T>) -> Self {
        Self { items }
    }
}

impl<T: Ord> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a ImmutableSet<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Ord> IntoIterator for ImmutableSet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A sorted map that cannot be modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImmutableMap<K: Ord, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Ord, V> ImmutableMap<K, V> {
    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns whether the map has an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> btree_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterates over the values in ascending key order.
    pub fn values(&self) -> btree_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Always fails: the map is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unsupported`] with [`Mutation::Insert`].
    pub fn insert(&self, _key: K, _value: V) -> Result<Option<V>, MutationError> {
        unsupported(Mutation::Insert)
    }

    /// Always fails: the map is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unsupported`] with [`Mutation::Remove`].
    pub const fn remove(&self, _key: &K) -> Result<Option<V>, MutationError> {
        unsupported(Mutation::Remove)
    }

    /// Always fails: the map is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unsupported`] with [`Mutation::Clear`].
    pub const fn clear(&self) -> Result<(), MutationError> {
        unsupported(Mutation::Clear)
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for ImmutableMap<K, V> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self { entries }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a ImmutableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// An immutable multiset counting occurrences of each distinct value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bag<T: Ord> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord> Bag<T> {
    /// Builds a bag from `(value, count)` pairs. Counts for repeated values
    /// are summed; zero counts are dropped.
    #[must_use]
    pub fn from_counts<I: IntoIterator<Item = (T, usize)>>(pairs: I) -> Self {
        let mut counts = BTreeMap::new();
        for (value, count) in pairs {
            if count > 0 {
                *counts.entry(value).or_insert(0) += count;
            }
        }
        Self { counts }
    }

    /// Returns how many times `value` occurs.
    #[must_use]
    pub fn occurrences(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Returns the total number of occurrences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(value, &count)| (value, count))
    }

    /// Always fails: the bag is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unsupported`] with [`Mutation::Insert`].
    pub fn add(&self, _value: T, _count: usize) -> Result<(), MutationError> {
        unsupported(Mutation::Insert)
    }

    /// Always fails: the bag is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unsupported`] with [`Mutation::Remove`].
    pub const fn remove(&self, _value: &T) -> Result<usize, MutationError> {
        unsupported(Mutation::Remove)
    }

    /// Always fails: the bag is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unsupported`] with [`Mutation::Clear`].
    pub const fn clear(&self) -> Result<(), MutationError> {
        unsupported(Mutation::Clear)
    }
}

impl<T: Ord> Default for Bag<T> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<T: Ord> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_counts(iter.into_iter().map(|value| (value, 1)))
    }
}
