// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Insertion-ordered associative map.
//!
//! A map producer has to promise an order, and the order callers expect from
//! a literal like `{1 => 2, 3 => 4}` is the order the entries were written.
//! `OrderedMap` keeps its entries in a `Vec` and a hash index on the side:
//!
//! - Lookup, `contains_key`, `get_mut`: O(1) average (hash map)
//! - Insert of a new key: O(1) amortized, appended at the end
//! - Overwriting a key: O(1), keeps the original position
//! - Remove: O(n), later entries shift down and are reindexed

use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::control::Control;
use crate::control::Outcome;
use crate::control::drive;
use crate::enumerable::Enumerable;
use crate::enumerable::Shape;
use crate::error::TraversalError;

/// A hash map that remembers insertion order.
#[derive(Clone)]
pub struct OrderedMap<K: Clone + Eq + Hash, V> {
    /// Entries in insertion order.
    entries: Vec<(K, V)>,
    /// Map from key to its position in `entries`.
    index: FxHashMap<K, usize>,
}

impl<K: Clone + Eq + Hash, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K: Clone + Eq + Hash, V> OrderedMap<K, V> {
    pub fn new() -> OrderedMap<K, V> {
        return OrderedMap {
            entries: Vec::new(),
            index: FxHashMap::default(),
        };
    }

    pub fn with_capacity(capacity: usize) -> OrderedMap<K, V> {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        return OrderedMap {
            entries: Vec::with_capacity(capacity),
            index,
        };
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    /// Insert a value, returning the previous value for the key.
    ///
    /// A new key goes to the end. An existing key keeps its position and only
    /// has its value replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            let previous = std::mem::replace(&mut self.entries[position].1, value);
            return Some(previous);
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        return None;
    }

    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        return Some(&self.entries[position].1);
    }

    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        return Some(&mut self.entries[position].1);
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        return self.index.contains_key(key);
    }

    /// Position of a key in insertion order.
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        return self.index.get(key).copied();
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.index.remove(key)?;
        let (_, value) = self.entries.remove(position);
        for (key, _) in &self.entries[position..] {
            if let Some(slot) = self.index.get_mut::<K>(key) {
                *slot -= 1;
            }
        }
        return Some(value);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Iterate over `(key, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        return self.entries.iter().map(split_entry);
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        return self.entries.iter().map(|(key, _)| key);
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        return self.entries.iter().map(|(_, value)| value);
    }
}

impl<K: Clone + Eq + Hash, V> Enumerable for OrderedMap<K, V> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;
    type Error = Infallible;

    const SHAPE: Shape = Shape::Pair;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        return drive(self.iter(), callback);
    }
}

impl<K: Clone + Eq + Hash, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        return map;
    }
}

impl<K: Clone + Eq + Hash, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Clone + Eq + Hash, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        return entries.into_iter().collect();
    }
}

// Equality is by contents, like any other map: order does not matter.
impl<K: Clone + Eq + Hash, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        return self.iter().all(|(key, value)| other.get(key) == Some(value));
    }
}

impl<K: Clone + Eq + Hash, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Clone + Eq + Hash + fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_map().entries(self.iter()).finish();
    }
}

impl<'m, K: Clone + Eq + Hash, V> IntoIterator for &'m OrderedMap<K, V> {
    type Item = (&'m K, &'m V);
    type IntoIter = std::iter::Map<std::slice::Iter<'m, (K, V)>, fn(&'m (K, V)) -> (&'m K, &'m V)>;

    fn into_iter(self) -> Self::IntoIter {
        return self.entries.iter().map(split_entry as fn(&'m (K, V)) -> (&'m K, &'m V));
    }
}

fn split_entry<K, V>(entry: &(K, V)) -> (&K, &V) {
    return (&entry.0, &entry.1);
}

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for OrderedMap<K, V>
where
    K: Clone + Eq + Hash + serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        return serializer.collect_map(self.iter());
    }
}
