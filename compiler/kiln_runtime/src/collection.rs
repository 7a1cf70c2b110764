//! Container abstractions behind the list, map and set slots.
//!
//! Implemented for the standard library containers. A user-defined
//! container named like a recognized one (`Set<T>`, `Dictionary<K, V>`)
//! can implement these to work with the generated mutators.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// An ordered sequence that can grow at the end.
pub trait ListCollection: Default {
    type Elem;

    fn push_elem(&mut self, elem: Self::Elem);

    fn extend_elems<I: IntoIterator<Item = Self::Elem>>(&mut self, elems: I);

    fn clear_elems(&mut self);
}

/// A keyed collection with at most one value per key.
pub trait MapCollection: Default {
    type Key;
    type Value;

    /// Insert, returning the value previously stored under `key`.
    fn insert_entry(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Remove and return the value stored under `key`.
    fn remove_entry_value(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn clear_entries(&mut self);
}

/// An unordered collection of unique elements.
pub trait SetCollection: Default {
    type Elem;

    /// Insert, returning whether the element was new.
    fn insert_elem(&mut self, elem: Self::Elem) -> bool;

    fn clear_elems(&mut self);
}

impl<T> ListCollection for Vec<T> {
    type Elem = T;

    fn push_elem(&mut self, elem: T) {
        self.push(elem);
    }

    fn extend_elems<I: IntoIterator<Item = T>>(&mut self, elems: I) {
        self.extend(elems);
    }

    fn clear_elems(&mut self) {
        self.clear();
    }
}

impl<T> ListCollection for VecDeque<T> {
    type Elem = T;

    fn push_elem(&mut self, elem: T) {
        self.push_back(elem);
    }

    fn extend_elems<I: IntoIterator<Item = T>>(&mut self, elems: I) {
        self.extend(elems);
    }

    fn clear_elems(&mut self) {
        self.clear();
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> MapCollection for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn insert_entry(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn remove_entry_value(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear_entries(&mut self) {
        self.clear();
    }
}

impl<K: Ord, V> MapCollection for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn insert_entry(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn remove_entry_value(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear_entries(&mut self) {
        self.clear();
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> SetCollection for HashSet<T, S> {
    type Elem = T;

    fn insert_elem(&mut self, elem: T) -> bool {
        self.insert(elem)
    }

    fn clear_elems(&mut self) {
        self.clear();
    }
}

impl<T: Ord> SetCollection for BTreeSet<T> {
    type Elem = T;

    fn insert_elem(&mut self, elem: T) -> bool {
        self.insert(elem)
    }

    fn clear_elems(&mut self) {
        self.clear();
    }
}
