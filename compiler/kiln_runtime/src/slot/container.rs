//! Slots for list, map and set fields.
//!
//! Container slots start out holding an empty container, so `build` is
//! total: a never-touched container field reads as empty.

use crate::collection::{ListCollection, MapCollection, SetCollection};

#[derive(Clone, Debug)]
pub struct ListSlot<C> {
    field: &'static str,
    items: C,
}

impl<C: ListCollection> ListSlot<C> {
    pub fn new(field: &'static str) -> Self {
        ListSlot {
            field,
            items: C::default(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Replace the whole list.
    pub fn set(&mut self, items: C) {
        self.items = items;
    }

    /// Append one element.
    pub fn push(&mut self, elem: C::Elem) {
        self.items.push_elem(elem);
    }

    /// Append every element, in order.
    pub fn extend<I: IntoIterator<Item = C::Elem>>(&mut self, elems: I) {
        self.items.extend_elems(elems);
    }

    pub fn clear(&mut self) {
        self.items.clear_elems();
    }

    pub fn get(&self) -> &C {
        &self.items
    }
}

impl<C: ListCollection + Clone> ListSlot<C> {
    pub fn build(&self) -> C {
        self.items.clone()
    }
}

#[derive(Clone, Debug)]
pub struct MapSlot<C> {
    field: &'static str,
    entries: C,
}

impl<C: MapCollection> MapSlot<C> {
    pub fn new(field: &'static str) -> Self {
        MapSlot {
            field,
            entries: C::default(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Replace the whole map.
    pub fn set(&mut self, entries: C) {
        self.entries = entries;
    }

    /// Insert or overwrite one entry.
    pub fn insert(&mut self, key: C::Key, value: C::Value) {
        self.entries.insert_entry(key, value);
    }

    pub fn clear(&mut self) {
        self.entries.clear_entries();
    }

    pub fn get(&self) -> &C {
        &self.entries
    }
}

impl<C: MapCollection + Clone> MapSlot<C> {
    /// Merge `other` into the stored map.
    ///
    /// Keys only in one side are kept as is. For a key present in both,
    /// `resolve(existing, incoming)` picks the stored value. If `resolve`
    /// fails the slot is left exactly as it was.
    pub fn merge<I, F, E>(&mut self, other: I, mut resolve: F) -> Result<(), E>
    where
        I: IntoIterator<Item = (C::Key, C::Value)>,
        F: FnMut(C::Value, C::Value) -> Result<C::Value, E>,
    {
        let mut merged = self.entries.clone();
        for (key, incoming) in other {
            let value = match merged.remove_entry_value(&key) {
                Some(existing) => resolve(existing, incoming)?,
                None => incoming,
            };
            merged.insert_entry(key, value);
        }
        self.entries = merged;
        Ok(())
    }

    pub fn build(&self) -> C {
        self.entries.clone()
    }
}

#[derive(Clone, Debug)]
pub struct SetSlot<C> {
    field: &'static str,
    elems: C,
}

impl<C: SetCollection> SetSlot<C> {
    pub fn new(field: &'static str) -> Self {
        SetSlot {
            field,
            elems: C::default(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Replace the whole set.
    pub fn set(&mut self, elems: C) {
        self.elems = elems;
    }

    pub fn insert(&mut self, elem: C::Elem) {
        self.elems.insert_elem(elem);
    }

    /// Add every element of `other`; duplicates collapse.
    pub fn union<I: IntoIterator<Item = C::Elem>>(&mut self, other: I) {
        for elem in other {
            self.elems.insert_elem(elem);
        }
    }

    pub fn clear(&mut self) {
        self.elems.clear_elems();
    }

    pub fn get(&self) -> &C {
        &self.elems
    }
}

impl<C: SetCollection + Clone> SetSlot<C> {
    pub fn build(&self) -> C {
        self.elems.clone()
    }
}
