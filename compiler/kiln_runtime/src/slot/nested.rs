//! Slot for a field whose type has its own generated builder.
//!
//! The slot holds at most one of a finished value or a sub-builder. Asking
//! for the sub-builder converts a held value into one; setting a value
//! discards a held sub-builder.

use std::fmt;
use std::mem;

use crate::{BuildError, Buildable, Builder};

/// What a [`NestedSlot`] currently holds.
pub enum NestedState<T: Buildable> {
    Empty,
    Value(T),
    Builder(T::Builder),
}

impl<T: Buildable> NestedState<T> {
    pub fn name(&self) -> &'static str {
        match self {
            NestedState::Empty => "empty",
            NestedState::Value(_) => "value",
            NestedState::Builder(_) => "builder",
        }
    }
}

impl<T: Buildable> fmt::Debug for NestedState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct NestedSlot<T: Buildable> {
    field: &'static str,
    state: NestedState<T>,
}

impl<T: Buildable> NestedSlot<T> {
    pub const fn new(field: &'static str) -> Self {
        NestedSlot {
            field,
            state: NestedState::Empty,
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn state(&self) -> &NestedState<T> {
        &self.state
    }

    /// Store a finished value, discarding any sub-builder.
    pub fn set(&mut self, value: T) {
        self.state = NestedState::Value(value);
    }

    /// Store an optional value; `None` empties the slot.
    pub fn set_optional(&mut self, value: Option<T>) {
        self.state = match value {
            Some(value) => NestedState::Value(value),
            None => NestedState::Empty,
        };
    }

    /// Store a sub-builder, discarding any finished value.
    pub fn set_builder(&mut self, builder: T::Builder) {
        self.state = NestedState::Builder(builder);
    }

    pub fn clear(&mut self) {
        self.state = NestedState::Empty;
    }

    /// The sub-builder, created on first use.
    ///
    /// A held value is converted with [`Buildable::into_builder`]; an empty
    /// slot gets a fresh builder. Later calls return the same sub-builder.
    pub fn builder_mut(&mut self) -> &mut T::Builder {
        if let NestedState::Builder(ref mut builder) = self.state {
            return builder;
        }
        let builder = match mem::replace(&mut self.state, NestedState::Empty) {
            NestedState::Value(value) => {
                tracing::trace!(field = self.field, "converting nested value to sub-builder");
                value.into_builder()
            }
            NestedState::Empty | NestedState::Builder(_) => T::Builder::default(),
        };
        self.state = NestedState::Builder(builder);
        self.builder_mut()
    }
}

impl<T: Buildable + Clone> NestedSlot<T> {
    /// Read a required nested field.
    ///
    /// A sub-builder is built on the spot; its failure is wrapped in
    /// [`BuildError::Nested`] naming this field.
    pub fn build_required(&self) -> Result<T, BuildError> {
        self.build_optional()?
            .ok_or(BuildError::FieldNotSet { field: self.field })
    }

    /// Read an optional nested field. An empty slot reads as `None`.
    pub fn build_optional(&self) -> Result<Option<T>, BuildError> {
        match &self.state {
            NestedState::Empty => Ok(None),
            NestedState::Value(value) => Ok(Some(value.clone())),
            NestedState::Builder(builder) => builder
                .build()
                .map(Some)
                .map_err(|source| BuildError::nested(self.field, source)),
        }
    }
}

impl<T: Buildable> fmt::Debug for NestedSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedSlot")
            .field("field", &self.field)
            .field("state", &self.state)
            .finish()
    }
}
