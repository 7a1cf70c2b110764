//! Property slots: the per-field storage inside a generated builder.
//!
//! Every slot remembers the field it stands for so a failed read can name
//! it in [`BuildError::FieldNotSet`].

mod container;
mod nested;

pub use container::{ListSlot, MapSlot, SetSlot};
pub use nested::{NestedSlot, NestedState};

use crate::BuildError;

/// A required field with no container semantics.
#[derive(Clone, Debug)]
pub struct ScalarSlot<T> {
    field: &'static str,
    value: Option<T>,
}

impl<T> ScalarSlot<T> {
    pub const fn new(field: &'static str) -> Self {
        ScalarSlot { field, value: None }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Replace the stored value.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl<T: Clone> ScalarSlot<T> {
    /// The stored value, or `FieldNotSet` if it was never set.
    pub fn build(&self) -> Result<T, BuildError> {
        self.value
            .clone()
            .ok_or(BuildError::FieldNotSet { field: self.field })
    }
}

/// An `Option`-typed field. Never set reads as `None`.
#[derive(Clone, Debug)]
pub struct OptionalSlot<T> {
    field: &'static str,
    value: Option<T>,
}

impl<T> OptionalSlot<T> {
    pub const fn new(field: &'static str) -> Self {
        OptionalSlot { field, value: None }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T: Clone> OptionalSlot<T> {
    pub fn build(&self) -> Option<T> {
        self.value.clone()
    }
}
