//! Runtime support for Kiln-generated builders.
//!
//! Generated builders hold one property slot per field and delegate every
//! setter and every terminal read to it:
//!
//! | Slot | Unset `build()` |
//! |---|---|
//! | [`ScalarSlot`] | `Err(FieldNotSet)` |
//! | [`ListSlot`], [`MapSlot`], [`SetSlot`] | empty container |
//! | [`OptionalSlot`] | `None` |
//! | [`NestedSlot`] | `Err(FieldNotSet)` or `None`, by field shape |
//!
//! Sum-type builders additionally hold a [`Selector`], which tracks the one
//! case currently being built.
//!
//! # Concurrency
//!
//! Builders and slots carry no synchronization. A builder is meant for a
//! single construction flow; sharing one across threads requires external
//! locking by the caller.

mod collection;
mod error;
mod selector;
mod slot;
mod traits;

pub use collection::{ListCollection, MapCollection, SetCollection};
pub use error::BuildError;
pub use selector::{CaseOf, CaseSet, Selector};
pub use slot::{ListSlot, MapSlot, NestedSlot, NestedState, OptionalSlot, ScalarSlot, SetSlot};
pub use traits::{Buildable, Builder};
