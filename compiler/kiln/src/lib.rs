//! Kiln: generated builders for structs and enums.
//!
//! `#[derive(Builder)]` on a struct produces `FooBuilder`, a mutable
//! accumulator with one setter per field and a `build()` that assembles a
//! `Foo` or reports the first required field that was never set.
//!
//! ```
//! use kiln::Builder;
//!
//! #[derive(Builder, Debug, Clone, PartialEq)]
//! pub struct Server {
//!     host: String,
//!     aliases: Vec<String>,
//!     port: Option<u16>,
//! }
//!
//! let server = ServerBuilder::new()
//!     .host("example.org".to_string())
//!     .push_aliases("www.example.org".to_string())
//!     .build()?;
//! assert_eq!(server.aliases, ["www.example.org"]);
//! assert_eq!(server.port, None);
//!
//! let err = ServerBuilder::new().port(Some(80)).build().unwrap_err();
//! assert_eq!(err.to_string(), "field `host` was never set");
//! # Ok::<(), kiln::BuildError>(())
//! ```
//!
//! Field shapes decide the mutators: lists get `push_*`/`extend_*`, maps
//! `insert_*`/`merge_*`, sets `insert_*`/`union_*`, and `Option` fields
//! are never required. `#[builder(nested)]` fields whose type derives
//! `Builder` as well can be edited in place through `field_builder()`.
//!
//! On an enum, the builder builds one case at a time: each case has its
//! own case builder, reached through an accessor named after the case.
//! Switching to another case discards the pending one.
//!
//! The rest of this crate is the runtime the generated code calls into.

pub use kiln_macros::Builder;
pub use kiln_runtime::{
    BuildError, Buildable, Builder, CaseOf, CaseSet, ListCollection, ListSlot, MapCollection,
    MapSlot, NestedSlot, NestedState, OptionalSlot, ScalarSlot, Selector, SetCollection, SetSlot,
};
