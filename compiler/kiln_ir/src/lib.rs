//! Kiln IR - declaration and builder model types.
//!
//! This crate contains the data structures shared by every Kiln phase:
//! - [`TypeRef`]: a type reference as written at the declaration site
//! - [`Declaration`]: the normalized input handed over by a host parser
//! - [`Field`], [`Case`], [`Shape`]: the extracted, classified model
//! - [`ValidModel`]: what the analyzer hands to the generator
//!
//! Nothing here depends on a concrete host syntax. The `kiln_macros`
//! crate lowers `syn` items into [`Declaration`]; tests build them by hand.
//!
//! Every type derives `Clone, Eq, PartialEq, Hash, Debug` so models can be
//! compared structurally in tests and cached by callers.

mod decl;
mod model;
mod naming;
mod type_ref;

pub use decl::{
    Binding, BindingPattern, CaseDecl, Declaration, Literal, MemberDecl, PayloadDecl, RecordDecl,
    SumDecl, UnsupportedDecl,
};
pub use model::{Case, ConstantField, Field, RecordModel, Shape, SumModel, ValidModel};
pub use naming::{is_positional_name, positional_name, to_snake_case, POSITIONAL_PREFIX};
pub use type_ref::{PathSegment, TypePath, TypeRef};
