//! Type shape classifier.
//!
//! Maps a declared type reference to a [`Shape`]. Recognition is purely
//! syntactic: container names are matched on the last path segment with
//! the expected number of type arguments, and nothing is resolved.

use kiln_ir::{Shape, TypeRef};

/// Generic names recognized as lists (arity 1).
const LIST_NAMES: &[&str] = &["Array", "Vec", "VecDeque"];

/// Generic names recognized as maps (arity 2).
const MAP_NAMES: &[&str] = &["Dictionary", "HashMap", "BTreeMap"];

/// Generic names recognized as sets (arity 1).
const SET_NAMES: &[&str] = &["Set", "HashSet", "BTreeSet"];

/// Generic names recognized as optional wrappers (arity 1).
const OPTIONAL_NAMES: &[&str] = &["Optional", "Option"];

/// How deep into optional wrappers the classifier currently is.
///
/// Optional types are unwrapped one level only; an optional directly
/// inside another optional is classified as opaque.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Level {
    Outer,
    Inner,
}

/// Classify a field's declared type. `None` (no annotation) is `Unknown`.
pub fn classify(ty: Option<&TypeRef>) -> Shape {
    let shape = match ty {
        None => Shape::Unknown,
        Some(ty) => classify_at(ty, Level::Outer),
    };
    tracing::trace!(shape = shape.name(), "classified type");
    shape
}

fn classify_at(ty: &TypeRef, level: Level) -> Shape {
    match ty {
        TypeRef::List(elem) => Shape::List {
            elem: (**elem).clone(),
        },
        TypeRef::Map { key, value } => Shape::Map {
            key: (**key).clone(),
            value: (**value).clone(),
        },
        TypeRef::Optional(inner) => optional(ty, inner, level),
        TypeRef::Path(_) => classify_path(ty, level),
        TypeRef::Tuple(_)
        | TypeRef::Reference { .. }
        | TypeRef::Array { .. }
        | TypeRef::Verbatim(_) => Shape::Opaque(ty.clone()),
    }
}

fn classify_path(ty: &TypeRef, level: Level) -> Shape {
    let Some(segment) = ty.last_segment() else {
        return Shape::Opaque(ty.clone());
    };
    let name = segment.name.as_str();
    match segment.args.as_slice() {
        [elem] if LIST_NAMES.contains(&name) => Shape::List { elem: elem.clone() },
        [key, value] if MAP_NAMES.contains(&name) => Shape::Map {
            key: key.clone(),
            value: value.clone(),
        },
        [elem] if SET_NAMES.contains(&name) => Shape::Set { elem: elem.clone() },
        [inner] if OPTIONAL_NAMES.contains(&name) => optional(ty, inner, level),
        _ => Shape::Opaque(ty.clone()),
    }
}

fn optional(ty: &TypeRef, inner: &TypeRef, level: Level) -> Shape {
    match level {
        Level::Outer => Shape::Optional {
            inner: inner.clone(),
            shape: Box::new(classify_at(inner, Level::Inner)),
        },
        Level::Inner => Shape::Opaque(ty.clone()),
    }
}

#[cfg(test)]
mod tests;
