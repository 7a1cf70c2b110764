//! Type references as written at a declaration site.
//!
//! `TypeRef` preserves the syntactic structure of a field's type annotation
//! before anything resolves it. Equality is structural: two references are
//! equal only when they are spelled the same way, so `Vec<u8>` and
//! `std::vec::Vec<u8>` are different references.
//!
//! # Sugar
//!
//! Three sugared forms exist for hosts whose syntax has them:
//! - `[T]` list sugar → [`TypeRef::List`]
//! - `[K: V]` map sugar → [`TypeRef::Map`]
//! - `T?` optional sugar → [`TypeRef::Optional`]
//!
//! When rendered as Rust (via `Display`) they expand to the standard
//! library types they denote.

use std::fmt;

/// A type reference, preserving full structure.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    /// A (possibly generic) path: `String`, `Vec<u8>`, `std::collections::HashMap<K, V>`.
    Path(TypePath),

    /// List sugar: `[T]`
    List(Box<TypeRef>),

    /// Map sugar: `[K: V]`
    Map {
        /// Key type.
        key: Box<TypeRef>,
        /// Value type.
        value: Box<TypeRef>,
    },

    /// Optional sugar: `T?`
    Optional(Box<TypeRef>),

    /// A tuple type: `(T, U)` or unit `()`
    Tuple(Vec<TypeRef>),

    /// A reference type: `&'a T`, `&mut T`
    Reference {
        /// Lifetime name without the leading tick.
        lifetime: Option<String>,
        /// Whether this is `&mut`.
        mutable: bool,
        /// Referenced type.
        inner: Box<TypeRef>,
    },

    /// A fixed-size array: `[T; N]`
    Array {
        /// Element type.
        elem: Box<TypeRef>,
        /// Length expression, kept as written.
        len: String,
    },

    /// Any other type, kept as its source text.
    ///
    /// Hosts lower types they cannot represent structurally (function
    /// pointers, trait objects, qualified paths) into this variant.
    Verbatim(String),
}

/// A path type: optional leading `::` followed by segments.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypePath {
    /// Whether the path starts with `::`.
    pub leading_colon: bool,
    /// Path segments, outermost first.
    pub segments: Vec<PathSegment>,
}

/// One segment of a path, with its generic type arguments.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PathSegment {
    /// Segment identifier.
    pub name: String,
    /// Generic type arguments, empty if non-generic.
    pub args: Vec<TypeRef>,
}

impl PathSegment {
    /// Create a segment without type arguments.
    pub fn new(name: impl Into<String>) -> Self {
        PathSegment {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a segment with type arguments.
    pub fn with_args(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        PathSegment {
            name: name.into(),
            args,
        }
    }
}

impl TypeRef {
    /// Create a single-segment path type without arguments.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Path(TypePath {
            leading_colon: false,
            segments: vec![PathSegment::new(name)],
        })
    }

    /// Create a single-segment path type with arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Path(TypePath {
            leading_colon: false,
            segments: vec![PathSegment::with_args(name, args)],
        })
    }

    /// Create a multi-segment path type. Arguments attach to the last segment.
    pub fn path<'a>(segments: impl IntoIterator<Item = &'a str>, args: Vec<TypeRef>) -> Self {
        let mut segments: Vec<PathSegment> = segments.into_iter().map(PathSegment::new).collect();
        if let Some(last) = segments.last_mut() {
            last.args = args;
        }
        TypeRef::Path(TypePath {
            leading_colon: false,
            segments,
        })
    }

    /// Create list sugar `[elem]`.
    pub fn list(elem: TypeRef) -> Self {
        TypeRef::List(Box::new(elem))
    }

    /// Create map sugar `[key: value]`.
    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        TypeRef::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Create optional sugar `inner?`.
    pub fn optional(inner: TypeRef) -> Self {
        TypeRef::Optional(Box::new(inner))
    }

    /// Create a tuple type.
    pub fn tuple(elems: Vec<TypeRef>) -> Self {
        TypeRef::Tuple(elems)
    }

    /// Keep a type as raw source text.
    pub fn verbatim(text: impl Into<String>) -> Self {
        TypeRef::Verbatim(text.into())
    }

    /// The last path segment, if this is a path type.
    pub fn last_segment(&self) -> Option<&PathSegment> {
        match self {
            TypeRef::Path(path) => path.segments.last(),
            _ => None,
        }
    }

    /// Tuple element types, if this is a tuple type.
    pub fn tuple_elems(&self) -> Option<&[TypeRef]> {
        match self {
            TypeRef::Tuple(elems) => Some(elems),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Path(path) => write!(f, "{path}"),
            TypeRef::List(elem) => write!(f, "::std::vec::Vec<{elem}>"),
            TypeRef::Map { key, value } => {
                write!(f, "::std::collections::HashMap<{key}, {value}>")
            }
            TypeRef::Optional(inner) => write!(f, "::core::option::Option<{inner}>"),
            TypeRef::Tuple(elems) => {
                f.write_str("(")?;
                write_list(f, elems)?;
                if elems.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            TypeRef::Reference {
                lifetime,
                mutable,
                inner,
            } => {
                f.write_str("&")?;
                if let Some(lifetime) = lifetime {
                    write!(f, "'{lifetime} ")?;
                }
                if *mutable {
                    f.write_str("mut ")?;
                }
                write!(f, "{inner}")
            }
            TypeRef::Array { elem, len } => write!(f, "[{elem}; {len}]"),
            TypeRef::Verbatim(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leading_colon {
            f.write_str("::")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("::")?;
            }
            f.write_str(&segment.name)?;
            if !segment.args.is_empty() {
                f.write_str("<")?;
                write_list(f, &segment.args)?;
                f.write_str(">")?;
            }
        }
        Ok(())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[TypeRef]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
