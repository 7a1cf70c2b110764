//! Extracted and validated builder model.

use crate::{Literal, TypeRef};

/// Structural category of a field's type.
///
/// Decides which slot kind and which mutators the generator emits.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Shape {
    /// No type information was declared.
    Unknown,
    /// An ordered sequence.
    List { elem: TypeRef },
    /// A keyed collection.
    Map { key: TypeRef, value: TypeRef },
    /// An unordered collection of unique elements.
    Set { elem: TypeRef },
    /// A value that may be absent.
    ///
    /// `inner` is the wrapped type; `shape` is its classification, one
    /// level deep only.
    Optional { inner: TypeRef, shape: Box<Shape> },
    /// Anything else: a single required value.
    Opaque(TypeRef),
}

impl Shape {
    /// List, Map and Set shapes build to an empty container when unset.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Shape::List { .. } | Shape::Map { .. } | Shape::Set { .. }
        )
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Shape::Optional { .. })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Shape::Unknown)
    }

    /// Short lowercase name for logs and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Unknown => "unknown",
            Shape::List { .. } => "list",
            Shape::Map { .. } => "map",
            Shape::Set { .. } => "set",
            Shape::Optional { .. } => "optional",
            Shape::Opaque(_) => "opaque",
        }
    }
}

/// One buildable unit of state: a record field or a case payload slot.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    /// Declared label, or the synthesized positional name.
    pub name: String,
    /// Position within the owning record or case.
    pub position: usize,
    /// Declared type, `None` when the shape is `Unknown`.
    pub ty: Option<TypeRef>,
    pub shape: Shape,
    /// False only for constants with a literal default; those never get a slot.
    pub required_at_runtime: bool,
    /// Whether the field had an explicit name in the declaration.
    pub label_present: bool,
    /// Whether the declared type is itself buildable.
    pub buildable: bool,
    pub is_constant: bool,
    pub default: Option<Literal>,
}

/// One case of a sum type and its payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Case {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Case {
    pub fn has_payload(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// A record field fixed at declaration time.
///
/// Not builder-managed; the from-builder constructor initializes it from
/// `value` and the to-builder conversion ignores it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstantField {
    pub name: String,
    pub position: usize,
    pub label_present: bool,
    pub value: Literal,
}

/// A validated record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordModel {
    pub name: String,
    /// Builder-managed fields, in declaration order.
    pub fields: Vec<Field>,
    pub constants: Vec<ConstantField>,
}

/// A validated sum type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SumModel {
    pub name: String,
    pub cases: Vec<Case>,
}

impl SumModel {
    /// Whether any case carries a payload.
    pub fn has_payload(&self) -> bool {
        self.cases.iter().any(Case::has_payload)
    }
}

/// The analyzer's validated output; the generator's only input.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValidModel {
    Record(RecordModel),
    Sum(SumModel),
}

impl ValidModel {
    pub fn name(&self) -> &str {
        match self {
            ValidModel::Record(record) => &record.name,
            ValidModel::Sum(sum) => &sum.name,
        }
    }
}
