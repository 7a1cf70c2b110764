//! The builder declaration tree.
//!
//! A [`BuilderPlan`] says *what* a builder looks like: its slots, its
//! mutators, how `build()` assembles the target and how a finished value
//! is forwarded back into a builder. It carries no syntax; an emitter
//! walks it and prints code.

use kiln_ir::{Literal, TypeRef};

/// Generated builder for one declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuilderPlan {
    Record(RecordBuilder),
    Sum(SumBuilder),
}

impl BuilderPlan {
    /// Name of the type being built.
    pub fn target(&self) -> &str {
        match self {
            BuilderPlan::Record(record) => record.target.type_name(),
            BuilderPlan::Sum(sum) => &sum.target,
        }
    }

    /// Name of the top-level builder type.
    pub fn builder_name(&self) -> &str {
        match self {
            BuilderPlan::Record(record) => &record.builder_name,
            BuilderPlan::Sum(sum) => &sum.builder_name,
        }
    }
}

/// What a record builder's `build()` produces.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Target {
    /// The record type itself.
    Struct { name: String },
    /// One case of a sum type.
    Case { sum: String, case: String },
}

impl Target {
    /// The Rust type produced, which for a case is the sum type.
    pub fn type_name(&self) -> &str {
        match self {
            Target::Struct { name } => name,
            Target::Case { sum, .. } => sum,
        }
    }
}

/// How a field is addressed when constructing or destructuring the target.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Member {
    /// `target.name`
    Named(String),
    /// `target.0`
    Index(usize),
}

/// Builder for a record, or for one case of a sum type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordBuilder {
    pub target: Target,
    pub builder_name: String,
    /// One slot per builder-managed field, in declaration order.
    pub slots: Vec<Slot>,
    /// Public mutators, grouped by slot in declaration order.
    pub mutators: Vec<Mutator>,
    /// From-builder constructor: one initializer per target member, in
    /// declaration order. Fallible reads run in this order, so the first
    /// missing field reported is the first one declared.
    pub inits: Vec<FieldInit>,
    /// To-builder conversion: one forward per slot. Constants are absent.
    pub forwards: Vec<Forward>,
}

impl RecordBuilder {
    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.name == name)
    }

    pub fn mutator(&self, name: &str) -> Option<&Mutator> {
        self.mutators.iter().find(|mutator| mutator.name == name)
    }

    /// Whether the target has no members at all (`struct Unit;`, `Case`).
    pub fn is_unit(&self) -> bool {
        self.inits.is_empty()
    }
}

/// Per-field storage in a generated builder.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Slot {
    /// Field name; also the builder's field identifier and the name
    /// reported by `FieldNotSet`.
    pub name: String,
    pub member: Member,
    pub kind: PropertySlotKind,
}

/// Which runtime slot backs a field.
///
/// Decided from the field's shape and its `buildable` marker.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PropertySlotKind {
    /// `ScalarSlot<ty>`
    Scalar { ty: TypeRef },
    /// `ListSlot<collection>`
    List { collection: TypeRef, elem: TypeRef },
    /// `MapSlot<collection>`
    Map {
        collection: TypeRef,
        key: TypeRef,
        value: TypeRef,
    },
    /// `SetSlot<collection>`
    Set { collection: TypeRef, elem: TypeRef },
    /// `OptionalSlot<inner>`
    Optional { inner: TypeRef },
    /// `NestedSlot<ty>`; `optional` fields hold `Option<ty>`.
    NestedBuildable { ty: TypeRef, optional: bool },
}

impl PropertySlotKind {
    /// How the from-builder constructor reads this slot.
    pub fn read_mode(&self) -> ReadMode {
        match self {
            PropertySlotKind::List { .. }
            | PropertySlotKind::Map { .. }
            | PropertySlotKind::Set { .. }
            | PropertySlotKind::Optional { .. } => ReadMode::Total,
            PropertySlotKind::Scalar { .. } | PropertySlotKind::NestedBuildable { .. } => {
                ReadMode::Fallible
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PropertySlotKind::Scalar { .. } => "scalar",
            PropertySlotKind::List { .. } => "list",
            PropertySlotKind::Map { .. } => "map",
            PropertySlotKind::Set { .. } => "set",
            PropertySlotKind::Optional { .. } => "optional",
            PropertySlotKind::NestedBuildable { .. } => "nested",
        }
    }
}

/// Whether reading a slot can fail.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ReadMode {
    /// Always yields a value (empty container, `None`).
    Total,
    /// Yields `Result<_, BuildError>`.
    Fallible,
}

/// One member initializer of the from-builder constructor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldInit {
    pub member: Member,
    pub source: InitSource,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum InitSource {
    /// Read the named slot.
    Slot { slot: String, read: ReadMode },
    /// A constant fixed at declaration time.
    Constant(Literal),
}

/// One step of the to-builder conversion: pass a member of the finished
/// value to a public setter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Forward {
    pub member: Member,
    /// Slot name; also the local binding when destructuring a case.
    pub slot: String,
    pub setter: String,
}

/// A public mutator method on a builder.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Mutator {
    pub name: String,
    pub slot: String,
    pub op: MutatorOp,
}

/// What a mutator does to its slot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MutatorOp {
    /// Replace the value (every shape).
    Set,
    /// Append one list element.
    Push,
    /// Append a sequence of list elements.
    Extend,
    /// Empty a container.
    Clear,
    /// Insert one map entry.
    InsertEntry,
    /// Merge another map with a conflict resolver.
    Merge,
    /// Insert one set element.
    InsertElem,
    /// Add every element of another set.
    Union,
    /// Sub-builder view of a nested field.
    SubBuilder,
    /// Replace a nested field with a sub-builder.
    SetSubBuilder,
}

/// Builder for a sum type: one case builder per case plus a selector.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SumBuilder {
    pub target: String,
    pub builder_name: String,
    /// The closed enum of case builders held by the selector.
    pub selector_name: String,
    pub cases: Vec<CaseBuilder>,
}

impl SumBuilder {
    pub fn case(&self, name: &str) -> Option<&CaseBuilder> {
        self.cases.iter().find(|case| case.case == name)
    }
}

/// One case of a sum-type builder.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CaseBuilder {
    /// Case name, also the selector variant name.
    pub case: String,
    /// Accessor returning the case builder, selecting it if needed.
    pub accessor: String,
    /// Mutator re-tagging the selector with a supplied case builder.
    pub replacer: String,
    /// The record machinery applied to the case's payload.
    pub builder: RecordBuilder,
}
