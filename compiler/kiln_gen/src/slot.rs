//! Slot kinds and the mutator surface per shape.

use kiln_ir::{Field, Shape, TypeRef};

use crate::plan::{Member, Mutator, MutatorOp, PropertySlotKind, Slot};

/// Build the slot for one builder-managed field.
pub(crate) fn slot_for(field: &Field) -> Slot {
    let member = if field.label_present {
        Member::Named(field.name.clone())
    } else {
        Member::Index(field.position)
    };
    Slot {
        name: field.name.clone(),
        member,
        kind: slot_kind(field),
    }
}

/// Pick the runtime slot for a field.
///
/// The `buildable` marker only applies to opaque and optional shapes;
/// container shapes keep their container slot regardless.
pub(crate) fn slot_kind(field: &Field) -> PropertySlotKind {
    let declared = || field.ty.clone().unwrap_or_else(|| TypeRef::verbatim("_"));
    match &field.shape {
        Shape::List { elem } => PropertySlotKind::List {
            collection: declared(),
            elem: elem.clone(),
        },
        Shape::Map { key, value } => PropertySlotKind::Map {
            collection: declared(),
            key: key.clone(),
            value: value.clone(),
        },
        Shape::Set { elem } => PropertySlotKind::Set {
            collection: declared(),
            elem: elem.clone(),
        },
        Shape::Optional { inner, .. } if field.buildable => PropertySlotKind::NestedBuildable {
            ty: inner.clone(),
            optional: true,
        },
        Shape::Optional { inner, .. } => PropertySlotKind::Optional {
            inner: inner.clone(),
        },
        Shape::Opaque(ty) if field.buildable => PropertySlotKind::NestedBuildable {
            ty: ty.clone(),
            optional: false,
        },
        Shape::Opaque(ty) => PropertySlotKind::Scalar { ty: ty.clone() },
        // Rejected by analysis; only a hand-built model gets here.
        Shape::Unknown => PropertySlotKind::Scalar { ty: declared() },
    }
}

/// The public mutators for one slot, setter first.
pub(crate) fn mutators_for(slot: &Slot) -> Vec<Mutator> {
    let name = &slot.name;
    let ops: &[(MutatorOp, Option<&str>, Option<&str>)] = match &slot.kind {
        PropertySlotKind::Scalar { .. } | PropertySlotKind::Optional { .. } => {
            &[(MutatorOp::Set, None, None)]
        }
        PropertySlotKind::List { .. } => &[
            (MutatorOp::Set, None, None),
            (MutatorOp::Push, Some("push"), None),
            (MutatorOp::Extend, Some("extend"), None),
            (MutatorOp::Clear, Some("clear"), None),
        ],
        PropertySlotKind::Map { .. } => &[
            (MutatorOp::Set, None, None),
            (MutatorOp::InsertEntry, Some("insert"), None),
            (MutatorOp::Merge, Some("merge"), None),
            (MutatorOp::Clear, Some("clear"), None),
        ],
        PropertySlotKind::Set { .. } => &[
            (MutatorOp::Set, None, None),
            (MutatorOp::InsertElem, Some("insert"), None),
            (MutatorOp::Union, Some("union"), None),
            (MutatorOp::Clear, Some("clear"), None),
        ],
        PropertySlotKind::NestedBuildable { .. } => &[
            (MutatorOp::Set, None, None),
            (MutatorOp::SubBuilder, None, Some("builder")),
            (MutatorOp::SetSubBuilder, Some("set"), Some("builder")),
        ],
    };
    ops.iter()
        .map(|&(op, prefix, suffix)| Mutator {
            name: mutator_name(prefix, name, suffix),
            slot: name.clone(),
            op,
        })
        .collect()
}

fn mutator_name(prefix: Option<&str>, field: &str, suffix: Option<&str>) -> String {
    let mut out = String::with_capacity(field.len() + 16);
    if let Some(prefix) = prefix {
        out.push_str(prefix);
        out.push('_');
    }
    out.push_str(field);
    if let Some(suffix) = suffix {
        out.push('_');
        out.push_str(suffix);
    }
    out
}
