//! Field/case extraction.
//!
//! Normalizes a record's member list or a sum type's case list into
//! [`Field`]s. Each field is classified on the way out.
//!
//! # Records
//!
//! - Static members are skipped.
//! - A member may carry several bindings. A binding without annotation
//!   and without initializer borrows the annotation of the next binding
//!   in the same member that has one (`var a, b: Int` types both).
//! - A grouped binding (`let (x, y): (A, B)`) pairs its elements with the
//!   elements of a tuple annotation of the same arity; otherwise every
//!   element is left unannotated.
//! - Positional bindings are named `index_<position>`.
//!
//! # Sum types
//!
//! Every payload slot becomes a field named by its label, or
//! `index_<position>` when unlabeled.

use kiln_ir::{
    positional_name, Binding, BindingPattern, Case, Field, Literal, MemberDecl, PayloadDecl,
    RecordDecl, SumDecl, TypeRef,
};

use crate::classify;

/// Extract the fields of a record, in declaration order.
///
/// Constants with literal defaults are included (with
/// `required_at_runtime == false`); the analyzer decides what to do with them.
pub fn extract_record(decl: &RecordDecl) -> Vec<Field> {
    let mut out = Vec::new();
    for member in &decl.members {
        if member.is_static {
            tracing::debug!(record = %decl.name, "skipping static member");
            continue;
        }
        extract_member(member, &mut out);
    }
    out
}

/// Extract the cases of a sum type, in declaration order.
pub fn extract_cases(decl: &SumDecl) -> Vec<Case> {
    decl.cases
        .iter()
        .map(|case| Case {
            name: case.name.clone(),
            fields: case
                .payload
                .iter()
                .enumerate()
                .map(|(position, payload)| payload_field(position, payload))
                .collect(),
        })
        .collect()
}

fn payload_field(position: usize, payload: &PayloadDecl) -> Field {
    let (name, label_present) = match &payload.label {
        Some(label) => (label.clone(), true),
        None => (positional_name(position), false),
    };
    Field {
        name,
        position,
        shape: classify(payload.ty.as_ref()),
        ty: payload.ty.clone(),
        required_at_runtime: true,
        label_present,
        buildable: payload.buildable,
        is_constant: false,
        default: None,
    }
}

fn extract_member(member: &MemberDecl, out: &mut Vec<Field>) {
    let types = propagated_types(&member.bindings);
    for (binding, ty) in member.bindings.iter().zip(types) {
        bind_pattern(
            &binding.pattern,
            ty.as_ref(),
            binding.default.as_ref(),
            member,
            out,
        );
    }
}

/// Resolve each binding's effective annotation.
///
/// Walks right to left so an unannotated, uninitialized binding picks up
/// the nearest annotation that follows it.
fn propagated_types(bindings: &[Binding]) -> Vec<Option<TypeRef>> {
    let mut types = vec![None; bindings.len()];
    let mut trailing: Option<&TypeRef> = None;
    for (i, binding) in bindings.iter().enumerate().rev() {
        match (&binding.ty, &binding.default) {
            (Some(ty), _) => {
                trailing = Some(ty);
                types[i] = Some(ty.clone());
            }
            (None, None) => types[i] = trailing.cloned(),
            (None, Some(_)) => {
                trailing = None;
            }
        }
    }
    types
}

fn bind_pattern(
    pattern: &BindingPattern,
    ty: Option<&TypeRef>,
    default: Option<&Literal>,
    member: &MemberDecl,
    out: &mut Vec<Field>,
) {
    match pattern {
        BindingPattern::Name(name) => {
            out.push(member_field(name.clone(), true, ty, default, member, out.len()));
        }
        BindingPattern::Positional => {
            let position = out.len();
            out.push(member_field(
                positional_name(position),
                false,
                ty,
                default,
                member,
                position,
            ));
        }
        BindingPattern::Tuple(elems) => {
            let elem_types = ty
                .and_then(TypeRef::tuple_elems)
                .filter(|types| types.len() == elems.len());
            for (i, elem) in elems.iter().enumerate() {
                let elem_ty = elem_types.map(|types| &types[i]);
                bind_pattern(elem, elem_ty, None, member, out);
            }
        }
        BindingPattern::Wildcard => {}
    }
}

fn member_field(
    name: String,
    label_present: bool,
    ty: Option<&TypeRef>,
    default: Option<&Literal>,
    member: &MemberDecl,
    position: usize,
) -> Field {
    let fixed = member.is_constant && default.is_some();
    Field {
        name,
        position,
        shape: classify(ty),
        ty: ty.cloned(),
        required_at_runtime: !fixed,
        label_present,
        buildable: member.buildable,
        is_constant: member.is_constant,
        default: default.cloned(),
    }
}
