//! Record path: one slot per field, a from-builder constructor reading the
//! slots in declaration order, and a to-builder conversion feeding each
//! field back through its setter.

use kiln_ir::{ConstantField, Field, RecordModel};

use crate::plan::{FieldInit, Forward, InitSource, Member, MutatorOp, RecordBuilder, Target};
use crate::slot::{mutators_for, slot_for};
use crate::GenConfig;

pub(crate) fn record_builder(model: &RecordModel, config: &GenConfig) -> RecordBuilder {
    fields_builder(
        Target::Struct {
            name: model.name.clone(),
        },
        config.builder_name(&model.name),
        &model.fields,
        &model.constants,
    )
}

/// The record machinery over any field list. Also used per sum case.
pub(crate) fn fields_builder(
    target: Target,
    builder_name: String,
    fields: &[Field],
    constants: &[ConstantField],
) -> RecordBuilder {
    let slots: Vec<_> = fields.iter().map(slot_for).collect();
    let mutators: Vec<_> = slots.iter().flat_map(mutators_for).collect();

    let mut ordered: Vec<(usize, FieldInit)> = slots
        .iter()
        .zip(fields)
        .map(|(slot, field)| {
            let init = FieldInit {
                member: slot.member.clone(),
                source: InitSource::Slot {
                    slot: slot.name.clone(),
                    read: slot.kind.read_mode(),
                },
            };
            (field.position, init)
        })
        .collect();
    ordered.extend(constants.iter().map(|constant| {
        let member = if constant.label_present {
            Member::Named(constant.name.clone())
        } else {
            Member::Index(constant.position)
        };
        let init = FieldInit {
            member,
            source: InitSource::Constant(constant.value.clone()),
        };
        (constant.position, init)
    }));
    // Stable: slots and constants never share a position.
    ordered.sort_by_key(|(position, _)| *position);
    let inits = ordered.into_iter().map(|(_, init)| init).collect();

    let forwards = slots
        .iter()
        .filter_map(|slot| {
            let setter = mutators
                .iter()
                .find(|m| m.slot == slot.name && m.op == MutatorOp::Set)?;
            Some(Forward {
                member: slot.member.clone(),
                slot: slot.name.clone(),
                setter: setter.name.clone(),
            })
        })
        .collect();

    tracing::trace!(
        builder = %builder_name,
        slots = slots.len(),
        mutators = mutators.len(),
        constants = constants.len(),
        "planned record builder"
    );

    RecordBuilder {
        target,
        builder_name,
        slots,
        mutators,
        inits,
        forwards,
    }
}
