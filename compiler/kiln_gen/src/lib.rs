//! Kiln builder generator.
//!
//! Turns a [`ValidModel`] into a [`BuilderPlan`]: a syntax-free description
//! of the builder to emit. Generation performs no validation; anything it
//! is given is assumed to have passed `kiln_analysis::analyze`.
//!
//! # Records
//!
//! One slot per field, a mutator set per slot kind, a from-builder
//! constructor and a to-builder conversion. See [`RecordBuilder`].
//!
//! # Sum types
//!
//! The record machinery applied to each case's payload, plus an umbrella
//! builder whose selector holds at most one case builder. See
//! [`SumBuilder`].
//!
//! # Mutator names
//!
//! | Slot | Mutators for field `f` |
//! |---|---|
//! | scalar, optional | `f` |
//! | list | `f`, `push_f`, `extend_f`, `clear_f` |
//! | map | `f`, `insert_f`, `merge_f`, `clear_f` |
//! | set | `f`, `insert_f`, `union_f`, `clear_f` |
//! | nested | `f`, `f_builder`, `set_f_builder` |

mod config;
mod plan;
mod record;
mod slot;
mod sum;

pub use config::{GenConfig, BUILDER_SUFFIX, SELECTOR_SUFFIX};
pub use plan::{
    BuilderPlan, CaseBuilder, FieldInit, Forward, InitSource, Member, Mutator, MutatorOp,
    PropertySlotKind, ReadMode, RecordBuilder, Slot, SumBuilder, Target,
};

use kiln_ir::ValidModel;

/// Plan the builder for a validated declaration.
#[tracing::instrument(level = "debug", skip_all, fields(target = model.name()))]
pub fn generate(model: &ValidModel, config: &GenConfig) -> BuilderPlan {
    let plan = match model {
        ValidModel::Record(record) => BuilderPlan::Record(record::record_builder(record, config)),
        ValidModel::Sum(sum) => BuilderPlan::Sum(sum::sum_builder(sum, config)),
    };
    tracing::debug!(builder = plan.builder_name(), "generation complete");
    plan
}
