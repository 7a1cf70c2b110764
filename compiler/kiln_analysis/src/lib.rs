//! Analysis phase: declaration → validated model + diagnostics.
//!
//! Three steps, leaves first:
//! 1. [`classify`] maps a field's type reference to a [`Shape`](kiln_ir::Shape)
//! 2. [`extract_record`] / [`extract_cases`] normalize members and cases
//!    into [`Field`](kiln_ir::Field)s and [`Case`](kiln_ir::Case)s
//! 3. [`analyze`] applies the validation rules and decides validity
//!
//! Analysis is a pure function of its input declaration and can run
//! concurrently over independent declarations.

mod analyze;
mod classify;
mod extract;

pub use analyze::{analyze, AnalyzedModel};
pub use classify::classify;
pub use extract::{extract_cases, extract_record};
