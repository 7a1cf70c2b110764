//! Validation rules.
//!
//! Every rule runs to completion and reports into one
//! [`DiagnosticBag`]; validity is decided only at the end, so a caller
//! always sees every error of a declaration at once.

use rustc_hash::{FxHashMap, FxHashSet};

use kiln_diagnostic::{Diagnostic, DiagnosticBag, DiagnosticKind};
use kiln_ir::{
    is_positional_name, Case, ConstantField, Declaration, RecordDecl, RecordModel, SumDecl,
    SumModel, UnsupportedDecl, ValidModel,
};

use crate::{extract_cases, extract_record};

/// The analyzer's verdict on one declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AnalyzedModel {
    /// Generation may proceed; `warnings` should still be reported.
    Valid {
        model: ValidModel,
        warnings: Vec<Diagnostic>,
    },
    /// Generation must not run.
    Invalid { errors: Vec<Diagnostic> },
}

impl AnalyzedModel {
    pub fn is_valid(&self) -> bool {
        matches!(self, AnalyzedModel::Valid { .. })
    }

    /// All diagnostics, errors or warnings.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            AnalyzedModel::Valid { warnings, .. } => warnings,
            AnalyzedModel::Invalid { errors } => errors,
        }
    }

    /// Split into the validated model and its warnings, or the errors.
    pub fn into_result(self) -> Result<(ValidModel, Vec<Diagnostic>), Vec<Diagnostic>> {
        match self {
            AnalyzedModel::Valid { model, warnings } => Ok((model, warnings)),
            AnalyzedModel::Invalid { errors } => Err(errors),
        }
    }

    fn from_bag(model: ValidModel, bag: DiagnosticBag) -> Self {
        if bag.has_errors() {
            AnalyzedModel::Invalid {
                errors: bag.into_vec(),
            }
        } else {
            AnalyzedModel::Valid {
                model,
                warnings: bag.into_vec(),
            }
        }
    }
}

/// Analyze one declaration.
#[tracing::instrument(level = "debug", skip_all, fields(name = decl.name()))]
pub fn analyze(decl: &Declaration) -> AnalyzedModel {
    let analyzed = match decl {
        Declaration::Record(record) => analyze_record(record),
        Declaration::Sum(sum) => analyze_sum(sum),
        Declaration::Unsupported(other) => analyze_unsupported(other),
    };
    tracing::debug!(
        valid = analyzed.is_valid(),
        diagnostics = analyzed.diagnostics().len(),
        "analysis complete"
    );
    analyzed
}

fn analyze_unsupported(decl: &UnsupportedDecl) -> AnalyzedModel {
    AnalyzedModel::Invalid {
        errors: vec![Diagnostic::new(DiagnosticKind::UnsupportedDeclaration {
            name: decl.name.clone(),
            kind: decl.kind.clone(),
        })],
    }
}

fn analyze_record(decl: &RecordDecl) -> AnalyzedModel {
    let mut bag = DiagnosticBag::new();
    let mut fields = Vec::new();
    let mut constants = Vec::new();

    for field in extract_record(decl) {
        if !field.required_at_runtime {
            if let Some(value) = field.default {
                tracing::debug!(field = %field.name, "constant dropped from builder");
                constants.push(ConstantField {
                    name: field.name,
                    position: field.position,
                    label_present: field.label_present,
                    value,
                });
                continue;
            }
        }
        if field.shape.is_unknown() {
            bag.report(DiagnosticKind::ImpliedType {
                owner: decl.name.clone(),
                case: None,
                field: field.name.clone(),
            });
        }
        fields.push(field);
    }

    let model = ValidModel::Record(RecordModel {
        name: decl.name.clone(),
        fields,
        constants,
    });
    AnalyzedModel::from_bag(model, bag)
}

fn analyze_sum(decl: &SumDecl) -> AnalyzedModel {
    let mut bag = DiagnosticBag::new();
    let cases = extract_cases(decl);

    if cases.is_empty() {
        bag.report(DiagnosticKind::NoCases {
            sum: decl.name.clone(),
        });
    }

    let overloaded = overloaded_names(&cases);
    if !overloaded.is_empty() {
        bag.report(DiagnosticKind::OverloadedCases {
            sum: decl.name.clone(),
            names: overloaded,
        });
    }

    for case in &cases {
        for field in &case.fields {
            if field.label_present && is_positional_name(&field.name) {
                bag.report(DiagnosticKind::InvalidLabel {
                    sum: decl.name.clone(),
                    case: case.name.clone(),
                    label: field.name.clone(),
                });
            }
            if field.shape.is_unknown() {
                bag.report(DiagnosticKind::ImpliedType {
                    owner: decl.name.clone(),
                    case: Some(case.name.clone()),
                    field: field.name.clone(),
                });
            }
        }
    }

    let model = SumModel {
        name: decl.name.clone(),
        cases,
    };
    if !bag.has_errors() && !model.has_payload() {
        bag.report(DiagnosticKind::NoPayload {
            sum: decl.name.clone(),
        });
    }
    AnalyzedModel::from_bag(ValidModel::Sum(model), bag)
}

/// Case names declared more than once, each listed once, first-seen order.
fn overloaded_names(cases: &[Case]) -> Vec<String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for case in cases {
        *counts.entry(case.name.as_str()).or_default() += 1;
    }
    let mut reported = FxHashSet::default();
    cases
        .iter()
        .map(|case| case.name.as_str())
        .filter(|name| counts[name] > 1 && reported.insert(*name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests;
