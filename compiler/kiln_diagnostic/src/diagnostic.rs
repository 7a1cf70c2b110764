//! Core diagnostic types.

use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// Prevents generation.
    Error,
    /// Reported, but the builder is still generated.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Applicability level for suggested fixes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Applicability {
    /// The suggestion is definitely correct and can be auto-applied.
    MachineApplicable,
    /// The suggestion might be correct but requires human verification.
    MaybeIncorrect,
    /// The suggestion contains placeholders that need user input.
    HasPlaceholders,
    #[default]
    Unspecified,
}

/// A suggested fix.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
    /// Replacement text for the subject, if the fix is a rewrite.
    pub replacement: Option<String>,
    pub applicability: Applicability,
}

impl Suggestion {
    /// A text-only suggestion.
    pub fn text(message: impl Into<String>) -> Self {
        Suggestion {
            message: message.into(),
            replacement: None,
            applicability: Applicability::Unspecified,
        }
    }

    /// A suggestion that rewrites the subject.
    pub fn rewrite(
        message: impl Into<String>,
        replacement: impl Into<String>,
        applicability: Applicability,
    ) -> Self {
        Suggestion {
            message: message.into(),
            replacement: Some(replacement.into()),
            applicability,
        }
    }
}

/// What a diagnostic is about.
///
/// Reporters use this to locate the offending piece of the declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Subject {
    /// The declaration as a whole.
    Declaration,
    /// A record field.
    Field(String),
    /// A case of a sum type.
    Case(String),
    /// A payload slot inside a case.
    Payload { case: String, field: String },
    /// Several cases at once.
    Cases(Vec<String>),
}

/// Closed set of analysis findings, with structured payloads.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    /// A builder-managed field has no declared type.
    ImpliedType {
        owner: String,
        /// Set when the field is a payload slot.
        case: Option<String>,
        field: String,
    },
    /// The declaration is neither a record nor a sum type.
    UnsupportedDeclaration { name: String, kind: String },
    /// A sum type without cases.
    NoCases { sum: String },
    /// Case names used more than once, deduplicated, first-seen order.
    OverloadedCases { sum: String, names: Vec<String> },
    /// An explicit payload label of the form `index_<digits>`.
    InvalidLabel {
        sum: String,
        case: String,
        label: String,
    },
    /// No case of the sum type carries a payload.
    NoPayload { sum: String },
}

impl DiagnosticKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            DiagnosticKind::ImpliedType { .. } => ErrorCode::K0001,
            DiagnosticKind::UnsupportedDeclaration { .. } => ErrorCode::K0002,
            DiagnosticKind::NoCases { .. } => ErrorCode::K0003,
            DiagnosticKind::OverloadedCases { .. } => ErrorCode::K0004,
            DiagnosticKind::InvalidLabel { .. } => ErrorCode::K0005,
            DiagnosticKind::NoPayload { .. } => ErrorCode::W0001,
        }
    }

    pub fn subject(&self) -> Subject {
        match self {
            DiagnosticKind::ImpliedType {
                case: Some(case),
                field,
                ..
            } => Subject::Payload {
                case: case.clone(),
                field: field.clone(),
            },
            DiagnosticKind::ImpliedType {
                case: None, field, ..
            } => Subject::Field(field.clone()),
            DiagnosticKind::UnsupportedDeclaration { .. }
            | DiagnosticKind::NoCases { .. }
            | DiagnosticKind::NoPayload { .. } => Subject::Declaration,
            DiagnosticKind::OverloadedCases { names, .. } => Subject::Cases(names.clone()),
            DiagnosticKind::InvalidLabel { case, label, .. } => Subject::Payload {
                case: case.clone(),
                field: label.clone(),
            },
        }
    }

    /// Plain-text message.
    pub fn message(&self) -> String {
        match self {
            DiagnosticKind::ImpliedType {
                owner,
                case: Some(case),
                field,
            } => format!("payload `{field}` of case `{owner}::{case}` has no declared type"),
            DiagnosticKind::ImpliedType {
                owner,
                case: None,
                field,
            } => format!("field `{field}` of `{owner}` has no declared type"),
            DiagnosticKind::UnsupportedDeclaration { name, kind } => {
                format!("cannot generate a builder for {kind} `{name}`")
            }
            DiagnosticKind::NoCases { sum } => format!("sum type `{sum}` has no cases"),
            DiagnosticKind::OverloadedCases { sum, names } => {
                let list = names.join("`, `");
                format!("sum type `{sum}` declares overloaded cases: `{list}`")
            }
            DiagnosticKind::InvalidLabel { sum, case, label } => format!(
                "payload label `{label}` in case `{sum}::{case}` is reserved for positional payloads"
            ),
            DiagnosticKind::NoPayload { sum } => {
                format!("no case of sum type `{sum}` carries a payload")
            }
        }
    }

    fn default_suggestion(&self) -> Option<Suggestion> {
        match self {
            DiagnosticKind::ImpliedType { field, .. } => Some(Suggestion::rewrite(
                "add an explicit type annotation",
                format!("{field}: <type>"),
                Applicability::HasPlaceholders,
            )),
            DiagnosticKind::UnsupportedDeclaration { .. } => {
                Some(Suggestion::text("declare a struct or an enum instead"))
            }
            DiagnosticKind::NoCases { .. } => Some(Suggestion::text("add at least one case")),
            DiagnosticKind::OverloadedCases { .. } => Some(Suggestion::text(
                "rename the cases so that every case name is unique",
            )),
            DiagnosticKind::InvalidLabel { .. } => Some(Suggestion::text(
                "choose a label that does not match `index_<number>`",
            )),
            DiagnosticKind::NoPayload { .. } => None,
        }
    }
}

/// A single analysis finding.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub subject: Subject,
    pub suggestion: Option<Suggestion>,
}

impl Diagnostic {
    /// Create a diagnostic; severity, subject and suggestion follow from `kind`.
    pub fn new(kind: DiagnosticKind) -> Self {
        let severity = if kind.code().is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        };
        Diagnostic {
            severity,
            subject: kind.subject(),
            suggestion: kind.default_suggestion(),
            kind,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Replace the suggested fix.
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code(), self.message())?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  = help: {}", suggestion.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
