//! Diagnostic records produced by builder analysis.
//!
//! Diagnostics are plain data: a closed [`DiagnosticKind`] with structured
//! payloads, a [`Severity`], the [`Subject`] they are about, and an optional
//! [`Suggestion`]. Presentation belongs to whoever reports them; the
//! `Display` impls here are a plain-text fallback.

mod bag;
mod diagnostic;
mod error_code;

pub use bag::DiagnosticBag;
pub use diagnostic::{Applicability, Diagnostic, DiagnosticKind, Severity, Subject, Suggestion};
pub use error_code::ErrorCode;
