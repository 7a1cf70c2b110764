//! Ordered collection of diagnostics for one declaration.

use crate::{Diagnostic, DiagnosticKind};

/// Collects every diagnostic for a declaration before any decision is made.
///
/// Analysis never stops at the first error; it pushes everything here and
/// asks [`DiagnosticBag::has_errors`] at the end.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Build a diagnostic from `kind` and push it.
    pub fn report(&mut self, kind: DiagnosticKind) {
        self.push(Diagnostic::new(kind));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bag_has_no_errors() {
        let bag = DiagnosticBag::new();
        assert!(bag.is_empty());
        assert!(!bag.has_errors());
    }

    #[test]
    fn warnings_do_not_count_as_errors() {
        let mut bag = DiagnosticBag::new();
        bag.report(DiagnosticKind::NoPayload {
            sum: "Flag".to_string(),
        });
        assert!(!bag.has_errors());
        assert_eq!(bag.warnings().count(), 1);
        assert_eq!(bag.errors().count(), 0);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut bag = DiagnosticBag::new();
        bag.report(DiagnosticKind::NoCases {
            sum: "A".to_string(),
        });
        bag.report(DiagnosticKind::NoPayload {
            sum: "B".to_string(),
        });
        bag.report(DiagnosticKind::NoCases {
            sum: "C".to_string(),
        });
        let codes: Vec<_> = bag.iter().map(|d| d.code().as_str()).collect();
        assert_eq!(codes, ["K0003", "W0001", "K0003"]);
        assert!(bag.has_errors());
        assert_eq!(bag.len(), 3);
    }
}
