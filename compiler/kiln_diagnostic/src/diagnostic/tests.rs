use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_severity_follows_code() {
    let error = Diagnostic::new(DiagnosticKind::NoCases {
        sum: "Never".to_string(),
    });
    assert_eq!(error.severity, Severity::Error);
    assert!(error.is_error());

    let warning = Diagnostic::new(DiagnosticKind::NoPayload {
        sum: "Flag".to_string(),
    });
    assert_eq!(warning.severity, Severity::Warning);
    assert!(!warning.is_error());
    assert_eq!(warning.code(), ErrorCode::W0001);
}

#[test]
fn test_implied_type_subjects() {
    let record = Diagnostic::new(DiagnosticKind::ImpliedType {
        owner: "Point".to_string(),
        case: None,
        field: "x".to_string(),
    });
    assert_eq!(record.subject, Subject::Field("x".to_string()));

    let payload = Diagnostic::new(DiagnosticKind::ImpliedType {
        owner: "Shape".to_string(),
        case: Some("Circle".to_string()),
        field: "radius".to_string(),
    });
    assert_eq!(
        payload.subject,
        Subject::Payload {
            case: "Circle".to_string(),
            field: "radius".to_string(),
        }
    );
}

#[test]
fn test_overloaded_cases_subject_lists_names() {
    let diag = Diagnostic::new(DiagnosticKind::OverloadedCases {
        sum: "Number".to_string(),
        names: vec!["one".to_string(), "two".to_string()],
    });
    assert_eq!(
        diag.subject,
        Subject::Cases(vec!["one".to_string(), "two".to_string()])
    );
    assert_eq!(
        diag.message(),
        "sum type `Number` declares overloaded cases: `one`, `two`"
    );
}

#[test]
fn test_implied_type_suggestion_has_placeholder() {
    let diag = Diagnostic::new(DiagnosticKind::ImpliedType {
        owner: "Point".to_string(),
        case: None,
        field: "x".to_string(),
    });
    let suggestion = diag.suggestion.clone();
    assert_eq!(
        suggestion.map(|s| (s.replacement, s.applicability)),
        Some((Some("x: <type>".to_string()), Applicability::HasPlaceholders))
    );
}

#[test]
fn test_no_payload_has_no_suggestion() {
    let diag = Diagnostic::new(DiagnosticKind::NoPayload {
        sum: "Flag".to_string(),
    });
    assert!(diag.suggestion.is_none());
}

#[test]
fn test_with_suggestion_overrides_default() {
    let diag = Diagnostic::new(DiagnosticKind::NoCases {
        sum: "Never".to_string(),
    })
    .with_suggestion(Suggestion::text("use `!` instead"));
    assert_eq!(
        diag.suggestion.map(|s| s.message),
        Some("use `!` instead".to_string())
    );
}

#[test]
fn test_diagnostic_display_format() {
    let diag = Diagnostic::new(DiagnosticKind::InvalidLabel {
        sum: "Shape".to_string(),
        case: "Dot".to_string(),
        label: "index_0".to_string(),
    });
    let output = diag.to_string();
    assert!(output.starts_with("error [K0005]: payload label `index_0`"));
    assert!(output.contains("= help: "));
}
