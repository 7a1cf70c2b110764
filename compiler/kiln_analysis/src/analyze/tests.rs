use pretty_assertions::assert_eq;

use kiln_diagnostic::{ErrorCode, Severity, Subject};
use kiln_ir::{Binding, CaseDecl, Literal, MemberDecl, PayloadDecl, TypeRef};

use super::*;

fn int() -> TypeRef {
    TypeRef::named("Int")
}

fn record(members: Vec<MemberDecl>) -> Declaration {
    Declaration::Record(RecordDecl {
        name: "Config".to_string(),
        members,
    })
}

fn sum(cases: Vec<CaseDecl>) -> Declaration {
    Declaration::Sum(SumDecl {
        name: "Number".to_string(),
        cases,
    })
}

fn codes(analyzed: &AnalyzedModel) -> Vec<ErrorCode> {
    analyzed.diagnostics().iter().map(Diagnostic::code).collect()
}

// ── Records ─────────────────────────────────────────────────────

#[test]
fn typed_record_is_valid_without_warnings() {
    let analyzed = analyze(&record(vec![
        MemberDecl::field("port", int()),
        MemberDecl::field("hosts", TypeRef::list(TypeRef::named("String"))),
    ]));
    let Ok((ValidModel::Record(record), warnings)) = analyzed.into_result() else {
        panic!("expected a valid record");
    };
    assert!(warnings.is_empty());
    let names: Vec<_> = record.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["port", "hosts"]);
    assert!(record.constants.is_empty());
}

#[test]
fn each_untyped_mutable_field_is_an_error() {
    let analyzed = analyze(&record(vec![
        MemberDecl::multi(vec![Binding::named("a", None)]),
        MemberDecl::field("b", int()),
        MemberDecl::multi(vec![Binding::named("c", None)]),
    ]));
    assert!(!analyzed.is_valid());
    assert_eq!(codes(&analyzed), [ErrorCode::K0001, ErrorCode::K0001]);
    let subjects: Vec<_> = analyzed
        .diagnostics()
        .iter()
        .map(|d| d.subject.clone())
        .collect();
    assert_eq!(
        subjects,
        [
            Subject::Field("a".to_string()),
            Subject::Field("c".to_string())
        ]
    );
}

#[test]
fn literal_constants_leave_the_build_surface() {
    let analyzed = analyze(&record(vec![
        MemberDecl::multi(vec![
            Binding::named("kind", None).with_default(Literal::Str("cfg".to_string()))
        ])
        .constant(),
        MemberDecl::field("port", int()),
    ]));
    let Ok((ValidModel::Record(record), warnings)) = analyzed.into_result() else {
        panic!("expected a valid record");
    };
    assert!(warnings.is_empty());
    assert_eq!(record.fields.len(), 1);
    assert_eq!(record.fields[0].name, "port");
    assert_eq!(record.constants.len(), 1);
    assert_eq!(record.constants[0].name, "kind");
    assert_eq!(record.constants[0].value, Literal::Str("cfg".to_string()));
}

#[test]
fn untyped_initialized_variable_is_still_an_error() {
    let analyzed = analyze(&record(vec![MemberDecl::multi(vec![Binding::named(
        "count", None,
    )
    .with_default(Literal::Int("0".to_string()))])]));
    assert_eq!(codes(&analyzed), [ErrorCode::K0001]);
}

#[test]
fn static_untyped_members_are_ignored() {
    let analyzed = analyze(&record(vec![
        MemberDecl::multi(vec![Binding::named("shared", None)]).static_member(),
        MemberDecl::field("port", int()),
    ]));
    assert!(analyzed.is_valid());
}

#[test]
fn unsupported_declaration_is_rejected() {
    let analyzed = analyze(&Declaration::Unsupported(UnsupportedDecl {
        name: "Bits".to_string(),
        kind: "union".to_string(),
    }));
    assert_eq!(codes(&analyzed), [ErrorCode::K0002]);
}

// ── Sum types ───────────────────────────────────────────────────

#[test]
fn zero_cases_is_an_error() {
    let analyzed = analyze(&sum(Vec::new()));
    assert_eq!(codes(&analyzed), [ErrorCode::K0003]);
}

#[test]
fn duplicate_case_reported_once_with_name_once() {
    let analyzed = analyze(&sum(vec![
        CaseDecl::new("one", vec![PayloadDecl::positional(int())]),
        CaseDecl::new("one", vec![PayloadDecl::positional(int())]),
    ]));
    let errors = analyzed.diagnostics();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        DiagnosticKind::OverloadedCases {
            sum: "Number".to_string(),
            names: vec!["one".to_string()],
        }
    );
}

#[test]
fn overloaded_names_keep_first_seen_order() {
    let analyzed = analyze(&sum(vec![
        CaseDecl::unit("b"),
        CaseDecl::unit("a"),
        CaseDecl::unit("a"),
        CaseDecl::unit("b"),
        CaseDecl::unit("b"),
        CaseDecl::unit("c"),
    ]));
    assert_eq!(
        analyzed.diagnostics()[0].kind,
        DiagnosticKind::OverloadedCases {
            sum: "Number".to_string(),
            names: vec!["b".to_string(), "a".to_string()],
        }
    );
}

#[test]
fn reserved_label_is_an_error() {
    let analyzed = analyze(&sum(vec![CaseDecl::new(
        "pair",
        vec![
            PayloadDecl::labeled("index_0", int()),
            PayloadDecl::labeled("Index_12", int()),
            PayloadDecl::labeled("indexed", int()),
        ],
    )]));
    let errors = analyzed.diagnostics();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0].subject,
        Subject::Payload {
            case: "pair".to_string(),
            field: "index_0".to_string(),
        }
    );
    assert_eq!(errors[1].code(), ErrorCode::K0005);
}

#[test]
fn synthesized_positional_names_are_not_reserved_label_errors() {
    let analyzed = analyze(&sum(vec![CaseDecl::new(
        "pair",
        vec![PayloadDecl::positional(int()), PayloadDecl::positional(int())],
    )]));
    assert!(analyzed.is_valid());
}

#[test]
fn all_sum_errors_are_collected_together() {
    let analyzed = analyze(&sum(vec![
        CaseDecl::new("one", vec![PayloadDecl::labeled("index_1", int())]),
        CaseDecl::unit("one"),
        CaseDecl::new(
            "two",
            vec![PayloadDecl {
                label: Some("x".to_string()),
                ty: None,
                buildable: false,
            }],
        ),
    ]));
    assert!(!analyzed.is_valid());
    assert_eq!(
        codes(&analyzed),
        [ErrorCode::K0004, ErrorCode::K0005, ErrorCode::K0001]
    );
}

#[test]
fn no_payload_anywhere_is_a_warning() {
    let analyzed = analyze(&sum(vec![CaseDecl::unit("on"), CaseDecl::unit("off")]));
    assert!(analyzed.is_valid());
    let diagnostics = analyzed.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code(), ErrorCode::W0001);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
}

#[test]
fn invalid_sum_has_no_payload_warning() {
    let analyzed = analyze(&sum(vec![CaseDecl::unit("on"), CaseDecl::unit("on")]));
    assert_eq!(codes(&analyzed), [ErrorCode::K0004]);
}

#[test]
fn analysis_is_deterministic() {
    let decl = sum(vec![
        CaseDecl::new("a", vec![PayloadDecl::labeled("index_0", int())]),
        CaseDecl::unit("a"),
    ]);
    assert_eq!(analyze(&decl), analyze(&decl));
}
