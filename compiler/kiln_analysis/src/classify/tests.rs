#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn int() -> TypeRef {
    TypeRef::named("Int")
}

fn string() -> TypeRef {
    TypeRef::named("String")
}

// ── Sugar ───────────────────────────────────────────────────────

#[test]
fn no_annotation_is_unknown() {
    assert_eq!(classify(None), Shape::Unknown);
}

#[test]
fn bracket_sugar_is_list() {
    let ty = TypeRef::list(int());
    assert_eq!(classify(Some(&ty)), Shape::List { elem: int() });
}

#[test]
fn bracket_colon_sugar_is_map() {
    let ty = TypeRef::map(string(), int());
    assert_eq!(
        classify(Some(&ty)),
        Shape::Map {
            key: string(),
            value: int()
        }
    );
}

#[test]
fn question_mark_sugar_is_optional() {
    let ty = TypeRef::optional(int());
    assert_eq!(
        classify(Some(&ty)),
        Shape::Optional {
            inner: int(),
            shape: Box::new(Shape::Opaque(int())),
        }
    );
}

// ── Generic names ───────────────────────────────────────────────

#[test]
fn recognized_list_names() {
    for name in ["Array", "Vec", "VecDeque"] {
        let ty = TypeRef::generic(name, vec![int()]);
        assert_eq!(classify(Some(&ty)), Shape::List { elem: int() }, "{name}");
    }
}

#[test]
fn recognized_map_names() {
    for name in ["Dictionary", "HashMap", "BTreeMap"] {
        let ty = TypeRef::generic(name, vec![string(), int()]);
        assert_eq!(
            classify(Some(&ty)),
            Shape::Map {
                key: string(),
                value: int()
            },
            "{name}"
        );
    }
}

#[test]
fn recognized_set_names() {
    for name in ["Set", "HashSet", "BTreeSet"] {
        let ty = TypeRef::generic(name, vec![int()]);
        assert_eq!(classify(Some(&ty)), Shape::Set { elem: int() }, "{name}");
    }
}

#[test]
fn qualified_paths_match_on_last_segment() {
    let ty = TypeRef::path(["std", "collections", "HashMap"], vec![string(), int()]);
    assert!(matches!(classify(Some(&ty)), Shape::Map { .. }));
}

#[test]
fn arity_mismatch_is_opaque() {
    let three = TypeRef::generic("HashMap", vec![string(), int(), TypeRef::named("S")]);
    assert_eq!(classify(Some(&three)), Shape::Opaque(three.clone()));

    let bare = TypeRef::named("Vec");
    assert_eq!(classify(Some(&bare)), Shape::Opaque(bare.clone()));

    let two = TypeRef::generic("Set", vec![int(), int()]);
    assert_eq!(classify(Some(&two)), Shape::Opaque(two.clone()));
}

#[test]
fn optional_classifies_inner_one_level() {
    let ty = TypeRef::generic("Option", vec![TypeRef::generic("Vec", vec![int()])]);
    assert_eq!(
        classify(Some(&ty)),
        Shape::Optional {
            inner: TypeRef::generic("Vec", vec![int()]),
            shape: Box::new(Shape::List { elem: int() }),
        }
    );
}

#[test]
fn nested_optional_is_opaque_at_second_level() {
    let inner = TypeRef::generic("Option", vec![int()]);
    let ty = TypeRef::generic("Option", vec![inner.clone()]);
    assert_eq!(
        classify(Some(&ty)),
        Shape::Optional {
            inner: inner.clone(),
            shape: Box::new(Shape::Opaque(inner)),
        }
    );

    let sugar = TypeRef::optional(TypeRef::optional(int()));
    match classify(Some(&sugar)) {
        Shape::Optional { shape, .. } => {
            assert_eq!(*shape, Shape::Opaque(TypeRef::optional(int())));
        }
        other => panic!("expected Optional, got {other:?}"),
    }
}

#[test]
fn other_types_are_opaque() {
    let cases = [
        TypeRef::tuple(vec![int(), string()]),
        TypeRef::verbatim("fn(u8) -> u8"),
        TypeRef::Array {
            elem: Box::new(int()),
            len: "4".to_string(),
        },
        TypeRef::generic("Box", vec![int()]),
    ];
    for ty in cases {
        assert_eq!(classify(Some(&ty)), Shape::Opaque(ty.clone()));
    }
}

#[test]
fn opaque_equality_is_textual() {
    let a = classify(Some(&TypeRef::named("Int")));
    let b = classify(Some(&TypeRef::path(["Swift", "Int"], Vec::new())));
    assert_ne!(a, b);
    assert_eq!(a, classify(Some(&TypeRef::named("Int"))));
}

// ── Properties ──────────────────────────────────────────────────

const RECOGNIZED: &[&str] = &[
    "Array",
    "Vec",
    "VecDeque",
    "Dictionary",
    "HashMap",
    "BTreeMap",
    "Set",
    "HashSet",
    "BTreeSet",
    "Optional",
    "Option",
];

fn unrecognized_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,10}")
        .unwrap()
        .prop_filter("not a recognized container", |s| {
            !RECOGNIZED.contains(&s.as_str())
        })
}

fn leaf_type() -> impl Strategy<Value = TypeRef> {
    unrecognized_name().prop_map(TypeRef::named)
}

proptest! {
    #[test]
    fn unrecognized_generics_are_opaque(
        name in unrecognized_name(),
        args in prop::collection::vec(leaf_type(), 0..4),
    ) {
        let ty = TypeRef::generic(name, args);
        prop_assert_eq!(classify(Some(&ty)), Shape::Opaque(ty.clone()));
    }

    #[test]
    fn list_element_is_preserved(elem in leaf_type()) {
        let ty = TypeRef::generic("Vec", vec![elem.clone()]);
        prop_assert_eq!(classify(Some(&ty)), Shape::List { elem });
    }

    #[test]
    fn optional_never_nests_two_levels(elem in leaf_type(), sugar in any::<bool>()) {
        let wrap = |t: TypeRef| if sugar {
            TypeRef::optional(t)
        } else {
            TypeRef::generic("Option", vec![t])
        };
        let ty = wrap(wrap(elem));
        match classify(Some(&ty)) {
            Shape::Optional { shape, .. } => prop_assert!(!shape.is_optional()),
            other => prop_assert!(false, "expected Optional, got {:?}", other),
        }
    }
}
