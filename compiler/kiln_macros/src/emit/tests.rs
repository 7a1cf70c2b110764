use pretty_assertions::assert_eq;
use quote::ToTokens;
use syn::{parse_quote, ImplItem, Item};

use kiln_analysis::analyze;
use kiln_gen::{generate, GenConfig};

use super::*;
use crate::lower::lower;

fn expand(input: &DeriveInput) -> syn::Result<syn::File> {
    let decl = lower(input)?;
    let Ok((model, _)) = analyze(&decl).into_result() else {
        panic!("expected a valid declaration");
    };
    let plan = generate(&model, &GenConfig::default());
    let tokens = emit(&plan, input, &parse_quote!(::kiln))?;
    syn::parse2(tokens)
}

fn expand_ok(input: &DeriveInput) -> syn::File {
    match expand(input) {
        Ok(file) => file,
        Err(err) => panic!("expansion failed: {err}"),
    }
}

fn type_name(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(path) => path.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}

/// Method names of the inherent impl for `ty`.
fn methods(file: &syn::File, ty: &str) -> Vec<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(imp) if imp.trait_.is_none() && type_name(&imp.self_ty).as_deref() == Some(ty) => {
                Some(imp)
            }
            _ => None,
        })
        .flat_map(|imp| &imp.items)
        .filter_map(|item| match item {
            ImplItem::Fn(f) => Some(f.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

/// `(trait, self type)` for every trait impl.
fn trait_impls(file: &syn::File) -> Vec<(String, String)> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(imp) => {
                let (_, path, _) = imp.trait_.as_ref()?;
                let name = path.segments.last()?.ident.to_string();
                Some((name, type_name(&imp.self_ty)?))
            }
            _ => None,
        })
        .collect()
}

fn declared(file: &syn::File) -> Vec<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(s) => Some(s.ident.to_string()),
            Item::Enum(e) => Some(e.ident.to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn record_surface() {
    let input: DeriveInput = parse_quote! {
        pub struct Server {
            host: String,
            aliases: Vec<String>,
            limits: std::collections::HashMap<String, u32>,
            tags: std::collections::BTreeSet<String>,
            timeout: Option<u64>,
        }
    };
    let file = expand_ok(&input);
    assert_eq!(declared(&file), ["ServerBuilder"]);
    assert_eq!(
        methods(&file, "ServerBuilder"),
        [
            "new",
            "host",
            "aliases",
            "push_aliases",
            "extend_aliases",
            "clear_aliases",
            "limits",
            "insert_limits",
            "merge_limits",
            "clear_limits",
            "tags",
            "insert_tags",
            "union_tags",
            "clear_tags",
            "timeout",
            "build",
        ]
    );
    let impls = trait_impls(&file);
    for expected in [
        ("Default", "ServerBuilder"),
        ("TryFrom", "Server"),
        ("From", "ServerBuilder"),
        ("Builder", "ServerBuilder"),
        ("Buildable", "Server"),
    ] {
        assert!(
            impls.contains(&(expected.0.to_string(), expected.1.to_string())),
            "missing impl {expected:?} in {impls:?}"
        );
    }
}

#[test]
fn required_reads_propagate_and_containers_do_not() {
    let input: DeriveInput = parse_quote! {
        struct Server { host: String, aliases: Vec<String> }
    };
    let text = expand_ok(&input).into_token_stream().to_string();
    assert!(text.contains("host : builder . host . build () ?"));
    assert!(text.contains("aliases : builder . aliases . build () ,"));
}

#[test]
fn tuple_struct_uses_positional_names() {
    let input: DeriveInput = parse_quote!(struct Pair(u8, String););
    let file = expand_ok(&input);
    assert_eq!(methods(&file, "PairBuilder"), ["new", "index_0", "index_1", "build"]);
    let text = file.into_token_stream().to_string();
    assert!(text.contains("0 : builder . index_0 . build () ?"));
}

#[test]
fn unit_struct_has_an_empty_builder() {
    let input: DeriveInput = parse_quote!(struct Marker;);
    let file = expand_ok(&input);
    assert_eq!(methods(&file, "MarkerBuilder"), ["new", "build"]);
    let text = file.into_token_stream().to_string();
    assert!(text.contains("_builder"));
    assert!(text.contains("_value"));
}

#[test]
fn generics_gain_slot_bounds() {
    let input: DeriveInput = parse_quote! {
        struct Wrapper<T> { value: T, items: Vec<T> }
    };
    let file = expand_ok(&input);
    let builder = file.items.iter().find_map(|item| match item {
        Item::Struct(s) if s.ident == "WrapperBuilder" => Some(s),
        _ => None,
    });
    let Some(builder) = builder else {
        panic!("builder struct not emitted");
    };
    let Some(where_clause) = &builder.generics.where_clause else {
        panic!("expected slot bounds");
    };
    let predicates: Vec<String> = where_clause
        .predicates
        .iter()
        .map(|p| p.to_token_stream().to_string())
        .collect();
    assert_eq!(predicates.len(), 2);
    assert!(predicates[0].starts_with("T : :: core :: clone :: Clone"));
    assert!(predicates[1].contains("ListCollection < Elem = T >"));
}

#[test]
fn string_constants_convert_into_the_field_type() {
    let input: DeriveInput = parse_quote! {
        struct Versioned {
            #[builder(constant = "v1")]
            version: String,
            #[builder(constant = 3)]
            level: u8,
            name: String,
        }
    };
    let file = expand_ok(&input);
    assert_eq!(methods(&file, "VersionedBuilder"), ["new", "name", "build"]);
    let text = file.into_token_stream().to_string();
    assert!(text.contains(r#"version : :: core :: convert :: From :: from ("v1")"#));
    assert!(text.contains("level : 3"));
}

#[test]
fn nested_fields_get_sub_builder_accessors() {
    let input: DeriveInput = parse_quote! {
        struct Deployment {
            #[builder(nested)]
            server: Server,
            #[builder(nested)]
            backup: Option<Server>,
        }
    };
    let file = expand_ok(&input);
    assert_eq!(
        methods(&file, "DeploymentBuilder"),
        [
            "new",
            "server",
            "server_builder",
            "set_server_builder",
            "backup",
            "backup_builder",
            "set_backup_builder",
            "build",
        ]
    );
    let text = file.into_token_stream().to_string();
    assert!(text.contains("builder . server . build_required () ?"));
    assert!(text.contains("builder . backup . build_optional () ?"));
}

#[test]
fn sum_surface() {
    let input: DeriveInput = parse_quote! {
        enum Shape {
            Circle { radius: f64 },
            Rect(f64, f64),
            Empty,
        }
    };
    let file = expand_ok(&input);
    assert_eq!(
        declared(&file),
        [
            "ShapeCircleBuilder",
            "ShapeRectBuilder",
            "ShapeEmptyBuilder",
            "ShapeCaseSelector",
            "ShapeBuilder",
        ]
    );
    assert_eq!(
        methods(&file, "ShapeBuilder"),
        [
            "new",
            "circle",
            "set_circle",
            "rect",
            "set_rect",
            "empty",
            "set_empty",
            "set",
            "selected_case",
            "clear",
            "build",
        ]
    );
    assert_eq!(methods(&file, "ShapeCircleBuilder"), ["new", "radius", "build"]);
    let impls = trait_impls(&file);
    assert!(impls.contains(&("CaseSet".to_string(), "ShapeCaseSelector".to_string())));
    assert!(impls.contains(&("CaseOf".to_string(), "ShapeRectBuilder".to_string())));
}

#[test]
fn lone_case_projection_has_no_fallback() {
    let input: DeriveInput = parse_quote!(enum Only { One { value: u8 } });
    let text = expand_ok(&input).into_token_stream().to_string();
    assert!(!text.contains("_ => :: core :: option :: Option :: None"));

    let input: DeriveInput = parse_quote!(enum Two { One { value: u8 }, Other });
    let text = expand_ok(&input).into_token_stream().to_string();
    assert!(text.contains("_ => :: core :: option :: Option :: None"));
}

#[test]
fn case_selection_returns_the_builder_in_place() {
    let input: DeriveInput = parse_quote!(enum Two { One { value: u8 }, Other });
    let text = expand_ok(&input).into_token_stream().to_string();
    assert!(text.contains("fn select"));
    assert!(text.contains("ref mut builder"));
    assert!(!text.contains("unreachable"));
}

#[test]
fn colliding_method_names_are_rejected() {
    let input: DeriveInput = parse_quote!(struct Job { build: u32 });
    let Err(err) = expand(&input) else {
        panic!("expected a collision error");
    };
    assert_eq!(
        err.to_string(),
        "`JobBuilder` would define method `build` twice; rename the field or case it comes from"
    );

    let input: DeriveInput = parse_quote!(struct Queue { items: Vec<u8>, push_items: u8 });
    assert!(expand(&input).is_err());

    let input: DeriveInput = parse_quote!(enum Op { Set, Get });
    assert!(expand(&input).is_err());
}

#[test]
fn crate_path_is_used_for_runtime_items() {
    let input: DeriveInput = parse_quote!(struct Port { number: u16 });
    let Ok(decl) = lower(&input) else {
        panic!("lowering failed");
    };
    let Ok((model, _)) = analyze(&decl).into_result() else {
        panic!("expected a valid declaration");
    };
    let plan = generate(&model, &GenConfig::default());
    let Ok(tokens) = emit(&plan, &input, &parse_quote!(crate::support)) else {
        panic!("emission failed");
    };
    let text = tokens.to_string();
    assert!(text.contains("crate :: support :: ScalarSlot < u16 >"));
    assert!(!text.contains(":: kiln ::"));
}

#[test]
fn identifiers_for_keywords() {
    assert_eq!(ident("port").to_string(), "port");
    assert_eq!(ident("type").to_string(), "r#type");
    assert_eq!(ident("self").to_string(), "self_");
    assert_eq!(ident("Self").to_string(), "Self_");
}
