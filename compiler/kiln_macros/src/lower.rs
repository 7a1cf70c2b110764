//! Lowering from `syn` into the Kiln declaration model.
//!
//! Structs become records (one member per field), enums become sum types
//! (one case per variant), unions are passed on as unsupported so analysis
//! reports them. Types are lowered structurally where `TypeRef` can hold
//! them and kept as token text otherwise.

use kiln_ir::{
    Binding, BindingPattern, CaseDecl, Declaration, MemberDecl, PathSegment, PayloadDecl,
    RecordDecl, SumDecl, TypePath, TypeRef, UnsupportedDecl,
};
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Data, DataEnum, DeriveInput, Fields, GenericArgument, PathArguments, Type};

use crate::attrs::FieldAttrs;

/// Lower a derive input. Attribute errors on every field are collected.
pub(crate) fn lower(input: &DeriveInput) -> syn::Result<Declaration> {
    let name = input.ident.to_string();
    match &input.data {
        Data::Struct(data) => lower_struct(name, &data.fields).map(Declaration::Record),
        Data::Enum(data) => lower_enum(name, data).map(Declaration::Sum),
        Data::Union(_) => Ok(Declaration::Unsupported(UnsupportedDecl {
            name,
            kind: "union".to_string(),
        })),
    }
}

fn lower_struct(name: String, fields: &Fields) -> syn::Result<RecordDecl> {
    let mut errors = Errors::default();
    let mut members = Vec::new();
    for field in fields {
        match FieldAttrs::parse(&field.attrs) {
            Ok(attrs) => members.push(member(field, attrs)),
            Err(err) => errors.push(err),
        }
    }
    errors.finish(RecordDecl { name, members })
}

fn member(field: &syn::Field, attrs: FieldAttrs) -> MemberDecl {
    let pattern = match &field.ident {
        Some(ident) => BindingPattern::Name(ident.unraw().to_string()),
        None => BindingPattern::Positional,
    };
    let mut member = MemberDecl::multi(vec![Binding::new(pattern, lower_type(&field.ty))]);
    if attrs.nested {
        member = member.buildable();
    }
    if let Some(literal) = attrs.constant {
        member = member.constant().with_default(literal);
    }
    member
}

fn lower_enum(name: String, data: &DataEnum) -> syn::Result<SumDecl> {
    let mut errors = Errors::default();
    let mut cases = Vec::new();
    for variant in &data.variants {
        let mut payload = Vec::new();
        for field in &variant.fields {
            let attrs = match FieldAttrs::parse(&field.attrs) {
                Ok(attrs) => attrs,
                Err(err) => {
                    errors.push(err);
                    continue;
                }
            };
            if attrs.constant.is_some() {
                errors.push(syn::Error::new_spanned(
                    field,
                    "`constant` is only supported on struct fields",
                ));
            }
            payload.push(PayloadDecl {
                label: field.ident.as_ref().map(|ident| ident.unraw().to_string()),
                ty: lower_type(&field.ty),
                buildable: attrs.nested,
            });
        }
        cases.push(CaseDecl::new(variant.ident.unraw().to_string(), payload));
    }
    errors.finish(SumDecl { name, cases })
}

/// Lower a field type. `_` means no type was declared.
pub(crate) fn lower_type(ty: &Type) -> Option<TypeRef> {
    match ty {
        Type::Infer(_) => None,
        Type::Paren(paren) => lower_type(&paren.elem),
        Type::Group(group) => lower_type(&group.elem),
        Type::Path(path) if path.qself.is_none() => {
            Some(lower_path(&path.path).unwrap_or_else(|| verbatim(ty)))
        }
        Type::Tuple(tuple) => Some(TypeRef::Tuple(
            tuple.elems.iter().map(lower_nested).collect(),
        )),
        Type::Reference(reference) => Some(TypeRef::Reference {
            lifetime: reference.lifetime.as_ref().map(|l| l.ident.to_string()),
            mutable: reference.mutability.is_some(),
            inner: Box::new(lower_nested(&reference.elem)),
        }),
        Type::Array(array) => Some(TypeRef::Array {
            elem: Box::new(lower_nested(&array.elem)),
            len: array.len.to_token_stream().to_string(),
        }),
        _ => Some(verbatim(ty)),
    }
}

/// A type in argument position always lowers to something.
fn lower_nested(ty: &Type) -> TypeRef {
    lower_type(ty).unwrap_or_else(|| TypeRef::verbatim("_"))
}

/// `None` when an argument is not a plain type (lifetimes, consts,
/// associated bindings, `Fn(A) -> B` sugar); the caller keeps the text.
fn lower_path(path: &syn::Path) -> Option<TypeRef> {
    let mut segments = Vec::with_capacity(path.segments.len());
    for segment in &path.segments {
        let args = match &segment.arguments {
            PathArguments::None => Vec::new(),
            PathArguments::AngleBracketed(generic) => {
                let mut args = Vec::with_capacity(generic.args.len());
                for arg in &generic.args {
                    match arg {
                        GenericArgument::Type(ty) => args.push(lower_nested(ty)),
                        _ => return None,
                    }
                }
                args
            }
            PathArguments::Parenthesized(_) => return None,
        };
        segments.push(PathSegment::with_args(segment.ident.to_string(), args));
    }
    Some(TypeRef::Path(TypePath {
        leading_colon: path.leading_colon.is_some(),
        segments,
    }))
}

fn verbatim(ty: &Type) -> TypeRef {
    TypeRef::verbatim(ty.to_token_stream().to_string())
}

/// Accumulates errors so one expansion reports all of them.
#[derive(Default)]
pub(crate) struct Errors(Option<syn::Error>);

impl Errors {
    pub(crate) fn push(&mut self, err: syn::Error) {
        match &mut self.0 {
            Some(existing) => existing.combine(err),
            None => self.0 = Some(err),
        }
    }

    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.0 {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
