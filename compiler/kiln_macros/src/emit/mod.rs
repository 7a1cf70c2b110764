//! Printing a `BuilderPlan` as Rust items.
//!
//! Every generated item shares the target's generics, extended with one
//! where-predicate per slot: the value type must be `Clone` (builds read
//! without consuming), containers must implement the matching collection
//! trait, and nested types must be `Buildable`.
//!
//! Targets are always constructed and destructured with brace syntax
//! (`Point { 0: x, 1: y }`, `Marker {}`), which works for named, tuple and
//! unit shapes alike.

mod mutator;
mod record;
mod sum;

use kiln_gen::{BuilderPlan, InitSource, Member, PropertySlotKind, RecordBuilder, Slot};
use kiln_ir::{Literal, TypeRef};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, ToTokens};
use rustc_hash::FxHashSet;
use syn::{parse_quote, DeriveInput, Generics, Ident, Visibility, WherePredicate};

/// Emit every item of `plan`.
#[tracing::instrument(level = "debug", skip_all, fields(builder = plan.builder_name()))]
pub(crate) fn emit(plan: &BuilderPlan, input: &DeriveInput, krate: &syn::Path) -> syn::Result<TokenStream> {
    let slots: Vec<&Slot> = match plan {
        BuilderPlan::Record(record) => record.slots.iter().collect(),
        BuilderPlan::Sum(sum) => sum
            .cases
            .iter()
            .flat_map(|case| &case.builder.slots)
            .collect(),
    };
    let cx = Emitter::new(input, krate, &slots)?;
    let tokens = match plan {
        BuilderPlan::Record(record) => record::record(&cx, record)?,
        BuilderPlan::Sum(sum) => sum::sum(&cx, sum)?,
    };
    tracing::trace!(bytes = tokens.to_string().len(), "emitted builder");
    Ok(tokens)
}

/// Shared emission context for one derive.
pub(crate) struct Emitter<'a> {
    krate: &'a syn::Path,
    vis: &'a Visibility,
    /// Target generics plus the slot predicates.
    generics: Generics,
    /// Where to report emission errors.
    span: Span,
}

impl<'a> Emitter<'a> {
    fn new(input: &'a DeriveInput, krate: &'a syn::Path, slots: &[&Slot]) -> syn::Result<Self> {
        let mut generics = input.generics.clone();
        let mut predicates = Vec::with_capacity(slots.len());
        for slot in slots {
            predicates.push(slot_bound(krate, &slot.kind)?);
        }
        if !predicates.is_empty() {
            generics.make_where_clause().predicates.extend(predicates);
        }
        Ok(Emitter {
            krate,
            vis: &input.vis,
            generics,
            span: input.ident.span(),
        })
    }

    /// Reject a builder whose methods would collide, e.g. a field named
    /// `build` or fields `a: Vec<_>` and `push_a`.
    fn check_methods<'n>(
        &self,
        builder: &str,
        reserved: &[&'n str],
        names: impl IntoIterator<Item = &'n str>,
    ) -> syn::Result<()> {
        let mut seen: FxHashSet<&str> = reserved.iter().copied().collect();
        for name in names {
            if !seen.insert(name) {
                return Err(syn::Error::new(
                    self.span,
                    format!(
                        "`{builder}` would define method `{name}` twice; \
                         rename the field or case it comes from"
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Generics with an extra leading `'__kiln` lifetime, for impls over
    /// `&Builder`.
    fn generics_with_borrow(&self) -> Generics {
        let mut generics = self.generics.clone();
        generics.params.insert(0, parse_quote!('__kiln));
        generics
    }

    /// The runtime slot type backing `kind`.
    fn slot_type(&self, kind: &PropertySlotKind) -> syn::Result<TokenStream> {
        let krate = self.krate;
        Ok(match kind {
            PropertySlotKind::Scalar { ty } => {
                let ty = parse_type(ty)?;
                quote!(#krate::ScalarSlot<#ty>)
            }
            PropertySlotKind::List { collection, .. } => {
                let ty = parse_type(collection)?;
                quote!(#krate::ListSlot<#ty>)
            }
            PropertySlotKind::Map { collection, .. } => {
                let ty = parse_type(collection)?;
                quote!(#krate::MapSlot<#ty>)
            }
            PropertySlotKind::Set { collection, .. } => {
                let ty = parse_type(collection)?;
                quote!(#krate::SetSlot<#ty>)
            }
            PropertySlotKind::Optional { inner } => {
                let ty = parse_type(inner)?;
                quote!(#krate::OptionalSlot<#ty>)
            }
            PropertySlotKind::NestedBuildable { ty, .. } => {
                let ty = parse_type(ty)?;
                quote!(#krate::NestedSlot<#ty>)
            }
        })
    }

    /// `name: SlotType<..>` field declarations.
    fn slot_fields(&self, plan: &RecordBuilder) -> syn::Result<Vec<TokenStream>> {
        let mut fields = Vec::with_capacity(plan.slots.len());
        for slot in &plan.slots {
            let name = ident(&slot.name);
            let ty = self.slot_type(&slot.kind)?;
            fields.push(quote!(#name: #ty));
        }
        Ok(fields)
    }

    /// `name: Slot::new("name")` initializers.
    fn slot_inits(&self, plan: &RecordBuilder) -> Vec<TokenStream> {
        let krate = self.krate;
        plan.slots
            .iter()
            .map(|slot| {
                let name = ident(&slot.name);
                let label = &slot.name;
                let ctor = match slot.kind {
                    PropertySlotKind::Scalar { .. } => quote!(#krate::ScalarSlot),
                    PropertySlotKind::List { .. } => quote!(#krate::ListSlot),
                    PropertySlotKind::Map { .. } => quote!(#krate::MapSlot),
                    PropertySlotKind::Set { .. } => quote!(#krate::SetSlot),
                    PropertySlotKind::Optional { .. } => quote!(#krate::OptionalSlot),
                    PropertySlotKind::NestedBuildable { .. } => quote!(#krate::NestedSlot),
                };
                quote!(#name: #ctor::new(#label))
            })
            .collect()
    }

    /// The from-builder constructor: a brace expression building `path`
    /// from the slots of `receiver`, fallible reads propagated with `?`.
    fn construct(
        &self,
        plan: &RecordBuilder,
        path: &TokenStream,
        receiver: &TokenStream,
    ) -> syn::Result<TokenStream> {
        let mut inits = Vec::with_capacity(plan.inits.len());
        for init in &plan.inits {
            let member = member(&init.member);
            let value = match &init.source {
                InitSource::Slot { slot, .. } => {
                    let Some(slot) = plan.slot(slot) else {
                        return Err(syn::Error::new(
                            self.span,
                            format!("builder plan has no slot `{slot}`"),
                        ));
                    };
                    read(receiver, slot)
                }
                InitSource::Constant(literal) => constant(literal)?,
            };
            inits.push(quote!(#member: #value));
        }
        Ok(quote!(#path { #(#inits,)* }))
    }

    /// Destructure a finished value and feed each member to its setter.
    ///
    /// Returns the brace pattern fields and the setter calls on `builder`.
    fn forwards(plan: &RecordBuilder, builder: &Ident) -> (Vec<TokenStream>, Vec<TokenStream>) {
        plan.forwards
            .iter()
            .map(|forward| {
                let member = member(&forward.member);
                let binding = format_ident!("__kiln_{}", forward.slot);
                let setter = ident(&forward.setter);
                (
                    quote!(#member: #binding),
                    quote!(#builder.#setter(#binding);),
                )
            })
            .unzip()
    }
}

/// Read one slot inside the from-builder constructor.
fn read(receiver: &TokenStream, slot: &Slot) -> TokenStream {
    let name = ident(&slot.name);
    match slot.kind {
        PropertySlotKind::Scalar { .. } => quote!(#receiver.#name.build()?),
        PropertySlotKind::List { .. }
        | PropertySlotKind::Map { .. }
        | PropertySlotKind::Set { .. }
        | PropertySlotKind::Optional { .. } => quote!(#receiver.#name.build()),
        PropertySlotKind::NestedBuildable {
            optional: false, ..
        } => quote!(#receiver.#name.build_required()?),
        PropertySlotKind::NestedBuildable { optional: true, .. } => {
            quote!(#receiver.#name.build_optional()?)
        }
    }
}

/// The where-predicate a slot needs on every generated item.
fn slot_bound(krate: &syn::Path, kind: &PropertySlotKind) -> syn::Result<WherePredicate> {
    let clone = quote!(::core::clone::Clone);
    Ok(match kind {
        PropertySlotKind::Scalar { ty } | PropertySlotKind::Optional { inner: ty } => {
            let ty = parse_type(ty)?;
            parse_quote!(#ty: #clone)
        }
        PropertySlotKind::List { collection, elem } => {
            let (collection, elem) = (parse_type(collection)?, parse_type(elem)?);
            parse_quote!(#collection: #krate::ListCollection<Elem = #elem> + #clone)
        }
        PropertySlotKind::Map {
            collection,
            key,
            value,
        } => {
            let (collection, key, value) =
                (parse_type(collection)?, parse_type(key)?, parse_type(value)?);
            parse_quote!(#collection: #krate::MapCollection<Key = #key, Value = #value> + #clone)
        }
        PropertySlotKind::Set { collection, elem } => {
            let (collection, elem) = (parse_type(collection)?, parse_type(elem)?);
            parse_quote!(#collection: #krate::SetCollection<Elem = #elem> + #clone)
        }
        PropertySlotKind::NestedBuildable { ty, .. } => {
            let ty = parse_type(ty)?;
            parse_quote!(#ty: #krate::Buildable + #clone)
        }
    })
}

/// A constant initializer. String literals convert into the field type.
fn constant(literal: &Literal) -> syn::Result<TokenStream> {
    let expr: syn::Expr = syn::parse_str(&literal.to_string())?;
    Ok(if literal.is_str() {
        quote!(::core::convert::From::from(#expr))
    } else {
        expr.into_token_stream()
    })
}

/// Parse a rendered `TypeRef` back into tokens.
pub(crate) fn parse_type(ty: &TypeRef) -> syn::Result<syn::Type> {
    syn::parse_str(&ty.to_string()).map_err(|err| {
        syn::Error::new(
            Span::call_site(),
            format!("cannot emit type `{ty}`: {err}"),
        )
    })
}

/// An identifier for a generated name, raw if it is a keyword.
pub(crate) fn ident(name: &str) -> Ident {
    if let Ok(ident) = syn::parse_str::<Ident>(name) {
        return ident;
    }
    match name {
        // Path keywords cannot be raw identifiers.
        "self" | "Self" | "super" | "crate" => format_ident!("{name}_"),
        _ => Ident::new_raw(name, Span::call_site()),
    }
}

fn member(member: &Member) -> TokenStream {
    match member {
        Member::Named(name) => ident(name).into_token_stream(),
        Member::Index(index) => syn::Index::from(*index).into_token_stream(),
    }
}

#[cfg(test)]
mod tests;
