//! Public mutator methods.

use kiln_gen::{Mutator, MutatorOp, PropertySlotKind, RecordBuilder};
use proc_macro2::{Span, TokenStream};
use quote::quote;

use super::{ident, parse_type, Emitter};

/// One method per planned mutator, in plan order.
pub(super) fn mutators(cx: &Emitter<'_>, plan: &RecordBuilder) -> syn::Result<Vec<TokenStream>> {
    plan.mutators
        .iter()
        .map(|mutator| {
            let Some(slot) = plan.slot(&mutator.slot) else {
                return Err(syn::Error::new(
                    Span::call_site(),
                    format!("mutator `{}` names a missing slot", mutator.name),
                ));
            };
            method(cx, mutator, &slot.kind)
        })
        .collect()
}

fn method(cx: &Emitter<'_>, mutator: &Mutator, kind: &PropertySlotKind) -> syn::Result<TokenStream> {
    let vis = cx.vis;
    let krate = cx.krate;
    let name = ident(&mutator.name);
    let slot = ident(&mutator.slot);
    let field = &mutator.slot;

    let tokens = match (mutator.op, kind) {
        (MutatorOp::Set, PropertySlotKind::Scalar { ty }) => {
            let ty = parse_type(ty)?;
            let doc = format!("Sets `{field}`.");
            quote! {
                #[doc = #doc]
                #vis fn #name(&mut self, value: #ty) -> &mut Self {
                    self.#slot.set(value);
                    self
                }
            }
        }
        (MutatorOp::Set, PropertySlotKind::Optional { inner }) => {
            let inner = parse_type(inner)?;
            let doc = format!("Sets `{field}`, or clears it with `None`.");
            quote! {
                #[doc = #doc]
                #vis fn #name(&mut self, value: ::core::option::Option<#inner>) -> &mut Self {
                    self.#slot.set(value);
                    self
                }
            }
        }
        (
            MutatorOp::Set,
            PropertySlotKind::List { collection, .. }
            | PropertySlotKind::Map { collection, .. }
            | PropertySlotKind::Set { collection, .. },
        ) => {
            let collection = parse_type(collection)?;
            let doc = format!("Replaces all of `{field}`.");
            quote! {
                #[doc = #doc]
                #vis fn #name(&mut self, value: #collection) -> &mut Self {
                    self.#slot.set(value);
                    self
                }
            }
        }
        (MutatorOp::Set, PropertySlotKind::NestedBuildable { ty, optional }) => {
            let ty = parse_type(ty)?;
            let doc = format!("Sets `{field}`, dropping any pending sub-builder.");
            if *optional {
                quote! {
                    #[doc = #doc]
                    #vis fn #name(&mut self, value: ::core::option::Option<#ty>) -> &mut Self {
                        self.#slot.set_optional(value);
                        self
                    }
                }
            } else {
                quote! {
                    #[doc = #doc]
                    #vis fn #name(&mut self, value: #ty) -> &mut Self {
                        self.#slot.set(value);
                        self
                    }
                }
            }
        }
        (MutatorOp::Push, PropertySlotKind::List { elem, .. }) => {
            let elem = parse_type(elem)?;
            let doc = format!("Appends one element to `{field}`.");
            quote! {
                #[doc = #doc]
                #vis fn #name(&mut self, elem: #elem) -> &mut Self {
                    self.#slot.push(elem);
                    self
                }
            }
        }
        (MutatorOp::Extend, PropertySlotKind::List { elem, .. }) => {
            let elem = parse_type(elem)?;
            let doc = format!("Appends every element of `elems` to `{field}`, in order.");
            quote! {
                #[doc = #doc]
                #vis fn #name<__KilnIter>(&mut self, elems: __KilnIter) -> &mut Self
                where
                    __KilnIter: ::core::iter::IntoIterator<Item = #elem>,
                {
                    self.#slot.extend(elems);
                    self
                }
            }
        }
        (
            MutatorOp::Clear,
            PropertySlotKind::List { .. } | PropertySlotKind::Map { .. } | PropertySlotKind::Set { .. },
        ) => {
            let doc = format!("Empties `{field}`.");
            quote! {
                #[doc = #doc]
                #vis fn #name(&mut self) -> &mut Self {
                    self.#slot.clear();
                    self
                }
            }
        }
        (MutatorOp::InsertEntry, PropertySlotKind::Map { key, value, .. }) => {
            let (key, value) = (parse_type(key)?, parse_type(value)?);
            let doc = format!("Inserts one entry into `{field}`, replacing any value under `key`.");
            quote! {
                #[doc = #doc]
                #vis fn #name(&mut self, key: #key, value: #value) -> &mut Self {
                    self.#slot.insert(key, value);
                    self
                }
            }
        }
        (MutatorOp::Merge, PropertySlotKind::Map { key, value, .. }) => {
            let (key, value) = (parse_type(key)?, parse_type(value)?);
            let doc = format!(
                "Merges `other` into `{field}`. For keys present on both sides \
                 `resolve(existing, incoming)` picks the stored value; if it fails, \
                 `{field}` is left unchanged and the error is returned."
            );
            quote! {
                #[doc = #doc]
                #vis fn #name<__KilnIter, __KilnResolve, __KilnError>(
                    &mut self,
                    other: __KilnIter,
                    resolve: __KilnResolve,
                ) -> ::core::result::Result<&mut Self, __KilnError>
                where
                    __KilnIter: ::core::iter::IntoIterator<Item = (#key, #value)>,
                    __KilnResolve: ::core::ops::FnMut(#value, #value) -> ::core::result::Result<#value, __KilnError>,
                {
                    self.#slot.merge(other, resolve)?;
                    ::core::result::Result::Ok(self)
                }
            }
        }
        (MutatorOp::InsertElem, PropertySlotKind::Set { elem, .. }) => {
            let elem = parse_type(elem)?;
            let doc = format!("Adds one element to `{field}`.");
            quote! {
                #[doc = #doc]
                #vis fn #name(&mut self, elem: #elem) -> &mut Self {
                    self.#slot.insert(elem);
                    self
                }
            }
        }
        (MutatorOp::Union, PropertySlotKind::Set { elem, .. }) => {
            let elem = parse_type(elem)?;
            let doc = format!("Adds every element of `other` to `{field}`.");
            quote! {
                #[doc = #doc]
                #vis fn #name<__KilnIter>(&mut self, other: __KilnIter) -> &mut Self
                where
                    __KilnIter: ::core::iter::IntoIterator<Item = #elem>,
                {
                    self.#slot.union(other);
                    self
                }
            }
        }
        (MutatorOp::SubBuilder, PropertySlotKind::NestedBuildable { ty, .. }) => {
            let ty = parse_type(ty)?;
            let doc = format!(
                "The builder for `{field}`. A value set earlier is converted into a \
                 builder first; an unset field starts from an empty one."
            );
            quote! {
                #[doc = #doc]
                #vis fn #name(&mut self) -> &mut <#ty as #krate::Buildable>::Builder {
                    self.#slot.builder_mut()
                }
            }
        }
        (MutatorOp::SetSubBuilder, PropertySlotKind::NestedBuildable { ty, .. }) => {
            let ty = parse_type(ty)?;
            let doc = format!("Replaces `{field}` with a pending builder.");
            quote! {
                #[doc = #doc]
                #vis fn #name(&mut self, builder: <#ty as #krate::Buildable>::Builder) -> &mut Self {
                    self.#slot.set_builder(builder);
                    self
                }
            }
        }
        (op, kind) => {
            return Err(syn::Error::new(
                Span::call_site(),
                format!(
                    "mutator `{}` ({op:?}) does not apply to a {} slot",
                    mutator.name,
                    kind.name()
                ),
            ))
        }
    };
    Ok(tokens)
}
