//! Record builders, and the builder half shared with sum-type cases.

use kiln_gen::{RecordBuilder, Target};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{ident, mutator, Emitter};

/// Methods every record builder defines besides its mutators.
const RESERVED: &[&str] = &["new", "build"];

pub(super) fn record(cx: &Emitter<'_>, plan: &RecordBuilder) -> syn::Result<TokenStream> {
    let Target::Struct { name } = &plan.target else {
        return Err(syn::Error::new(
            Span::call_site(),
            "record emission was given a case builder",
        ));
    };
    cx.check_methods(
        &plan.builder_name,
        RESERVED,
        plan.mutators.iter().map(|m| m.name.as_str()),
    )?;

    let krate = cx.krate;
    let vis = cx.vis;
    let target = ident(name);
    let builder = ident(&plan.builder_name);
    let (impl_generics, ty_generics, where_clause) = cx.generics.split_for_impl();
    let borrowed = cx.generics_with_borrow();
    let (borrow_impl_generics, _, _) = borrowed.split_for_impl();

    let declaration = declaration(
        cx,
        plan,
        &builder,
        &quote!(#target #ty_generics),
        &format!("Builder for [`{name}`]."),
    )?;
    let mutators = mutator::mutators(cx, plan)?;
    let param = if plan.slots.is_empty() {
        quote!(_builder)
    } else {
        quote!(builder)
    };
    let construct = cx.construct(plan, &quote!(Self), &param)?;
    let to_builder = to_builder(plan, &target, &quote!(#target #ty_generics));
    let doc_build = format!(
        "Builds a [`{name}`] from the current state. Fails on the first unset \
         required field, in declaration order. The builder is left untouched."
    );

    Ok(quote! {
        #declaration

        #[allow(dead_code)]
        impl #impl_generics #builder #ty_generics #where_clause {
            /// An empty builder.
            #vis fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            #(#mutators)*

            #[doc = #doc_build]
            #vis fn build(&self) -> ::core::result::Result<#target #ty_generics, #krate::BuildError> {
                <#target #ty_generics as ::core::convert::TryFrom<&Self>>::try_from(self)
            }
        }

        #[automatically_derived]
        impl #borrow_impl_generics ::core::convert::TryFrom<&'__kiln #builder #ty_generics>
            for #target #ty_generics #where_clause
        {
            type Error = #krate::BuildError;

            fn try_from(
                #param: &'__kiln #builder #ty_generics,
            ) -> ::core::result::Result<Self, Self::Error> {
                ::core::result::Result::Ok(#construct)
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::convert::From<#target #ty_generics>
            for #builder #ty_generics #where_clause
        {
            #to_builder
        }

        #[automatically_derived]
        impl #impl_generics #krate::Builder for #builder #ty_generics #where_clause {
            type Output = #target #ty_generics;

            fn build(&self) -> ::core::result::Result<Self::Output, #krate::BuildError> {
                <#target #ty_generics as ::core::convert::TryFrom<&Self>>::try_from(self)
            }
        }

        #[automatically_derived]
        impl #impl_generics #krate::Buildable for #target #ty_generics #where_clause {
            type Builder = #builder #ty_generics;
        }
    })
}

/// The builder struct and its `Default` impl.
pub(super) fn declaration(
    cx: &Emitter<'_>,
    plan: &RecordBuilder,
    builder: &Ident,
    target: &TokenStream,
    doc: &str,
) -> syn::Result<TokenStream> {
    let vis = cx.vis;
    let generics = &cx.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let fields = cx.slot_fields(plan)?;
    let inits = cx.slot_inits(plan);

    Ok(quote! {
        #[doc = #doc]
        #[allow(dead_code)]
        #vis struct #builder #generics #where_clause {
            #(#fields,)*
            __kiln_marker: ::core::marker::PhantomData<fn() -> #target>,
        }

        #[automatically_derived]
        impl #impl_generics ::core::default::Default for #builder #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #(#inits,)*
                    __kiln_marker: ::core::marker::PhantomData,
                }
            }
        }
    })
}

/// Body of `From<Target> for Builder`.
fn to_builder(plan: &RecordBuilder, target: &Ident, target_ty: &TokenStream) -> TokenStream {
    let builder = Ident::new("builder", Span::call_site());
    let (patterns, calls) = Emitter::forwards(plan, &builder);
    if patterns.is_empty() {
        return quote! {
            fn from(_value: #target_ty) -> Self {
                <Self as ::core::default::Default>::default()
            }
        };
    }
    quote! {
        fn from(value: #target_ty) -> Self {
            let #target { #(#patterns,)* .. } = value;
            let mut #builder = <Self as ::core::default::Default>::default();
            #(#calls)*
            #builder
        }
    }
}
