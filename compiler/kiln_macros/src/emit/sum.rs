//! Sum-type builders: one builder per case, a selector enum over them and
//! an umbrella builder owning a `Selector`.

use kiln_gen::{CaseBuilder, SumBuilder};
use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::Ident;

use super::record::declaration;
use super::{ident, mutator, Emitter};

/// Methods every umbrella builder defines besides its case accessors.
const RESERVED: &[&str] = &["new", "set", "selected_case", "clear", "build"];

/// Methods every case builder defines besides its mutators.
const CASE_RESERVED: &[&str] = &["new", "build"];

pub(super) fn sum(cx: &Emitter<'_>, plan: &SumBuilder) -> syn::Result<TokenStream> {
    cx.check_methods(
        &plan.builder_name,
        RESERVED,
        plan.cases
            .iter()
            .flat_map(|case| [case.accessor.as_str(), case.replacer.as_str()]),
    )?;

    let krate = cx.krate;
    let vis = cx.vis;
    let target = ident(&plan.target);
    let builder = ident(&plan.builder_name);
    let selector = ident(&plan.selector_name);
    let (impl_generics, ty_generics, where_clause) = cx.generics.split_for_impl();
    let borrowed = cx.generics_with_borrow();
    let (borrow_impl_generics, _, _) = borrowed.split_for_impl();
    let generics = &cx.generics;

    let mut case_items = Vec::with_capacity(plan.cases.len());
    for case in &plan.cases {
        case_items.push(case_builder(cx, plan, case)?);
    }

    let variants = plan.cases.iter().map(|case| {
        let name = ident(&case.case);
        let case_builder = ident(&case.builder.builder_name);
        quote!(#name(#case_builder #ty_generics))
    });
    let case_names = plan.cases.iter().map(|case| {
        let name = ident(&case.case);
        let label = &case.case;
        quote!(Self::#name(_) => #label)
    });
    let case_builds = plan.cases.iter().map(|case| {
        let name = ident(&case.case);
        quote!(Self::#name(builder) => builder.build())
    });
    let accessors = plan.cases.iter().map(|case| accessors(cx, case, &ty_generics.to_token_stream()));
    let set_arms = plan.cases.iter().map(|case| set_arm(plan, case, &ty_generics.to_token_stream()));
    let target_name = &plan.target;
    let selector_doc = format!("The case builders of [`{target_name}`], one per case.");
    let builder_doc = format!("Builder for [`{target_name}`], building one case at a time.");

    Ok(quote! {
        #(#case_items)*

        #[doc = #selector_doc]
        #[allow(dead_code)]
        #vis enum #selector #generics #where_clause {
            #(#variants,)*
        }

        #[automatically_derived]
        impl #impl_generics #krate::CaseSet for #selector #ty_generics #where_clause {
            type Output = #target #ty_generics;

            const TARGET: &'static str = #target_name;

            fn case_name(&self) -> &'static str {
                match self {
                    #(#case_names,)*
                }
            }

            fn build(&self) -> ::core::result::Result<Self::Output, #krate::BuildError> {
                match self {
                    #(#case_builds,)*
                }
            }
        }

        #[doc = #builder_doc]
        #[allow(dead_code)]
        #vis struct #builder #generics #where_clause {
            selector: #krate::Selector<#selector #ty_generics>,
        }

        #[automatically_derived]
        impl #impl_generics ::core::default::Default for #builder #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    selector: #krate::Selector::new(),
                }
            }
        }

        #[allow(dead_code)]
        impl #impl_generics #builder #ty_generics #where_clause {
            /// An empty builder with no case selected.
            #vis fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            #(#accessors)*

            /// Selects the case of `value`, pre-populated with its payload.
            /// Whatever case was being built before is discarded.
            #vis fn set(&mut self, value: #target #ty_generics) -> &mut Self {
                match value {
                    #(#set_arms)*
                }
                self
            }

            /// Name of the case being built, if any.
            #vis fn selected_case(&self) -> ::core::option::Option<&'static str> {
                self.selector.selected_case()
            }

            /// Discards the case being built, if any.
            #vis fn clear(&mut self) -> &mut Self {
                self.selector.clear();
                self
            }

            /// Builds the selected case. Fails if no case was selected or if
            /// the case builder fails.
            #vis fn build(&self) -> ::core::result::Result<#target #ty_generics, #krate::BuildError> {
                self.selector.build()
            }
        }

        #[automatically_derived]
        impl #borrow_impl_generics ::core::convert::TryFrom<&'__kiln #builder #ty_generics>
            for #target #ty_generics #where_clause
        {
            type Error = #krate::BuildError;

            fn try_from(
                builder: &'__kiln #builder #ty_generics,
            ) -> ::core::result::Result<Self, Self::Error> {
                builder.selector.build()
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::convert::From<#target #ty_generics>
            for #builder #ty_generics #where_clause
        {
            fn from(value: #target #ty_generics) -> Self {
                let mut builder = <Self as ::core::default::Default>::default();
                builder.set(value);
                builder
            }
        }

        #[automatically_derived]
        impl #impl_generics #krate::Builder for #builder #ty_generics #where_clause {
            type Output = #target #ty_generics;

            fn build(&self) -> ::core::result::Result<Self::Output, #krate::BuildError> {
                self.selector.build()
            }
        }

        #[automatically_derived]
        impl #impl_generics #krate::Buildable for #target #ty_generics #where_clause {
            type Builder = #builder #ty_generics;
        }
    })
}

/// The builder for one case and its `CaseOf` projection.
fn case_builder(cx: &Emitter<'_>, plan: &SumBuilder, case: &CaseBuilder) -> syn::Result<TokenStream> {
    let record = &case.builder;
    cx.check_methods(
        &record.builder_name,
        CASE_RESERVED,
        record.mutators.iter().map(|m| m.name.as_str()),
    )?;

    let krate = cx.krate;
    let vis = cx.vis;
    let target = ident(&plan.target);
    let selector = ident(&plan.selector_name);
    let variant = ident(&case.case);
    let builder = ident(&record.builder_name);
    let (impl_generics, ty_generics, where_clause) = cx.generics.split_for_impl();

    let doc = format!("Builder for the `{}` case of [`{}`].", case.case, plan.target);
    let declaration = declaration(cx, record, &builder, &quote!(#target #ty_generics), &doc)?;
    let mutators = mutator::mutators(cx, record)?;
    let construct = cx.construct(record, &quote!(#target::#variant), &quote!(self))?;

    // A lone case needs no fallback arm, and one would be unreachable.
    let fallback = (plan.cases.len() > 1).then(|| quote!(_ => ::core::option::Option::None,));

    Ok(quote! {
        #declaration

        #[allow(dead_code)]
        impl #impl_generics #builder #ty_generics #where_clause {
            /// An empty case builder.
            #vis fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            #(#mutators)*

            /// Builds the sum value tagged with this case.
            #vis fn build(&self) -> ::core::result::Result<#target #ty_generics, #krate::BuildError> {
                ::core::result::Result::Ok(#construct)
            }
        }

        #[automatically_derived]
        impl #impl_generics #krate::CaseOf<#selector #ty_generics> for #builder #ty_generics #where_clause {
            fn wrap(self) -> #selector #ty_generics {
                #selector::#variant(self)
            }

            fn project(case: &#selector #ty_generics) -> ::core::option::Option<&Self> {
                match case {
                    #selector::#variant(builder) => ::core::option::Option::Some(builder),
                    #fallback
                }
            }

            fn select(active: &mut ::core::option::Option<#selector #ty_generics>) -> &mut Self {
                if let ::core::option::Option::Some(#selector::#variant(ref mut builder)) = *active {
                    return builder;
                }
                *active = ::core::option::Option::Some(#selector::#variant(
                    <Self as ::core::default::Default>::default(),
                ));
                Self::select(active)
            }
        }
    })
}

/// The case accessor and its replacing setter on the umbrella builder.
fn accessors(cx: &Emitter<'_>, case: &CaseBuilder, ty_generics: &TokenStream) -> TokenStream {
    let vis = cx.vis;
    let builder = ident(&case.builder.builder_name);
    let accessor = ident(&case.accessor);
    let replacer = ident(&case.replacer);
    let doc_accessor = format!(
        "The `{}` case builder. Selects `{}` first if another case (or none) \
         is selected, discarding the previous case's pending edits.",
        case.case, case.case
    );
    let doc_replacer = format!(
        "Selects `{}` with `builder`, discarding whatever case was selected.",
        case.case
    );
    quote! {
        #[doc = #doc_accessor]
        #vis fn #accessor(&mut self) -> &mut #builder #ty_generics {
            self.selector.select::<#builder #ty_generics>()
        }

        #[doc = #doc_replacer]
        #vis fn #replacer(&mut self, builder: #builder #ty_generics) -> &mut Self {
            self.selector.replace(builder);
            self
        }
    }
}

/// One arm of the umbrella `set(value)` match.
fn set_arm(plan: &SumBuilder, case: &CaseBuilder, ty_generics: &TokenStream) -> TokenStream {
    let target = ident(&plan.target);
    let variant = ident(&case.case);
    let builder_ty = ident(&case.builder.builder_name);
    let builder = Ident::new("builder", Span::call_site());
    let (patterns, calls) = Emitter::forwards(&case.builder, &builder);
    let binding = if calls.is_empty() {
        quote!(#builder)
    } else {
        quote!(mut #builder)
    };
    quote! {
        #target::#variant { #(#patterns,)* .. } => {
            let #binding: #builder_ty #ty_generics = ::core::default::Default::default();
            #(#calls)*
            self.selector.replace(#builder);
        }
    }
}
