//! `#[derive(Builder)]` entry point: attributes, lowering, analysis,
//! generation and emission, in that order.

use kiln_analysis::analyze;
use kiln_gen::GenConfig;
use proc_macro2::TokenStream;
use syn::{parse_macro_input, parse_quote, DeriveInput};

use crate::attrs::ContainerAttrs;
use crate::trace::init_tracing;
use crate::{emit, lower, report};

pub(crate) fn derive_builder(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    init_tracing();
    let input = parse_macro_input!(input as DeriveInput);
    derive_builder_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[tracing::instrument(level = "debug", skip_all, fields(item = %input.ident))]
pub(crate) fn derive_builder_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = ContainerAttrs::parse(&input.attrs)?;
    let decl = lower::lower(input)?;

    let (model, warnings) = analyze(&decl).into_result().map_err(|diagnostics| {
        let errors: Vec<_> = diagnostics.into_iter().filter(|d| d.is_error()).collect();
        report::errors(input, &errors)
    })?;

    let config = match &attrs.name {
        Some(name) => GenConfig::with_builder_name(name.to_string()),
        None => GenConfig::default(),
    };
    let plan = kiln_gen::generate(&model, &config);

    let krate = attrs.krate.unwrap_or_else(|| parse_quote!(::kiln));
    let mut tokens = emit::emit(&plan, input, &krate)?;
    tokens.extend(report::warnings(input, &warnings));
    Ok(tokens)
}
