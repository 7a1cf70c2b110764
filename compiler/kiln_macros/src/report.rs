//! Turning analysis diagnostics into compiler output.
//!
//! Errors become `syn::Error`s pointing at the offending field, variant
//! or type. Warnings have no stable proc-macro API, so each one is emitted
//! as a use of a deprecated constant whose note carries the message.

use kiln_diagnostic::{Diagnostic, Subject};
use kiln_ir::positional_name;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote_spanned};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use crate::lower::Errors;

/// Combine every error diagnostic into one `syn::Error`.
pub(crate) fn errors(input: &DeriveInput, diagnostics: &[Diagnostic]) -> syn::Error {
    let mut errors = Errors::default();
    for diagnostic in diagnostics {
        errors.push(syn::Error::new(
            span_of(input, &diagnostic.subject),
            render(diagnostic),
        ));
    }
    match errors.finish(()) {
        Err(err) => err,
        Ok(()) => syn::Error::new_spanned(&input.ident, "builder analysis failed"),
    }
}

/// Emit each warning as a deprecation lint at the diagnostic's subject.
pub(crate) fn warnings(input: &DeriveInput, diagnostics: &[Diagnostic]) -> TokenStream {
    diagnostics
        .iter()
        .enumerate()
        .map(|(i, diagnostic)| {
            let span = span_of(input, &diagnostic.subject);
            let name = format_ident!("{}_{}", diagnostic.code().as_str(), i, span = span);
            let note = render(diagnostic);
            quote_spanned! {span=>
                const _: () = {
                    #[deprecated(note = #note)]
                    const #name: () = ();
                    #name
                };
            }
        })
        .collect()
}

/// `[K0001] message`, followed by the suggestion if any.
pub(crate) fn render(diagnostic: &Diagnostic) -> String {
    let mut out = format!("[{}] {}", diagnostic.code(), diagnostic.message());
    if let Some(suggestion) = &diagnostic.suggestion {
        out.push_str("\n  = help: ");
        out.push_str(&suggestion.message);
    }
    out
}

/// Best source location for a diagnostic subject.
fn span_of(input: &DeriveInput, subject: &Subject) -> Span {
    let found = match (subject, &input.data) {
        (Subject::Field(name), Data::Struct(data)) => field_span(&data.fields, name),
        (Subject::Case(name), Data::Enum(data)) => data
            .variants
            .iter()
            .find(|v| v.ident.unraw() == name.as_str())
            .map(|v| v.ident.span()),
        (Subject::Payload { case, field }, Data::Enum(data)) => data
            .variants
            .iter()
            .find(|v| v.ident.unraw() == case.as_str())
            .and_then(|v| field_span(&v.fields, field)),
        (Subject::Cases(names), Data::Enum(data)) => {
            // Point at the first repeat, not the original.
            let mut seen = Vec::new();
            data.variants.iter().find_map(|v| {
                let name = v.ident.unraw().to_string();
                if !names.contains(&name) {
                    return None;
                }
                if seen.contains(&name) {
                    Some(v.ident.span())
                } else {
                    seen.push(name);
                    None
                }
            })
        }
        _ => None,
    };
    found.unwrap_or_else(|| input.ident.span())
}

fn field_span(fields: &Fields, name: &str) -> Option<Span> {
    fields.iter().enumerate().find_map(|(i, field)| {
        let matches = match &field.ident {
            Some(ident) => ident.unraw() == name,
            None => name == positional_name(i),
        };
        matches.then(|| field.span())
    })
}
