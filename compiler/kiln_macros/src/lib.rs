//! Procedural macros for Kiln.
//!
//! This crate provides `#[derive(Builder)]`, which runs the Kiln pipeline
//! (lowering, analysis, generation) over the annotated item and emits the
//! builder it describes.
//!
//! Use it through the `kiln` crate, which re-exports the derive next to
//! the runtime the generated code calls into.
//!
//! # Attributes
//!
//! ## Container
//! - `#[builder(name = FooFactory)]` - Name the builder explicitly.
//! - `#[builder(crate = path::to::kiln)]` - Path to the runtime, when
//!   `kiln` is renamed or re-exported.
//!
//! ## Field and payload
//! - `#[builder(nested)]` - The field's type has its own builder; adds
//!   `field_builder()` and `set_field_builder()`.
//! - `#[builder(constant = <literal>)]` - Struct fields only. The field is
//!   fixed to the literal and gets no setter.
//!
//! # Logging
//!
//! Set `KILN_LOG` (an `EnvFilter` directive such as `kiln=debug`) to trace
//! the pipeline to stderr during expansion.

mod attrs;
mod derive;
mod emit;
mod lower;
mod report;
mod trace;

use proc_macro::TokenStream;

/// Derive a builder for a struct or enum.
///
/// # Example
///
/// ```text
/// #[derive(Builder)]
/// pub struct Server {
///     host: String,
///     aliases: Vec<String>,
///     #[builder(nested)]
///     tls: Option<Tls>,
///     #[builder(constant = 2)]
///     version: u8,
/// }
///
/// let server = ServerBuilder::new()
///     .host("example.org".to_string())
///     .push_aliases("www.example.org".to_string())
///     .build()?;
/// ```
#[proc_macro_derive(Builder, attributes(builder))]
pub fn derive_builder(input: TokenStream) -> TokenStream {
    derive::derive_builder(input)
}
