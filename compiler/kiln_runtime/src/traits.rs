//! The two traits tying a type to its generated builder.

use crate::BuildError;

/// A builder: starts empty, accumulates state, and assembles on demand.
///
/// `build` takes `&self`: it never consumes or changes the builder, so it
/// can be called repeatedly, including after further edits.
pub trait Builder: Default {
    type Output;

    fn build(&self) -> Result<Self::Output, BuildError>;
}

/// A type with a generated builder.
///
/// `From<Self>` on the builder is the to-builder conversion: it forwards
/// every field of a finished value into a fresh builder.
pub trait Buildable: Sized {
    type Builder: Builder<Output = Self> + From<Self>;

    /// An empty builder.
    fn builder() -> Self::Builder {
        Self::Builder::default()
    }

    /// A builder pre-populated with this value.
    fn into_builder(self) -> Self::Builder {
        Self::Builder::from(self)
    }
}
