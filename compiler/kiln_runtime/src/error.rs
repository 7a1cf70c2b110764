//! Build-time failures.

/// Why a `build()` call could not produce a value.
///
/// A failed build never yields a partial value; the builder is left
/// untouched and can be completed and built again.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A required field was never given a value.
    #[error("field `{field}` was never set")]
    FieldNotSet { field: &'static str },

    /// A sum-type builder was built before any case was selected.
    #[error("no case of `{target}` was selected")]
    NoCaseSelected { target: &'static str },

    /// A nested sub-builder failed.
    #[error("field `{field}` could not be built: {source}")]
    Nested {
        field: &'static str,
        source: Box<BuildError>,
    },
}

impl BuildError {
    /// Wrap a sub-builder failure with the field that owns it.
    pub fn nested(field: &'static str, source: BuildError) -> Self {
        BuildError::Nested {
            field,
            source: Box::new(source),
        }
    }

    /// The innermost failure, looking through `Nested` wrappers.
    pub fn root_cause(&self) -> &BuildError {
        match self {
            BuildError::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Field path from the outermost builder down to the failure.
    ///
    /// `Nested { field: "owner", Nested { field: "address", FieldNotSet { field: "city" } } }`
    /// yields `["owner", "address", "city"]`.
    pub fn field_path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut current = self;
        loop {
            match current {
                BuildError::Nested { field, source } => {
                    path.push(*field);
                    current = source;
                }
                BuildError::FieldNotSet { field } => {
                    path.push(*field);
                    return path;
                }
                BuildError::NoCaseSelected { .. } => return path,
            }
        }
    }
}
