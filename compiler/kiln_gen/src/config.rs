//! Generation settings.

/// Suffix appended to a type name to name its builder.
pub const BUILDER_SUFFIX: &str = "Builder";

/// Suffix appended to a sum-type name to name its case-selector enum.
pub const SELECTOR_SUFFIX: &str = "CaseSelector";

/// Naming knobs for one generation run.
///
/// The positional prefix is not configurable: analysis reserves
/// [`kiln_ir::POSITIONAL_PREFIX`] and the generator must agree with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    /// Appended to the target name (`Foo` → `FooBuilder`), and to
    /// `<target><case>` for per-case builders.
    pub builder_suffix: String,

    /// Appended to a sum-type name for its case-selector enum.
    pub selector_suffix: String,

    /// Explicit name for the top-level builder; overrides the suffix rule.
    pub builder_name: Option<String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            builder_suffix: BUILDER_SUFFIX.to_string(),
            selector_suffix: SELECTOR_SUFFIX.to_string(),
            builder_name: None,
        }
    }
}

impl GenConfig {
    /// Create a config with an explicit top-level builder name.
    pub fn with_builder_name(name: impl Into<String>) -> Self {
        Self {
            builder_name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Name of the top-level builder for `target`.
    pub fn builder_name(&self, target: &str) -> String {
        match &self.builder_name {
            Some(name) => name.clone(),
            None => format!("{target}{}", self.builder_suffix),
        }
    }

    /// Name of the builder for one case of `target`.
    pub fn case_builder_name(&self, target: &str, case: &str) -> String {
        format!("{target}{case}{}", self.builder_suffix)
    }

    /// Name of the case-selector enum for `target`.
    pub fn selector_name(&self, target: &str) -> String {
        format!("{target}{}", self.selector_suffix)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_names() {
        let config = GenConfig::default();
        assert_eq!(config.builder_name("Foo"), "FooBuilder");
        assert_eq!(config.case_builder_name("Foo", "Bar"), "FooBarBuilder");
        assert_eq!(config.selector_name("Foo"), "FooCaseSelector");
    }

    #[test]
    fn explicit_name_only_affects_top_level() {
        let config = GenConfig::with_builder_name("FooFactory");
        assert_eq!(config.builder_name("Foo"), "FooFactory");
        assert_eq!(config.case_builder_name("Foo", "Bar"), "FooBarBuilder");
    }
}
