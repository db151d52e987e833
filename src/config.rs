//! Suite configuration.

use testdecl_core::IdentifierStyle;

/// Name used for suites created without one.
pub const DEFAULT_SUITE_NAME: &str = "TestSuite";

/// Configuration of a [`crate::TestSuite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Scope name reported in duplicate-definition errors
    pub name: String,
    /// Spelling rules for derived identifiers
    pub style: IdentifierStyle,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SUITE_NAME.to_string(),
            style: IdentifierStyle::default(),
        }
    }
}

impl SuiteConfig {
    /// Create a config for a named suite with the default identifier style
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the identifier style
    pub fn with_style(mut self, style: IdentifierStyle) -> Self {
        self.style = style;
        self
    }
}
