//! Identifier spelling configuration.
//!
//! The defaults reproduce the conventional `test_` naming: `"verify something"` becomes `test_verify_something`, and
//! the value `2` of a parameterized test becomes the suffix `_|2|`.

/// Spelling rules used to derive identifiers from descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierStyle {
    /// Prepended to every normalized description
    pub prefix: String,
    /// Replaces each maximal whitespace run in a description
    pub separator: String,
    /// Placed between the base identifier and a parameter label
    pub param_open: String,
    /// Placed after a parameter label
    pub param_close: String,
}

impl Default for IdentifierStyle {
    fn default() -> Self {
        Self {
            prefix: "test_".to_string(),
            separator: "_".to_string(),
            param_open: "_|".to_string(),
            param_close: "|".to_string(),
        }
    }
}

impl IdentifierStyle {
    /// Create a style with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the whitespace-run replacement
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the delimiters around parameter labels
    pub fn with_param_delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.param_open = open.into();
        self.param_close = close.into();
        self
    }
}
