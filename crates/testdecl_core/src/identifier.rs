//! Derive member identifiers from test descriptions.
//!
//! ## Notes
//! - **Whitespace**: the ASCII set `' '`, `\t`, `\n`, `\x0B`, `\x0C`, `\r`. Unicode spaces (e.g. `U+00A0`) are kept
//!   verbatim, as are all other characters; identifiers are map keys, not Rust source identifiers.
//! - **Runs**: each maximal whitespace run collapses to exactly one separator, including leading and trailing runs.
//!   Underscores already present in the description are preserved, so `"a b"` and `"a_b"` derive the same identifier.
//! - **Determinism**: every function here is pure; the same inputs always spell the same identifier.

use std::borrow::Borrow;
use std::fmt;

use crate::style::IdentifierStyle;

/// Normalized key of a registered test unit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap an already-derived identifier (e.g. a name a host wants to look up).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Check whether `c` counts as description whitespace.
///
/// ## Returns
/// - `bool`: `true` for space, tab, line feed, vertical tab, form feed, and carriage return.
pub fn is_description_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Replace every maximal whitespace run in `description` with `separator`.
///
/// ## Parameters
/// - `description`: the human-readable test description.
/// - `separator`: the replacement for each run.
///
/// ## Returns
/// - `String`: the normalized description (no prefix).
///
/// ## Examples
/// ```rust
/// use testdecl_core::normalize_description;
///
/// assert_eq!(normalize_description("verify   something", "_"), "verify_something");
/// assert_eq!(normalize_description(" padded\t", "_"), "_padded_");
/// ```
pub fn normalize_description(description: &str, separator: &str) -> String {
    let mut out = String::with_capacity(description.len());
    let mut in_run = false;
    for c in description.chars() {
        if is_description_whitespace(c) {
            if !in_run {
                out.push_str(separator);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Derive the identifier of an unparameterized test.
///
/// ## Returns
/// - (`Identifier`): `style.prefix` followed by the normalized description.
pub fn base_identifier(description: &str, style: &IdentifierStyle) -> Identifier {
    let normalized = normalize_description(description, &style.separator);
    let mut out = String::with_capacity(style.prefix.len() + normalized.len());
    out.push_str(&style.prefix);
    out.push_str(&normalized);
    Identifier(out)
}

/// Derive the identifier of one expansion of a parameterized test.
///
/// ## Parameters
/// - `base`: the identifier derived from the description.
/// - `label`: the parameter value's string form, used verbatim.
///
/// ## Returns
/// - (`Identifier`): e.g. `test_foo_|1|` for base `test_foo` and label `1`.
pub fn parameterized_identifier(base: &Identifier, label: &str, style: &IdentifierStyle) -> Identifier {
    let mut out =
        String::with_capacity(base.0.len() + style.param_open.len() + label.len() + style.param_close.len());
    out.push_str(&base.0);
    out.push_str(&style.param_open);
    out.push_str(label);
    out.push_str(&style.param_close);
    Identifier(out)
}
