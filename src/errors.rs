//! Registration errors.
//!
//! Registration fails in exactly one way: an identifier that is already bound in the scope. The error is returned to
//! whoever is defining the suite and must abort that definition; nothing in this crate catches or downgrades it.

use miette::Diagnostic;
use thiserror::Error;

use crate::Identifier;

/// An identifier derived during registration is already bound in the enclosing scope.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{identifier} is already defined in {scope}")]
#[diagnostic(
    code(testdecl::duplicate_definition),
    help(
        "rename one of the tests; descriptions that differ only in whitespace or underscores derive the same \
         identifier"
    )
)]
pub struct DuplicateDefinitionError {
    /// The colliding identifier
    pub identifier: Identifier,
    /// Name of the scope that already holds it
    pub scope: String,
}

impl DuplicateDefinitionError {
    pub fn new(identifier: Identifier, scope: impl Into<String>) -> Self {
        Self {
            identifier,
            scope: scope.into(),
        }
    }
}

/// Result type for registration operations.
pub type RegistrationResult<T> = Result<T, DuplicateDefinitionError>;
