//! Provide pure, deterministic naming helpers for declarative test registration.
//!
//! This crate is intentionally small and dependency-free. It owns the rules that turn a human-readable test
//! description into a member identifier, so that the registrar, its tests, and any host tooling that wants to predict
//! identifiers all agree on the same spelling.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, no logging.
//! - Current scope: whitespace normalization, identifier derivation (base + per-parameter suffixes), identifier style
//!   configuration, and the canonical user-facing messages.

pub mod errors;
pub mod identifier;
pub mod style;

pub use identifier::{
    Identifier, base_identifier, is_description_whitespace, normalize_description, parameterized_identifier,
};
pub use style::IdentifierStyle;
