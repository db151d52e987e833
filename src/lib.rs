#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
//! Declare tests by description.
//!
//! A suite author writes `suite.test("verify something", || ...)` instead of naming a function
//! `test_verify_something`. The registrar derives the identifier, refuses to overwrite an existing one, expands
//! parameterized declarations into one unit per value, and fills in a failing stub when no body is given. Running the
//! registered units is left to the host harness: it iterates a [`TestSuite`] and invokes each [`TestUnit`].
//!
//! ## Crates
//!
//! - `testdecl_core`: pure identifier derivation and shared messages (no dependencies, no IO).
//! - `testdecl` (this crate): scopes, units, registration, error types, logging bootstrap.
//!
//! ## Panic Policy
//!
//! - **Registration** never panics; collisions are returned as [`DuplicateDefinitionError`].
//! - **Test bodies** signal failure by panicking, which is what the host harness reports. Stubs fail through
//!   [`testing::flunk`].
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod config;
pub mod declarative;
pub mod errors;
pub mod logging;
mod macros;
pub mod scope;
pub mod testing;
pub mod unit;

pub use testdecl_core::{Identifier, IdentifierStyle};

pub use config::SuiteConfig;
pub use declarative::{Body, Declarative, EachFn};
pub use errors::{DuplicateDefinitionError, RegistrationResult};
pub use scope::{Scope, TestSuite};
pub use testing::flunk;
pub use unit::{TestUnit, UnitFn};
