//! Declarative test registration.
//!
//! Tests are declared by description instead of by identifier:
//!
//! ```rust
//! use testdecl::{Declarative, TestSuite};
//!
//! let mut suite = TestSuite::named("StringTest");
//! suite.test("verify something", || assert!("abc".starts_with('a'))).unwrap();
//! suite.test_each("is not empty", ["a", "bc"], |s| assert!(!s.is_empty())).unwrap();
//! suite.declare("handles unicode").unwrap();
//!
//! let ids: Vec<&str> = suite.identifiers().map(|id| id.as_str()).collect();
//! assert_eq!(
//!     ids,
//!     vec!["test_verify_something", "test_is_not_empty_|a|", "test_is_not_empty_|bc|", "test_handles_unicode"]
//! );
//! ```
//!
//! ## Rules
//!
//! - The identifier is the scope's prefix (`test_`) plus the description with every whitespace run replaced by one
//!   underscore.
//! - A parameterized declaration registers one unit per value, suffixed `_|<value>|` using the value's `Display`
//!   form. Values that display the same collide.
//! - An empty value sequence means "not parameterized".
//! - A declaration without a body registers a stub that fails when run.
//! - Registering an identifier that already exists fails with [`DuplicateDefinitionError`]. Units registered earlier
//!   in the same call stay registered.

use std::fmt::Display;
use std::sync::Arc;

use testdecl_core::errors::no_values_message;
use testdecl_core::{base_identifier, parameterized_identifier};

use crate::errors::{DuplicateDefinitionError, RegistrationResult};
use crate::scope::Scope;
use crate::testing::flunk;
use crate::unit::{TestUnit, UnitFn};
use crate::Identifier;

/// Body of a parameterized unit; receives the bound value.
pub type EachFn<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;

/// Test logic supplied to [`Declarative::register_test`].
pub enum Body<T> {
    /// Takes no argument. With parameters, every expansion runs the same body.
    Plain(UnitFn),
    /// Takes the parameter value of the expansion being run.
    Each(EachFn<T>),
}

impl<T> Body<T> {
    pub fn plain(f: impl Fn() + Send + Sync + 'static) -> Self {
        Body::Plain(Arc::new(f))
    }

    pub fn each(f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Body::Each(Arc::new(f))
    }
}

impl<T> Clone for Body<T> {
    fn clone(&self) -> Self {
        match self {
            Body::Plain(f) => Body::Plain(Arc::clone(f)),
            Body::Each(f) => Body::Each(Arc::clone(f)),
        }
    }
}

/// Registration API available on every [`Scope`].
pub trait Declarative: Scope {
    /// Register the tests described by `description`.
    ///
    /// ## Parameters
    /// - `description`: human-readable name of the test.
    /// - `parameters`: values to expand over, in order. Empty means a single unparameterized unit.
    /// - `body`: the test logic. `None` registers failing stubs.
    ///
    /// ## Returns
    /// - `Ok(Vec<Identifier>)`: identifiers registered by this call, in order.
    /// - `Err(DuplicateDefinitionError)`: the first identifier that was already bound.
    ///
    /// ## Notes
    /// - An `Each` body cannot run without a value. With no parameters it is still bound as an implemented unit, and
    ///   that unit fails when run because it was given no values.
    #[tracing::instrument(skip_all, fields(scope = %self.scope_name(), description = %description))]
    fn register_test<T>(
        &mut self,
        description: &str,
        parameters: impl IntoIterator<Item = T>,
        body: Option<Body<T>>,
    ) -> RegistrationResult<Vec<Identifier>>
    where
        T: Display + Send + Sync + 'static,
    {
        let style = self.identifier_style().clone();
        let base = base_identifier(description, &style);
        let mut parameters = parameters.into_iter().peekable();

        if parameters.peek().is_none() {
            let unit = match body {
                Some(Body::Plain(f)) => TestUnit::new(base.clone(), description, None, f),
                Some(Body::Each(_)) => {
                    let owned_description = description.to_string();
                    let body: UnitFn = Arc::new(move || run_without_values(&owned_description));
                    TestUnit::new(base.clone(), description, None, body)
                }
                None => TestUnit::stub(base.clone(), description, None),
            };
            self.define_unit(unit)?;
            return Ok(vec![base]);
        }

        let mut registered = Vec::new();
        for value in parameters {
            let label = value.to_string();
            let identifier = parameterized_identifier(&base, &label, &style);
            let unit = match &body {
                Some(Body::Each(f)) => {
                    let f = Arc::clone(f);
                    let bound: UnitFn = Arc::new(move || f(&value));
                    TestUnit::new(identifier.clone(), description, Some(label), bound)
                }
                Some(Body::Plain(f)) => TestUnit::new(identifier.clone(), description, Some(label), Arc::clone(f)),
                None => TestUnit::stub(identifier.clone(), description, Some(label)),
            };
            self.define_unit(unit)?;
            registered.push(identifier);
        }
        tracing::debug!(units = registered.len(), "expanded parameterized test");
        Ok(registered)
    }

    /// Bind `unit` unless its identifier is already taken.
    ///
    /// On a collision nothing is bound and the error names the identifier and this scope.
    fn define_unit(&mut self, unit: TestUnit) -> RegistrationResult<()> {
        if self.is_defined(unit.identifier().as_str()) {
            let err = DuplicateDefinitionError::new(unit.identifier().clone(), self.scope_name());
            tracing::warn!(identifier = %err.identifier, scope = %err.scope, "rejected duplicate test definition");
            return Err(err);
        }
        tracing::debug!(identifier = %unit.identifier(), stub = unit.is_stub(), "defined test unit");
        self.bind(unit);
        Ok(())
    }

    /// Register a single test with a body.
    fn test(&mut self, description: &str, body: impl Fn() + Send + Sync + 'static) -> RegistrationResult<Identifier> {
        let identifier = base_identifier(description, self.identifier_style());
        self.register_test::<NoParameter>(description, [], Some(Body::plain(body)))?;
        Ok(identifier)
    }

    /// Register one test per value, each calling `body` with its value.
    fn test_each<T>(
        &mut self,
        description: &str,
        values: impl IntoIterator<Item = T>,
        body: impl Fn(&T) + Send + Sync + 'static,
    ) -> RegistrationResult<Vec<Identifier>>
    where
        T: Display + Send + Sync + 'static,
    {
        self.register_test(description, values, Some(Body::each(body)))
    }

    /// Declare a test that has no implementation yet; running it fails.
    fn declare(&mut self, description: &str) -> RegistrationResult<Identifier> {
        let identifier = base_identifier(description, self.identifier_style());
        self.register_test::<NoParameter>(description, [], None)?;
        Ok(identifier)
    }
}

impl<S: Scope + ?Sized> Declarative for S {}

fn run_without_values(description: &str) {
    flunk(no_values_message(description))
}

/// Parameter type of unparameterized registrations; never constructed.
#[derive(Debug, Clone, Copy)]
pub enum NoParameter {}

impl Display for NoParameter {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {}
    }
}
