//! Scopes that hold registered test units.
//!
//! ## Scope
//!
//! [`Scope`] is the host-side interface the registrar builds on: a name, a membership check, and a bind primitive.
//! Any type implementing it gets the registration API through [`crate::Declarative`].
//!
//! ## TestSuite
//!
//! [`TestSuite`] is the concrete member table: units in registration order, indexed by identifier. It is written
//! only while the suite is being defined (`&mut` access) and read by the host afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use testdecl_core::IdentifierStyle;

use crate::config::SuiteConfig;
use crate::errors::RegistrationResult;
use crate::{Identifier, TestUnit};

static DEFAULT_STYLE: LazyLock<IdentifierStyle> = LazyLock::new(IdentifierStyle::default);

/// A scope that can hold named test units.
pub trait Scope {
    /// Name reported in registration errors.
    fn scope_name(&self) -> &str;

    /// Whether a unit is already bound under `identifier`.
    fn is_defined(&self, identifier: &str) -> bool;

    /// Bind `unit` under its identifier.
    ///
    /// Callers check [`Scope::is_defined`] first. Implementations must never hold two units under one identifier.
    fn bind(&mut self, unit: TestUnit);

    /// Spelling rules for identifiers derived in this scope.
    fn identifier_style(&self) -> &IdentifierStyle {
        &DEFAULT_STYLE
    }
}

/// Insertion-ordered table of registered test units.
#[derive(Debug, Default)]
pub struct TestSuite {
    config: SuiteConfig,
    units: Vec<TestUnit>,
    index: HashMap<Identifier, usize>,
}

impl TestSuite {
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            units: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty suite with the default identifier style.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(SuiteConfig::new(name))
    }

    /// Define a suite in one step.
    ///
    /// `body` registers the suite's tests. The suite is returned only if every registration succeeded; the first
    /// error aborts the definition and is returned instead.
    ///
    /// ## Examples
    /// ```rust
    /// use testdecl::{Declarative, TestSuite};
    ///
    /// let suite = TestSuite::define("MathTest", |suite| {
    ///     suite.test("adds two numbers", || assert_eq!(1 + 1, 2))?;
    ///     suite.test_each("is positive", [1, 2, 3], |value| assert!(*value > 0))?;
    ///     Ok(())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(suite.len(), 4);
    /// assert!(suite.contains("test_is_positive_|2|"));
    /// ```
    pub fn define<F>(name: impl Into<String>, body: F) -> RegistrationResult<Self>
    where
        F: FnOnce(&mut Self) -> RegistrationResult<()>,
    {
        Self::define_with(SuiteConfig::new(name), body)
    }

    /// Like [`TestSuite::define`], with an explicit configuration.
    pub fn define_with<F>(config: SuiteConfig, body: F) -> RegistrationResult<Self>
    where
        F: FnOnce(&mut Self) -> RegistrationResult<()>,
    {
        let mut suite = Self::new(config);
        body(&mut suite)?;
        tracing::debug!(suite = %suite.config.name, units = suite.units.len(), "suite defined");
        Ok(suite)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&TestUnit> {
        self.index.get(identifier).map(|&i| &self.units[i])
    }

    /// Identifiers in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.units.iter().map(TestUnit::identifier)
    }

    /// Units in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TestUnit> {
        self.units.iter()
    }

    /// Hand the units to a host runner, in registration order.
    pub fn into_units(self) -> Vec<TestUnit> {
        self.units
    }
}

impl Scope for TestSuite {
    fn scope_name(&self) -> &str {
        &self.config.name
    }

    fn is_defined(&self, identifier: &str) -> bool {
        self.contains(identifier)
    }

    /// Keeps the unit already bound under the same identifier and drops `unit`.
    fn bind(&mut self, unit: TestUnit) {
        if self.contains(unit.identifier().as_str()) {
            tracing::warn!(
                identifier = %unit.identifier(),
                suite = %self.config.name,
                "ignored bind over an existing identifier"
            );
            return;
        }
        self.index.insert(unit.identifier().clone(), self.units.len());
        self.units.push(unit);
    }

    fn identifier_style(&self) -> &IdentifierStyle {
        &self.config.style
    }
}

impl IntoIterator for TestSuite {
    type Item = TestUnit;
    type IntoIter = std::vec::IntoIter<TestUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

impl<'a> IntoIterator for &'a TestSuite {
    type Item = &'a TestUnit;
    type IntoIter = std::slice::Iter<'a, TestUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn unit(identifier: &str) -> TestUnit {
        TestUnit::new(Identifier::new(identifier), identifier, None, Arc::new(|| {}))
    }

    #[test]
    fn bind_preserves_registration_order() {
        let mut suite = TestSuite::named("Ordered");
        suite.bind(unit("test_b"));
        suite.bind(unit("test_a"));
        suite.bind(unit("test_c"));

        let ids: Vec<&str> = suite.identifiers().map(Identifier::as_str).collect();
        assert_eq!(ids, vec!["test_b", "test_a", "test_c"]);
    }

    #[test]
    fn bind_keeps_the_first_unit_for_an_identifier() {
        let mut suite = TestSuite::named("Rebind");
        suite.bind(TestUnit::new(Identifier::new("test_x"), "x", None, Arc::new(|| {})));
        suite.bind(TestUnit::new(Identifier::new("test_x"), "x again", None, Arc::new(|| {})));

        assert_eq!(suite.len(), 1);
        let ids: Vec<&str> = suite.identifiers().map(Identifier::as_str).collect();
        assert_eq!(ids, vec!["test_x"]);
        assert_eq!(suite.get("test_x").map(|u| u.description()), Some("x"));
    }

    #[test]
    fn lookup_by_identifier() {
        let mut suite = TestSuite::named("Lookup");
        suite.bind(unit("test_x"));

        assert!(suite.is_defined("test_x"));
        assert!(!suite.is_defined("test_y"));
        assert_eq!(suite.get("test_x").map(|u| u.description()), Some("test_x"));
        assert!(suite.get("test_y").is_none());
    }

    #[test]
    fn empty_suite_reports_name_and_style() {
        let suite = TestSuite::default();
        assert!(suite.is_empty());
        assert_eq!(suite.scope_name(), crate::config::DEFAULT_SUITE_NAME);
        assert_eq!(suite.identifier_style().prefix, "test_");
    }

    #[test]
    fn into_units_hands_over_everything() {
        let mut suite = TestSuite::named("Handover");
        suite.bind(unit("test_one"));
        suite.bind(unit("test_two"));

        let units = suite.into_units();
        assert_eq!(units.len(), 2);
        assert_eq!(units[1].identifier(), "test_two");
    }
}
