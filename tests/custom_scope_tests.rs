//! Hosts can keep their own member table and still use the registration API.
//!
//! The scope below stores units in a `BTreeMap` (sorted execution order) and uses its own identifier style.

use std::collections::BTreeMap;

use testdecl::{Declarative, IdentifierStyle, Scope, SuiteConfig, TestSuite, TestUnit};

struct SortedScope {
    name: String,
    style: IdentifierStyle,
    members: BTreeMap<String, TestUnit>,
}

impl SortedScope {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            style: IdentifierStyle::new().with_prefix("check_").with_param_delimiters("[", "]"),
            members: BTreeMap::new(),
        }
    }
}

impl Scope for SortedScope {
    fn scope_name(&self) -> &str {
        &self.name
    }

    fn is_defined(&self, identifier: &str) -> bool {
        self.members.contains_key(identifier)
    }

    fn bind(&mut self, unit: TestUnit) {
        self.members.insert(unit.identifier().to_string(), unit);
    }

    fn identifier_style(&self) -> &IdentifierStyle {
        &self.style
    }
}

#[test]
fn custom_scope_uses_its_own_style() {
    let mut scope = SortedScope::new("Sorted");
    scope.test("zeta case", || {}).unwrap();
    scope.test_each("alpha case", ['b', 'a'], |_| {}).unwrap();

    let names: Vec<&str> = scope.members.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["check_alpha_case[a]", "check_alpha_case[b]", "check_zeta_case"]);
}

#[test]
fn custom_scope_reports_its_name_on_collision() {
    let mut scope = SortedScope::new("Sorted");
    scope.declare("only once").unwrap();

    let err = scope.declare("only  once").unwrap_err();
    assert_eq!(err.scope, "Sorted");
    assert_eq!(err.identifier, "check_only_once");
}

#[test]
fn scope_default_style_is_conventional() {
    struct Minimal(Vec<TestUnit>);

    impl Scope for Minimal {
        fn scope_name(&self) -> &str {
            "Minimal"
        }

        fn is_defined(&self, identifier: &str) -> bool {
            self.0.iter().any(|u| u.identifier() == identifier)
        }

        fn bind(&mut self, unit: TestUnit) {
            self.0.push(unit);
        }
    }

    let mut scope = Minimal(Vec::new());
    scope.test("uses defaults", || {}).unwrap();
    assert_eq!(scope.0[0].identifier(), "test_uses_defaults");
}

#[test]
fn suite_config_style_applies_to_test_suite() {
    let config = SuiteConfig::new("Styled").with_style(IdentifierStyle::new().with_separator("-"));
    let suite = TestSuite::define_with(config, |suite| {
        suite.test("kebab  cased name", || {})?;
        Ok(())
    })
    .unwrap();

    assert!(suite.contains("test_kebab-cased-name"));
    assert_eq!(suite.name(), "Styled");
}
