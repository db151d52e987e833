//! Property-based tests for identifier derivation and registration.
//!
//! These use proptest to check the naming and collision invariants across many generated descriptions.

use proptest::prelude::*;
use testdecl::{Declarative, TestSuite};
use testdecl_core::{IdentifierStyle, base_identifier, is_description_whitespace, normalize_description};

/// Descriptions built from words separated by arbitrary ASCII whitespace runs.
fn spaced_description() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    (1usize..6).prop_flat_map(|n| {
        (
            prop::collection::vec("[a-z0-9]{1,8}", n),
            prop::collection::vec("[ \t\n\r\x0B\x0C]{1,4}", n - 1),
        )
    })
}

fn join(words: &[String], gaps: &[String]) -> String {
    let mut out = words[0].clone();
    for (gap, word) in gaps.iter().zip(&words[1..]) {
        out.push_str(gap);
        out.push_str(word);
    }
    out
}

proptest! {
    /// Property: internal whitespace runs become single underscores and nothing else changes.
    #[test]
    fn internal_runs_become_single_underscores((words, gaps) in spaced_description()) {
        let description = join(&words, &gaps);
        let id = base_identifier(&description, &IdentifierStyle::default());

        prop_assert_eq!(id.as_str(), format!("test_{}", words.join("_")));
        prop_assert!(!id.as_str().chars().any(is_description_whitespace));
        prop_assert!(!id.as_str().contains("__"));
    }

    /// Property: normalization is idempotent.
    #[test]
    fn normalization_is_idempotent(description in any::<String>()) {
        let once = normalize_description(&description, "_");
        let twice = normalize_description(&once, "_");
        prop_assert_eq!(once, twice);
    }

    /// Property: normalization never leaves description whitespace behind.
    #[test]
    fn normalization_removes_all_whitespace(description in any::<String>()) {
        let normalized = normalize_description(&description, "_");
        prop_assert!(!normalized.chars().any(is_description_whitespace));
    }

    /// Property: any two descriptions that differ only in whitespace runs collide in one suite.
    #[test]
    fn whitespace_variants_collide((words, gaps) in spaced_description()) {
        prop_assume!(!gaps.is_empty());
        let spaced = join(&words, &gaps);
        let single: Vec<String> = gaps.iter().map(|_| " ".to_string()).collect();
        let tidy = join(&words, &single);

        let mut suite = TestSuite::named("PropertySuite");
        suite.declare(&spaced).unwrap();
        prop_assert!(suite.declare(&tidy).is_err());
        prop_assert_eq!(suite.len(), 1);
    }

    /// Property: expanding over distinct labels registers exactly one unit per value.
    #[test]
    fn expansion_registers_one_unit_per_distinct_value(values in prop::collection::btree_set(any::<u16>(), 0..20)) {
        let mut suite = TestSuite::named("ExpansionSuite");
        let registered = suite.test_each("value", values.clone(), |_| {}).unwrap();

        let expected = values.len().max(1);
        prop_assert_eq!(registered.len(), expected);
        prop_assert_eq!(suite.len(), expected);
    }
}
