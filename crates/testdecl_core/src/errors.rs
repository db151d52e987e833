//! Shared user-facing messages used by the registrar and its stub bodies.
//!
//! Kept here so registration errors, stub failures, and tests that assert on them stay aligned.

use core::fmt::Write as _;

/// Prefix of the failure raised by a test that was declared without a body.
pub const UNIMPLEMENTED_TEST_MSG: &str = "No implementation provided for";

/// Format the failure message for a stub test.
///
/// ## Parameters
/// - `description`: the description the test was declared with, verbatim.
/// - `parameter`: the label of the parameter value, for expanded stubs.
///
/// ## Returns
/// - (`String`): e.g. `No implementation provided for verify something`.
pub fn unimplemented_message(description: &str, parameter: Option<&str>) -> String {
    let mut out = String::with_capacity(UNIMPLEMENTED_TEST_MSG.len() + description.len() + 8);
    out.push_str(UNIMPLEMENTED_TEST_MSG);
    out.push(' ');
    out.push_str(description);
    if let Some(label) = parameter {
        // Writing to String cannot fail.
        let _ = write!(&mut out, " (with |{label}|)");
    }
    out
}

/// Format the failure raised by a parameterized body that was registered without any values.
pub fn no_values_message(description: &str) -> String {
    format!("parameterized body for {description} was given no values")
}

/// Format the message for an identifier that is already bound in a scope.
pub fn duplicate_definition_message(identifier: &str, scope: &str) -> String {
    format!("{identifier} is already defined in {scope}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unimplemented_message_names_description() {
        assert_eq!(
            unimplemented_message("verify something", None),
            "No implementation provided for verify something"
        );
    }

    #[test]
    fn unimplemented_message_names_parameter_label() {
        assert_eq!(
            unimplemented_message("foo", Some("2")),
            "No implementation provided for foo (with |2|)"
        );
    }

    #[test]
    fn no_values_message_names_description() {
        assert_eq!(
            no_values_message("computed"),
            "parameterized body for computed was given no values"
        );
    }

    #[test]
    fn duplicate_message_names_identifier_and_scope() {
        assert_eq!(
            duplicate_definition_message("test_a_b", "MathTest"),
            "test_a_b is already defined in MathTest"
        );
    }
}
