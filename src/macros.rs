//! The `tests!` declaration macro.

/// Declare tests on a scope by description.
///
/// `$scope` names a scope binding, either an owned `mut` suite or a `&mut` to one. Each entry expands to a
/// [`crate::Declarative`] call and propagates registration errors with `?`, so the enclosing function must return a
/// `Result` whose error type converts from [`crate::DuplicateDefinitionError`].
///
/// Three forms are accepted:
///
/// - `test "description" { ... }`: a test with a body.
/// - `test "description" each VALUES, |value| { ... }`: one test per value; `value` is a reference to it.
/// - `test "description";`: a declared test with no body yet; it fails when run.
///
/// ## Examples
/// ```rust
/// use testdecl::{RegistrationResult, TestSuite, tests};
///
/// fn suite() -> RegistrationResult<TestSuite> {
///     let mut suite = TestSuite::named("ParserTest");
///     tests! { suite;
///         test "parses an empty document" {
///             assert!("".is_empty());
///         }
///         test "accepts small numbers" each [1, 2, 3], |n| {
///             assert!(*n < 10);
///         }
///         test "reports line numbers";
///     }
///     Ok(suite)
/// }
///
/// let suite = suite().unwrap();
/// assert_eq!(suite.len(), 5);
/// assert!(suite.get("test_reports_line_numbers").unwrap().is_stub());
/// ```
#[macro_export]
macro_rules! tests {
    (@decl $scope:ident;) => {};
    (@decl $scope:ident; test $description:literal ; $($rest:tt)*) => {
        $scope.declare($description)?;
        $crate::tests!(@decl $scope; $($rest)*);
    };
    (@decl $scope:ident; test $description:literal each $values:expr, |$param:ident| $body:block $($rest:tt)*) => {
        $scope.test_each($description, $values, move |$param| $body)?;
        $crate::tests!(@decl $scope; $($rest)*);
    };
    (@decl $scope:ident; test $description:literal $body:block $($rest:tt)*) => {
        $scope.test($description, move || $body)?;
        $crate::tests!(@decl $scope; $($rest)*);
    };
    ($scope:ident; $($rest:tt)*) => {{
        use $crate::Declarative as _;
        $crate::tests!(@decl $scope; $($rest)*);
    }};
}
