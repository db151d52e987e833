//! Registered test units.

use std::fmt;
use std::sync::Arc;

use crate::Identifier;
use crate::testing::flunk_unimplemented;

/// Callable body of a registered unit, as the host invokes it.
pub type UnitFn = Arc<dyn Fn() + Send + Sync + 'static>;

/// One executable test: an identifier bound to a body.
///
/// Units are created once at registration and never change afterwards. Cloning is cheap (the body is shared).
#[derive(Clone)]
pub struct TestUnit {
    identifier: Identifier,
    description: String,
    parameter: Option<String>,
    body: UnitFn,
    stub: bool,
}

impl TestUnit {
    /// Create a unit with an author-supplied body.
    pub fn new(identifier: Identifier, description: &str, parameter: Option<String>, body: UnitFn) -> Self {
        Self {
            identifier,
            description: description.to_string(),
            parameter,
            body,
            stub: false,
        }
    }

    /// Create a unit whose body always fails, naming `description`.
    pub fn stub(identifier: Identifier, description: &str, parameter: Option<String>) -> Self {
        let owned_description = description.to_string();
        let owned_parameter = parameter.clone();
        let body: UnitFn = Arc::new(move || run_stub(&owned_description, owned_parameter.as_deref()));
        Self {
            identifier,
            description: description.to_string(),
            parameter,
            body,
            stub: true,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// The description the unit was declared with, verbatim.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// String form of the bound parameter value, for expanded units.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Whether the unit was declared without a body.
    pub fn is_stub(&self) -> bool {
        self.stub
    }

    /// Shared handle to the body, for hosts that schedule units themselves.
    pub fn body(&self) -> UnitFn {
        Arc::clone(&self.body)
    }

    /// Run the body once on the current thread.
    ///
    /// # Panics
    ///
    /// Panics when the test fails, including every invocation of a stub.
    pub fn invoke(&self) {
        (self.body)()
    }
}

fn run_stub(description: &str, parameter: Option<&str>) {
    flunk_unimplemented(description, parameter)
}

impl fmt::Debug for TestUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestUnit")
            .field("identifier", &self.identifier)
            .field("description", &self.description)
            .field("parameter", &self.parameter)
            .field("stub", &self.stub)
            .finish_non_exhaustive()
    }
}
