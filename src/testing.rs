//! Failure reporting for registered bodies.
//!
//! The host harness treats a panicking body as a failed test, so failing is a panic. Stub bodies (tests declared
//! without an implementation) go through [`flunk`] like any other explicit failure.

use testdecl_core::errors::unimplemented_message;

/// Fail the current test with a message.
///
/// # Panics
///
/// Always panics with the provided `msg`.
#[cold]
#[track_caller]
pub fn flunk(msg: impl AsRef<str>) -> ! {
    panic!("{}", msg.as_ref());
}

/// Fail the current test because it was declared without a body.
///
/// # Panics
///
/// Always panics with `No implementation provided for <description>`.
#[cold]
#[track_caller]
pub fn flunk_unimplemented(description: &str, parameter: Option<&str>) -> ! {
    flunk(unimplemented_message(description, parameter))
}

/// Extract the message from a panic payload, if it carries one.
///
/// Hosts that run bodies under `catch_unwind` can use this to report the failure text.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> Option<&str> {
    if let Some(s) = payload.downcast_ref::<String>() {
        Some(s.as_str())
    } else {
        payload.downcast_ref::<&'static str>().copied()
    }
}
