#![no_main]

use libfuzzer_sys::fuzz_target;
use testdecl::{Declarative, TestSuite};
use testdecl_core::is_description_whitespace;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let mut suite = TestSuite::named("Fuzz");
        let Ok(id) = suite.declare(s) else {
            panic!("first declaration in an empty suite must succeed");
        };
        assert!(!id.as_str().chars().any(is_description_whitespace));

        // Re-declaring the same description must always collide.
        assert!(suite.declare(s).is_err());
        assert_eq!(suite.len(), 1);
    }
});
