//! Testing utilities for grammar and parser tests
//!
//!     Tests should not hand-build token streams and grammars over and over. A slightly wrong
//!     hand-made grammar (an alias typo, a missing table entry) makes a test pass against the
//!     wrong thing, and every such copy must be hunted down when the demo grammar changes.
//!
//!     Two rules keep tests honest:
//!
//!         1. Build grammars through [fixtures]. The `remove`, `add`, `init` and `version`
//!            functions, their token table and their registry ids live there once.
//!         2. Check results through the fluent assertions ([assert_values], [assert_tokens])
//!            instead of poking at store internals.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use argot_parser::argot::testing::{assert_values, fixtures};
//!
//!     let mut parser = fixtures::demo_parser();
//!     let outcome = parser.parse(&["add", "notes.txt", "--i", "2"]).unwrap();
//!
//!     assert_values(outcome.function().unwrap().values())
//!         .count(2)
//!         .value("arg1", "notes.txt")
//!         .value("index", "2");
//!     ```

mod assertions;
pub mod fixtures;

pub use assertions::{TokenAssertion, ValuesAssertion};

use crate::argot::token::Token;
use crate::argot::values::ValueOrder;

/// Create an assertion builder for a value store.
pub fn assert_values(values: &ValueOrder) -> ValuesAssertion<'_> {
    ValuesAssertion { values }
}

/// Create an assertion builder for a classified token stream.
pub fn assert_tokens(tokens: &[Token]) -> TokenAssertion<'_> {
    TokenAssertion { tokens }
}
