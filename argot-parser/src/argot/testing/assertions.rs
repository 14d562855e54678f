//! Fluent assertions over value stores and token streams

use crate::argot::token::{Token, TokenCode};
use crate::argot::values::ValueOrder;

pub struct ValuesAssertion<'a> {
    pub(crate) values: &'a ValueOrder,
}

impl<'a> ValuesAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.values.len(),
            expected,
            "Expected {} values, found {}: {:?}",
            expected,
            self.values.len(),
            self.values
        );
        self
    }

    pub fn empty(self) -> Self {
        self.count(0)
    }

    /// The entry reachable through `alias` holds `expected`.
    pub fn value(self, alias: &str, expected: &str) -> Self {
        match self.values.get(alias) {
            Some(actual) => assert_eq!(
                actual, expected,
                "Expected '{}' to be '{}', but got '{}'",
                alias, expected, actual
            ),
            None => panic!("Expected a value for '{}', found none in {:?}", alias, self.values),
        }
        self
    }

    pub fn absent(self, alias: &str) -> Self {
        assert!(
            !self.values.contains_key(alias),
            "Expected no value for '{}', found {:?}",
            alias,
            self.values.get(alias)
        );
        self
    }

    /// Primary aliases of the stored keys, in insertion order.
    pub fn keys(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.values.keys().map(|key| key.primary()).collect();
        assert_eq!(actual, expected, "Unexpected key order");
        self
    }
}

pub struct TokenAssertion<'a> {
    pub(crate) tokens: &'a [Token],
}

impl<'a> TokenAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.tokens.len(),
            expected,
            "Expected {} tokens, found {}: {:?}",
            expected,
            self.tokens.len(),
            self.tokens
        );
        self
    }

    /// The token at `index` has the given text and code.
    pub fn token(self, index: usize, text: &str, code: TokenCode) -> Self {
        let token = self.tokens.get(index).unwrap_or_else(|| {
            panic!(
                "Expected a token at {}, stream has {}",
                index,
                self.tokens.len()
            )
        });
        assert_eq!(
            (token.text(), token.code()),
            (text, code),
            "Token {} mismatch",
            index
        );
        self
    }

    /// Codes of the whole stream, in order.
    pub fn codes(self, expected: &[TokenCode]) -> Self {
        let actual: Vec<TokenCode> = self.tokens.iter().map(Token::code).collect();
        assert_eq!(actual, expected, "Unexpected token codes");
        self
    }

    /// The stream is terminated by exactly one token of code `end`.
    pub fn ends_with_marker(self, marker: &str, end: TokenCode) -> Self {
        let ends = self.tokens.iter().filter(|token| token.code() == end).count();
        assert_eq!(ends, 1, "Expected exactly one end token in {:?}", self.tokens);
        match self.tokens.last() {
            Some(last) => assert_eq!((last.text(), last.code()), (marker, end)),
            None => panic!("Expected a terminated stream, found an empty one"),
        }
        self
    }
}
