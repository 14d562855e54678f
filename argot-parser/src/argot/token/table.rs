//! The token classifier
//!
//! A [TokenTable] maps literal strings to category codes. Registration happens once, up front;
//! classification only reads the table.

use std::collections::HashMap;

use tracing::trace;

use super::core::{Token, TokenCode, TokenCodes, END_MARKER};
use crate::argot::cursor::TokenList;
use crate::argot::error::TokenTableError;

/// Registered literal tokens plus the codes used for everything else.
#[derive(Debug, Clone)]
pub struct TokenTable {
    tokens: HashMap<String, TokenCode>,
    codes: TokenCodes,
    end_marker: String,
}

impl TokenTable {
    /// An empty table using the default codes and the `(end-f)` end marker.
    pub fn new() -> Self {
        Self::with_codes(TokenCodes::default())
    }

    pub fn with_codes(codes: TokenCodes) -> Self {
        Self {
            tokens: HashMap::new(),
            codes,
            end_marker: END_MARKER.to_string(),
        }
    }

    /// Replace the text of the synthetic end token.
    pub fn with_end_marker(mut self, end_marker: impl Into<String>) -> Self {
        self.end_marker = end_marker.into();
        self
    }

    pub fn codes(&self) -> TokenCodes {
        self.codes
    }

    pub fn end_marker(&self) -> &str {
        &self.end_marker
    }

    /// Register one literal string under `code`.
    pub fn add_token(&mut self, code: TokenCode, name: &str) -> Result<(), TokenTableError> {
        if name.is_empty() {
            return Err(TokenTableError::EmptyName);
        }
        if self.tokens.contains_key(name) {
            return Err(TokenTableError::AlreadyRegistered(name.to_string()));
        }
        self.tokens.insert(name.to_string(), code);
        Ok(())
    }

    /// Register several literal strings under the same code. Stops at the first failure.
    pub fn add_tokens<I, S>(&mut self, code: TokenCode, names: I) -> Result<(), TokenTableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_token(code, name.as_ref())?;
        }
        Ok(())
    }

    pub fn code_of(&self, name: &str) -> Option<TokenCode> {
        self.tokens.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Classify raw argument strings. The result always ends with exactly one end token.
    pub fn classify<S: AsRef<str>>(&self, args: &[S]) -> Vec<Token> {
        let mut result = Vec::with_capacity(args.len() + 1);
        for arg in args {
            let text = arg.as_ref();
            let code = self.code_of(text).unwrap_or(self.codes.argument);
            trace!(text, code, "classified argument");
            result.push(Token::new(text, code));
        }
        result.push(Token::new(self.end_marker.as_str(), self.codes.end));
        result
    }

    /// Classify and wrap the stream in a cursor positioned before the first token.
    pub fn tokenize<S: AsRef<str>>(&self, args: &[S]) -> TokenList {
        TokenList::new(self.classify(args))
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::new()
    }
}
