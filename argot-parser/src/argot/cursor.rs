//! Forward-only cursor over a classified token stream.
//!
//! The cursor starts before the first token (index `-1`). Grammar nodes examine the token under
//! the cursor with [TokenList::current] and step past it with [TokenList::advance]. Movement is
//! never clamped: stepping past the end is allowed and the next read reports
//! [CursorError::OutOfBounds], which the analyzer treats as malformed input.

use super::error::CursorError;
use super::token::{Token, TokenCode};

/// Position-indexed view over an immutable token array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenList {
    index: isize,
    tokens: Box<[Token]>,
}

impl TokenList {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            index: -1,
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Current position; `-1` before the first [advance](Self::advance).
    pub fn index(&self) -> isize {
        self.index
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token under the cursor.
    pub fn current(&self) -> Result<&Token, CursorError> {
        usize::try_from(self.index)
            .ok()
            .and_then(|index| self.tokens.get(index))
            .ok_or(CursorError::OutOfBounds {
                index: self.index,
                len: self.tokens.len(),
            })
    }

    pub fn current_text(&self) -> Result<&str, CursorError> {
        self.current().map(Token::text)
    }

    pub fn current_code(&self) -> Result<TokenCode, CursorError> {
        self.current().map(Token::code)
    }

    pub fn advance(&mut self) {
        self.move_by(1);
    }

    pub fn move_by(&mut self, count: usize) {
        self.index = self.index.saturating_add_unsigned(count);
    }

    /// Read the token under the cursor, then advance by one.
    pub fn take_current(&mut self) -> Result<Token, CursorError> {
        let token = self.current()?.clone();
        self.advance();
        Ok(token)
    }

    /// Return to the position before the first token.
    pub fn reset(&mut self) {
        self.index = -1;
    }

    /// Reset and step onto the first token.
    pub fn start(&mut self) {
        self.reset();
        self.advance();
    }

    /// Drop the backing tokens. The cursor is unusable afterwards.
    pub fn clear(&mut self) {
        self.tokens = Box::default();
        self.index = -1;
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        Self {
            index: -1,
            tokens: tokens.into_boxed_slice(),
        }
    }
}
