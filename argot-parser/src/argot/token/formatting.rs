//! Rendering of token streams
//!
//! One token per line, `[text, Category]`, the same shape `Token`'s `Display` produces. Used by
//! the `argot --tokens` output and by snapshot tests.

use super::core::Token;

/// Render a token stream one token per line.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
