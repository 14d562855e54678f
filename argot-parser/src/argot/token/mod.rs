//! Token types and classification.
//!
//!     Every raw argument string becomes exactly one [Token]: its text plus a numeric category
//!     code. The classifier ([TokenTable]) knows nothing about grammar; it only maps literal
//!     strings the caller registered to their codes, hands everything else the argument code,
//!     and closes the stream with a synthetic end marker.
//!
//! Categories
//!
//!     The default categories are listed in [DefaultToken]. Callers can use any other integer
//!     code for their own categories; the only guarantee the classifier makes is that
//!     unregistered strings get the argument code and the last token gets the end code.
//!     [TokenCodes] is the set of codes actually in effect for a table and the grammar built
//!     against it.

pub mod core;
pub mod formatting;
pub mod table;

pub use core::{DefaultToken, Token, TokenCode, TokenCodes, END_MARKER};
pub use formatting::render_tokens;
pub use table::TokenTable;
