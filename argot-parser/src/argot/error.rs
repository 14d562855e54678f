//! Error types for argot
//!
//! Two families live here and they never mix:
//!
//!     Validation errors: the input does not fit the grammar. These are recorded into a shared
//!     [ErrorMessage] while the analyzer walks the tokens, and the walk returns [Rejected] so
//!     callers can short-circuit with `?`. Nothing is thrown; the caller receives the populated
//!     error object instead of a run.
//!
//!     Hard failures: the grammar or its wiring is broken (duplicate keys in a value store,
//!     unregistered callback ids, empty aliases). These are typed errors returned as `Err` and
//!     surfaced immediately.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use super::registry::FunctionId;

/// Numeric codes written into [ErrorMessage::code].
pub mod codes {
    /// The token in an argument slot is an argument, but is still not acceptable.
    pub const INVALID_ARGUMENT: i32 = 17;
    /// Input ended where a mandatory argument was expected.
    pub const MISSING_ARGUMENT: i32 = 18;
    /// A different element appears where an option was declared.
    pub const OPTION_OUT_OF_ORDER: i32 = 22;
    /// Input ended where a mandatory option was expected.
    pub const MISSING_OPTION: i32 = 23;
    /// A function token appears where an option was declared.
    pub const OPTION_IS_FUNCTION: i32 = 27;
    /// A function token appears where an argument was declared.
    pub const ARGUMENT_IS_FUNCTION: i32 = 29;
    /// An option appears where an argument was declared.
    pub const OPTION_BEFORE_ARGUMENT: i32 = 35;
    /// The first token names no declared function.
    pub const UNKNOWN_FUNCTION: i32 = 70;
    /// The input holds nothing but the end marker.
    pub const NO_FUNCTION: i32 = 71;
    /// The cursor is not on the token of the function being analyzed.
    pub const FUNCTION_MISMATCH: i32 = 72;
    /// A trailing argument no declared child accepts.
    pub const UNDEFINED_ARGUMENT: i32 = 74;
    /// A trailing option no declared child accepts.
    pub const UNDEFINED_OPTION: i32 = 75;
    /// A second function follows a complete invocation.
    pub const UNEXPECTED_FUNCTION: i32 = 76;
    /// A trailing token of a caller-defined category.
    pub const UNEXPECTED_ELEMENT: i32 = 77;
    /// The walk ran past the end marker.
    pub const UNEXPECTED_END: i32 = 78;
}

// ============================================================================
// Validation errors
// ============================================================================

/// The error object populated by the analyzer and collector.
///
/// Every instance carries a unique id so a report can be correlated with the parse that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub code: i32,
    pub message: String,
    pub id: Uuid,
}

impl ErrorMessage {
    /// An unset error object: code `-1`, empty message, fresh id.
    pub fn new() -> Self {
        Self {
            code: -1,
            message: String::new(),
            id: Uuid::new_v4(),
        }
    }

    /// Record a validation failure. Overwrites whatever was recorded before.
    pub fn set(&mut self, code: i32, message: impl Into<String>) {
        self.code = code;
        self.message = message.into();
    }

    /// Whether a failure has been recorded.
    pub fn is_set(&self) -> bool {
        self.code >= 0
    }
}

impl Default for ErrorMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ErrorCode: {}", self.code)?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Message:{{")?;
        writeln!(f, "{}", self.message)?;
        write!(f, "}}")
    }
}

/// Marker returned by a failed analysis step. The details are in the [ErrorMessage].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected;

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input rejected by the grammar")
    }
}

impl std::error::Error for Rejected {}

// ============================================================================
// Hard failures
// ============================================================================

/// Errors building a [CliKey](super::key::CliKey).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("alias must not be empty (got {0:?})")]
    Empty(String),
}

/// Errors registering literal tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenTableError {
    #[error("token name must not be empty")]
    EmptyName,
    #[error("token '{0}' is already registered")]
    AlreadyRegistered(String),
}

/// Errors reading through a [TokenList](super::cursor::TokenList).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("cursor index {index} is outside the token stream (length {len})")]
    OutOfBounds { index: isize, len: usize },
}

/// Errors mutating or reading a [ValueOrder](super::values::ValueOrder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueOrderError {
    #[error("key '{0}' is already present in the value order")]
    DuplicateKey(String),
    #[error("key '{0}' is not present in the value order")]
    MissingKey(String),
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Errors resolving callbacks in the [FunctionRegistry](super::registry::FunctionRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("function id {0} is already registered")]
    AlreadyRegistered(FunctionId),
    #[error("function id {0} is not registered")]
    NotRegistered(FunctionId),
    #[error("function id {id} holds a {found} callback, expected {expected}")]
    ShapeMismatch {
        id: FunctionId,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors building grammar nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised by the collector pass.
///
/// `Rejected` mirrors an analyzer rejection (the [ErrorMessage] is populated); every other
/// variant is a hard failure of the grammar definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectError {
    #[error("input rejected by the grammar")]
    Rejected,
    #[error(transparent)]
    Values(#[from] ValueOrderError),
    #[error(transparent)]
    Cursor(#[from] CursorError),
}

impl From<Rejected> for CollectError {
    fn from(_: Rejected) -> Self {
        CollectError::Rejected
    }
}

impl From<KeyError> for CollectError {
    fn from(err: KeyError) -> Self {
        CollectError::Values(ValueOrderError::Key(err))
    }
}

/// Errors raised while assembling or driving a [Parser](super::parsing::Parser).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("function '{0}' overlaps an alias of an already declared function")]
    DuplicateFunction(String),
    #[error("collecting values for '{function}' failed: {source}")]
    Collect {
        function: String,
        #[source]
        source: CollectError,
    },
}
