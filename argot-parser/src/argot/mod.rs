//! Main module for argot library functionality

pub mod cursor;
pub mod error;
pub mod grammar;
pub mod key;
pub mod parsing;
pub mod registry;
pub mod testing;
pub mod token;
pub mod values;

pub use cursor::TokenList;
pub use error::{
    codes, CollectError, CursorError, ErrorMessage, GrammarError, KeyError, ParserError, RegistryError,
    Rejected, TokenTableError, ValueOrderError,
};
pub use grammar::{Argument, CliOption, Element, Function, Grammar, GrammarNode};
pub use key::CliKey;
pub use parsing::{Dispatch, Outcome, Parser};
pub use registry::{Callback, FunctionId, FunctionRegistry};
pub use token::{DefaultToken, Token, TokenCode, TokenCodes, TokenTable};
pub use values::ValueOrder;
