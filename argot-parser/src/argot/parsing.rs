//! Parse orchestration
//!
//!     A [Parser] owns the token table and the declared functions. One call to
//!     [parse](Parser::parse) runs the whole pipeline:
//!
//!         raw strings -> TokenTable -> TokenList -> pick function -> analyze -> reset -> collect
//!
//!     The function is picked by its first token: the first declared function whose alias
//!     matches wins. Validation failures come back as [Outcome::Rejected] carrying the populated
//!     [ErrorMessage]; only a broken grammar produces an `Err`. A rejected parse leaves the
//!     selected function with an empty value store.

use tracing::debug;

use super::cursor::TokenList;
use super::error::{codes, CollectError, ErrorMessage, ParserError};
use super::grammar::{Function, GrammarNode};
use super::key::CliKey;
use super::token::TokenTable;

/// Result of a successful pipeline run.
#[derive(Debug)]
pub enum Outcome<'p> {
    /// The input validated and the function's values are collected.
    Ready(&'p Function),
    /// The input does not fit the grammar.
    Rejected(ErrorMessage),
}

impl<'p> Outcome<'p> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }

    pub fn function(&self) -> Option<&'p Function> {
        match self {
            Outcome::Ready(function) => Some(function),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        match self {
            Outcome::Ready(_) => None,
            Outcome::Rejected(message) => Some(message),
        }
    }
}

/// Result of [Parser::dispatch].
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// The run callback of this function was invoked.
    Ran(CliKey),
    Rejected(ErrorMessage),
}

#[derive(Debug, Clone)]
pub struct Parser {
    table: TokenTable,
    functions: Vec<Function>,
}

impl Parser {
    pub fn new(table: TokenTable) -> Self {
        Self {
            table,
            functions: Vec::new(),
        }
    }

    /// Declare a function. Its aliases must not overlap those of any declared function.
    pub fn add_function(&mut self, function: Function) -> Result<(), ParserError> {
        if self
            .functions
            .iter()
            .any(|declared| declared.key().overlaps(function.key()))
        {
            return Err(ParserError::DuplicateFunction(function.key().to_string()));
        }
        self.functions.push(function);
        Ok(())
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn function(&self, alias: &str) -> Option<&Function> {
        self.functions
            .iter()
            .find(|function| function.key().matches(alias))
    }

    pub fn table(&self) -> &TokenTable {
        &self.table
    }

    pub fn tokenize<S: AsRef<str>>(&self, args: &[S]) -> TokenList {
        self.table.tokenize(args)
    }

    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<Outcome<'_>, ParserError> {
        let end = self.table.codes().end;
        let mut tokens = self.table.tokenize(args);
        let mut message = ErrorMessage::new();
        tokens.start();

        let first = match tokens.current() {
            Ok(token) if token.code != end => token.clone(),
            _ => {
                message.set(codes::NO_FUNCTION, "No function was given");
                return Ok(Outcome::Rejected(message));
            }
        };
        let Some(index) = self
            .functions
            .iter()
            .position(|function| function.accepts(&first))
        else {
            debug!(token = %first.text, "no function matches");
            message.set(
                codes::UNKNOWN_FUNCTION,
                format!("No function matches '{}'", first.text),
            );
            return Ok(Outcome::Rejected(message));
        };

        let function = &mut self.functions[index];
        debug!(function = %function.key(), tokens = tokens.len(), "selected");
        if function.analyze(&mut tokens, &mut message).is_err() {
            function.clear_values();
            return Ok(Outcome::Rejected(message));
        }

        tokens.start();
        match function.collect(&mut tokens, &mut message) {
            Ok(()) => Ok(Outcome::Ready(function)),
            Err(CollectError::Rejected) => Ok(Outcome::Rejected(message)),
            Err(source) => Err(ParserError::Collect {
                function: function.key().to_string(),
                source,
            }),
        }
    }

    /// Parse, then run the bound callback of the selected function.
    pub fn dispatch<S: AsRef<str>>(&mut self, args: &[S]) -> Result<Dispatch, ParserError> {
        match self.parse(args)? {
            Outcome::Ready(function) => {
                function.run();
                Ok(Dispatch::Ran(function.key().clone()))
            }
            Outcome::Rejected(message) => Ok(Dispatch::Rejected(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argot::testing::fixtures;

    #[test]
    fn empty_input_names_no_function() {
        let mut parser = fixtures::demo_parser();
        let outcome = parser.parse::<&str>(&[]).unwrap();
        assert_eq!(outcome.error().map(|e| e.code), Some(codes::NO_FUNCTION));
    }

    #[test]
    fn unknown_first_token() {
        let mut parser = fixtures::demo_parser();
        let outcome = parser.parse(&["frotz"]).unwrap();
        let error = outcome.error().unwrap();
        assert_eq!(error.code, codes::UNKNOWN_FUNCTION);
        assert_eq!(error.message, "No function matches 'frotz'");
    }

    #[test]
    fn overlapping_functions_are_refused() {
        let mut parser = fixtures::demo_parser();
        let duplicate = fixtures::init_function(&fixtures::registry(), "setup/-i");
        assert_eq!(
            parser.add_function(duplicate),
            Err(ParserError::DuplicateFunction("setup/-i".to_string()))
        );
    }

    #[test]
    fn lookup_by_any_alias() {
        let parser = fixtures::demo_parser();
        assert_eq!(parser.function("-r").map(|f| f.key().primary()), Some("remove"));
        assert!(parser.function("frotz").is_none());
    }
}
