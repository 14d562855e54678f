//! Grammar nodes and the analyzer / collector engine
//!
//!     A grammar is a small tree declared up front:
//!
//!         Function        "add/-a"          owns ordered children and a value store
//!           ├── Argument  "file"            terminal value slot
//!           └── Option    "--index/--i"     owns ordered arguments
//!                 └── Argument "index"
//!
//!     The order of a node's children is the order their tokens must appear in after the
//!     node's own token.
//!
//! Two Passes
//!
//!     Parsing one invocation walks the token cursor over the function's children twice.
//!
//!         1. analyze: validation only. Each declared child is either present (its category,
//!            and for options its alias, matches the token under the cursor), absent and
//!            optional (skipped), or absent and mandatory (the walk fails). After the last
//!            child the cursor must sit on the end marker. Failures are written into the
//!            shared [ErrorMessage](crate::argot::error::ErrorMessage) and returned as
//!            [Rejected](crate::argot::error::Rejected). Nothing is stored.
//!
//!         2. collect: after the cursor is reset, the same decisions are replayed, this time
//!            storing the values of present children and asking absent optional children to
//!            inject their defaults.
//!
//!     Keeping the passes separate means a store is only ever filled for input that fully
//!     validated. The first declared child that matches wins; there is no backtracking across
//!     siblings.
//!
//! Building
//!
//!     Nodes resolve their callbacks from a [FunctionRegistry] when built. [Grammar] bundles the
//!     registry with the token codes in effect so declarations stay short.

mod argument;
mod function;
mod option;

pub use argument::Argument;
pub use function::Function;
pub use option::CliOption;

use crate::argot::cursor::TokenList;
use crate::argot::error::{
    codes, CollectError, ErrorMessage, GrammarError, Rejected, ValueOrderError,
};
use crate::argot::key::CliKey;
use crate::argot::registry::{ArgNameFn, DefaultValueFn, FunctionId, FunctionRegistry, RunFn};
use crate::argot::token::{Token, TokenCode, TokenCodes};
use crate::argot::values::ValueOrder;

/// Capabilities shared by every grammar node.
pub trait GrammarNode {
    fn key(&self) -> &CliKey;

    /// The token category this node accepts.
    fn type_code(&self) -> TokenCode;

    fn mandatory(&self) -> bool;

    /// Split `alias` on separators and check it against this node's key.
    fn is_alias(&self, alias: &str) -> bool {
        self.key().matches_any(alias)
    }

    /// Validate the tokens this node is responsible for, advancing past them.
    fn analyze(&self, tokens: &mut TokenList, message: &mut ErrorMessage) -> Result<(), Rejected>;

    /// Describe why `token` cannot stand where this node was declared.
    fn exception_message(&self, token: &Token, message: &mut ErrorMessage);
}

/// A child of a [Function]: an option or a positional argument.
#[derive(Debug, Clone)]
pub enum Element {
    Option(CliOption),
    Argument(Argument),
}

impl Element {
    /// Whether `token` is this element, as opposed to an element declared elsewhere.
    pub fn accepts(&self, token: &Token) -> bool {
        match self {
            Element::Option(option) => option.accepts(token),
            Element::Argument(argument) => argument.accepts(token),
        }
    }

    /// Store the values of a present element. The cursor is on the element's first token.
    pub fn treated_value(
        &self,
        values: &mut ValueOrder,
        tokens: &mut TokenList,
        message: &mut ErrorMessage,
    ) -> Result<(), CollectError> {
        match self {
            Element::Option(option) => option.treated_value(values, tokens, message),
            Element::Argument(argument) => argument.treated_value(values, tokens),
        }
    }

    /// Inject the value of an absent optional element.
    pub fn default_value(&self, values: &mut ValueOrder) -> Result<(), ValueOrderError> {
        match self {
            Element::Option(option) => option.default_value(values),
            Element::Argument(argument) => argument.default_value(values),
        }
    }
}

impl GrammarNode for Element {
    fn key(&self) -> &CliKey {
        match self {
            Element::Option(option) => option.key(),
            Element::Argument(argument) => argument.key(),
        }
    }

    fn type_code(&self) -> TokenCode {
        match self {
            Element::Option(option) => option.type_code(),
            Element::Argument(argument) => argument.type_code(),
        }
    }

    fn mandatory(&self) -> bool {
        match self {
            Element::Option(option) => option.mandatory(),
            Element::Argument(argument) => argument.mandatory(),
        }
    }

    fn analyze(&self, tokens: &mut TokenList, message: &mut ErrorMessage) -> Result<(), Rejected> {
        match self {
            Element::Option(option) => option.analyze(tokens, message),
            Element::Argument(argument) => argument.analyze(tokens, message),
        }
    }

    fn exception_message(&self, token: &Token, message: &mut ErrorMessage) {
        match self {
            Element::Option(option) => option.exception_message(token, message),
            Element::Argument(argument) => argument.exception_message(token, message),
        }
    }
}

impl From<Argument> for Element {
    fn from(argument: Argument) -> Self {
        Element::Argument(argument)
    }
}

impl From<CliOption> for Element {
    fn from(option: CliOption) -> Self {
        Element::Option(option)
    }
}

/// Declares grammar nodes against a populated registry.
#[derive(Debug, Clone, Copy)]
pub struct Grammar<'r> {
    registry: &'r FunctionRegistry,
    codes: TokenCodes,
}

impl<'r> Grammar<'r> {
    pub fn new(registry: &'r FunctionRegistry) -> Self {
        Self {
            registry,
            codes: TokenCodes::default(),
        }
    }

    /// Use the codes of the token table the input will be classified with.
    pub fn with_codes(mut self, codes: TokenCodes) -> Self {
        self.codes = codes;
        self
    }

    pub fn codes(&self) -> TokenCodes {
        self.codes
    }

    pub fn argument(
        &self,
        alias: &str,
        mandatory: bool,
        default_value: FunctionId,
    ) -> Result<Argument, GrammarError> {
        let default_value = self.registry.get::<DefaultValueFn>(default_value)?;
        Ok(Argument::new(alias, mandatory, default_value, self.codes)?)
    }

    pub fn option(
        &self,
        alias: &str,
        mandatory: bool,
        arg_name: FunctionId,
        default_value: FunctionId,
        arguments: Vec<Argument>,
    ) -> Result<CliOption, GrammarError> {
        let arg_name = self.registry.get::<ArgNameFn>(arg_name)?;
        let default_value = self.registry.get::<DefaultValueFn>(default_value)?;
        Ok(CliOption::new(
            alias,
            mandatory,
            arguments,
            arg_name,
            default_value,
            self.codes,
        )?)
    }

    pub fn function(
        &self,
        alias: &str,
        run: FunctionId,
        children: Vec<Element>,
    ) -> Result<Function, GrammarError> {
        let run = self.registry.get::<RunFn>(run)?;
        Ok(Function::new(alias, children, run, self.codes)?)
    }
}

/// The token under the cursor, or a rejection when the walk ran off the stream.
pub(crate) fn current_or_reject<'t>(
    tokens: &'t TokenList,
    message: &mut ErrorMessage,
) -> Result<&'t Token, Rejected> {
    tokens.current().map_err(|_| {
        message.set(
            codes::UNEXPECTED_END,
            format!("Unexpected end of input at position {}", tokens.index()),
        );
        Rejected
    })
}
