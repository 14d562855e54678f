use std::fmt;
use std::sync::Arc;

use super::{current_or_reject, Argument, GrammarNode};
use crate::argot::cursor::TokenList;
use crate::argot::error::{codes, CollectError, ErrorMessage, KeyError, Rejected, ValueOrderError};
use crate::argot::key::CliKey;
use crate::argot::registry::{ArgNameFn, DefaultValueFn};
use crate::argot::token::{Token, TokenCode, TokenCodes};
use crate::argot::values::ValueOrder;

/// A named switch followed by its ordered arguments.
///
/// Argument values are stored under the names produced by the option's arg-name callback
/// (`arg_name(0)`, `arg_name(1)`, ...). An option declared without arguments stores the
/// matched switch text under its own key, so its presence is visible in the store.
#[derive(Clone)]
pub struct CliOption {
    key: CliKey,
    mandatory: bool,
    arguments: Vec<Argument>,
    codes: TokenCodes,
    arg_name: Arc<ArgNameFn>,
    default_value: Arc<DefaultValueFn>,
}

impl CliOption {
    pub fn new(
        alias: &str,
        mandatory: bool,
        arguments: Vec<Argument>,
        arg_name: Arc<ArgNameFn>,
        default_value: Arc<DefaultValueFn>,
        codes: TokenCodes,
    ) -> Result<Self, KeyError> {
        Ok(Self {
            key: CliKey::new(alias)?,
            mandatory,
            arguments,
            codes,
            arg_name,
            default_value,
        })
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// An option token naming one of this option's aliases.
    pub fn accepts(&self, token: &Token) -> bool {
        token.code == self.codes.option && self.key.matches_any(&token.text)
    }

    /// Consume the switch and then one token per declared argument.
    ///
    /// Each argument token is checked the way [analyze](GrammarNode::analyze) checks it, so a
    /// stream the analyzer rejects is rejected here with the same code.
    pub fn treated_value(
        &self,
        values: &mut ValueOrder,
        tokens: &mut TokenList,
        message: &mut ErrorMessage,
    ) -> Result<(), CollectError> {
        let switch = tokens.take_current()?;
        if self.arguments.is_empty() {
            values.add(self.key.clone(), switch.text)?;
            return Ok(());
        }
        for (index, argument) in self.arguments.iter().enumerate() {
            let token = current_or_reject(tokens, message)?;
            if !argument.accepts(token) {
                argument.exception_message(token, message);
                return Err(CollectError::Rejected);
            }
            let token = tokens.take_current()?;
            values.add_alias(&(self.arg_name)(index), token.text)?;
        }
        Ok(())
    }

    pub fn default_value(&self, values: &mut ValueOrder) -> Result<(), ValueOrderError> {
        (self.default_value)(values)
    }
}

impl GrammarNode for CliOption {
    fn key(&self) -> &CliKey {
        &self.key
    }

    fn type_code(&self) -> TokenCode {
        self.codes.option
    }

    fn mandatory(&self) -> bool {
        self.mandatory
    }

    /// An absent optional option succeeds without moving the cursor.
    fn analyze(&self, tokens: &mut TokenList, message: &mut ErrorMessage) -> Result<(), Rejected> {
        let token = current_or_reject(tokens, message)?;
        if !self.accepts(token) {
            if self.mandatory {
                self.exception_message(token, message);
                return Err(Rejected);
            }
            return Ok(());
        }
        tokens.advance();
        for argument in &self.arguments {
            argument.analyze(tokens, message)?;
        }
        Ok(())
    }

    fn exception_message(&self, token: &Token, message: &mut ErrorMessage) {
        if token.code == self.codes.function {
            message.set(
                codes::OPTION_IS_FUNCTION,
                format!(
                    "The element '({})[{}]' is not an option",
                    self.codes.label(token.code),
                    token.text
                ),
            );
        } else if token.code == self.codes.end {
            message.set(
                codes::MISSING_OPTION,
                format!("Missing mandatory option '{}'", self.key),
            );
        } else {
            message.set(
                codes::OPTION_OUT_OF_ORDER,
                format!(
                    "The element '({}){}' is called before '({}){}'",
                    self.codes.label(token.code),
                    token.text,
                    self.codes.label(self.codes.option),
                    self.key
                ),
            );
        }
    }
}

impl fmt::Debug for CliOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliOption")
            .field("key", &self.key)
            .field("mandatory", &self.mandatory)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}
