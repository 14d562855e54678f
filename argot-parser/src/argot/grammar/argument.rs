use std::fmt;
use std::sync::Arc;

use super::{current_or_reject, GrammarNode};
use crate::argot::cursor::TokenList;
use crate::argot::error::{codes, CollectError, ErrorMessage, KeyError, Rejected, ValueOrderError};
use crate::argot::key::CliKey;
use crate::argot::registry::DefaultValueFn;
use crate::argot::token::{Token, TokenCode, TokenCodes};
use crate::argot::values::ValueOrder;

/// A terminal value slot.
#[derive(Clone)]
pub struct Argument {
    key: CliKey,
    mandatory: bool,
    codes: TokenCodes,
    default_value: Arc<DefaultValueFn>,
}

impl Argument {
    pub fn new(
        alias: &str,
        mandatory: bool,
        default_value: Arc<DefaultValueFn>,
        codes: TokenCodes,
    ) -> Result<Self, KeyError> {
        Ok(Self {
            key: CliKey::new(alias)?,
            mandatory,
            codes,
            default_value,
        })
    }

    /// Any argument-category token fills the slot.
    pub fn accepts(&self, token: &Token) -> bool {
        token.code == self.codes.argument
    }

    /// Take one token and store its text under this argument's key.
    pub fn treated_value(
        &self,
        values: &mut ValueOrder,
        tokens: &mut TokenList,
    ) -> Result<(), CollectError> {
        let token = tokens.take_current()?;
        values.add(self.key.clone(), token.text)?;
        Ok(())
    }

    pub fn default_value(&self, values: &mut ValueOrder) -> Result<(), ValueOrderError> {
        (self.default_value)(values)
    }
}

impl GrammarNode for Argument {
    fn key(&self) -> &CliKey {
        &self.key
    }

    fn type_code(&self) -> TokenCode {
        self.codes.argument
    }

    fn mandatory(&self) -> bool {
        self.mandatory
    }

    fn analyze(&self, tokens: &mut TokenList, message: &mut ErrorMessage) -> Result<(), Rejected> {
        let token = current_or_reject(tokens, message)?;
        if !self.accepts(token) {
            self.exception_message(token, message);
            return Err(Rejected);
        }
        tokens.advance();
        Ok(())
    }

    fn exception_message(&self, token: &Token, message: &mut ErrorMessage) {
        if token.code == self.codes.function {
            message.set(
                codes::ARGUMENT_IS_FUNCTION,
                format!(
                    "The element '({})[{}]' is not an argument",
                    self.codes.label(token.code),
                    token.text
                ),
            );
        } else if token.code == self.codes.end {
            message.set(
                codes::MISSING_ARGUMENT,
                format!("Missing mandatory argument '{}'", self.key),
            );
        } else if token.code != self.codes.argument {
            message.set(
                codes::OPTION_BEFORE_ARGUMENT,
                format!(
                    "The option '{}' was defined before the argument '{}'",
                    token.text, self.key
                ),
            );
        } else {
            message.set(
                codes::INVALID_ARGUMENT,
                format!("({}) Invalid argument", token.text),
            );
        }
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("key", &self.key)
            .field("mandatory", &self.mandatory)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argot::token::END_MARKER;

    fn no_default(_: &mut ValueOrder) -> Result<(), ValueOrderError> {
        Ok(())
    }

    fn argument(mandatory: bool) -> Argument {
        Argument::new("arg1", mandatory, Arc::new(no_default), TokenCodes::default()).unwrap()
    }

    fn on(tokens: Vec<Token>) -> TokenList {
        let mut list = TokenList::from(tokens);
        list.start();
        list
    }

    #[test]
    fn accepts_an_argument_token_and_advances() {
        let mut tokens = on(vec![Token::new("loppo", 3), Token::new(END_MARKER, 4)]);
        let mut message = ErrorMessage::new();
        assert_eq!(argument(true).analyze(&mut tokens, &mut message), Ok(()));
        assert_eq!(tokens.index(), 1);
        assert!(!message.is_set());
    }

    #[test]
    fn function_token_in_argument_slot() {
        let mut tokens = on(vec![Token::new("add", 1), Token::new(END_MARKER, 4)]);
        let mut message = ErrorMessage::new();
        assert_eq!(argument(true).analyze(&mut tokens, &mut message), Err(Rejected));
        assert_eq!(message.code, codes::ARGUMENT_IS_FUNCTION);
        assert_eq!(message.message, "The element '(Function)[add]' is not an argument");
        assert_eq!(tokens.index(), 0);
    }

    #[test]
    fn option_token_in_argument_slot() {
        let mut tokens = on(vec![Token::new("--i", 2), Token::new(END_MARKER, 4)]);
        let mut message = ErrorMessage::new();
        assert_eq!(argument(true).analyze(&mut tokens, &mut message), Err(Rejected));
        assert_eq!(message.code, codes::OPTION_BEFORE_ARGUMENT);
    }

    #[test]
    fn end_marker_in_argument_slot() {
        let mut tokens = on(vec![Token::new(END_MARKER, 4)]);
        let mut message = ErrorMessage::new();
        assert_eq!(argument(true).analyze(&mut tokens, &mut message), Err(Rejected));
        assert_eq!(message.code, codes::MISSING_ARGUMENT);
        assert_eq!(message.message, "Missing mandatory argument 'arg1'");
    }

    #[test]
    fn running_off_the_stream_is_malformed_input() {
        let mut tokens = on(vec![Token::new(END_MARKER, 4)]);
        tokens.advance();
        let mut message = ErrorMessage::new();
        assert_eq!(argument(true).analyze(&mut tokens, &mut message), Err(Rejected));
        assert_eq!(message.code, codes::UNEXPECTED_END);
    }

    #[test]
    fn treated_value_stores_under_the_alias() {
        let mut tokens = on(vec![Token::new("loppo", 3), Token::new(END_MARKER, 4)]);
        let mut values = ValueOrder::new();
        argument(true).treated_value(&mut values, &mut tokens).unwrap();
        assert_eq!(values.value("arg1"), Ok("loppo"));
        assert_eq!(tokens.index(), 1);
    }
}
