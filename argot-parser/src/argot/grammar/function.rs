use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::{current_or_reject, Element, GrammarNode};
use crate::argot::cursor::TokenList;
use crate::argot::error::{codes, CollectError, ErrorMessage, KeyError, Rejected};
use crate::argot::key::CliKey;
use crate::argot::registry::RunFn;
use crate::argot::token::{Token, TokenCode, TokenCodes};
use crate::argot::values::ValueOrder;

/// The root of one invocation: a named command with ordered children and its own value store.
#[derive(Clone)]
pub struct Function {
    key: CliKey,
    children: Vec<Element>,
    values: ValueOrder,
    codes: TokenCodes,
    run: Arc<RunFn>,
}

impl Function {
    pub fn new(
        alias: &str,
        children: Vec<Element>,
        run: Arc<RunFn>,
        codes: TokenCodes,
    ) -> Result<Self, KeyError> {
        Ok(Self {
            key: CliKey::new(alias)?,
            values: ValueOrder::with_capacity(children.len()),
            children,
            codes,
            run,
        })
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Values stored by the last successful [collect](Self::collect). Empty after a rejected
    /// parse.
    pub fn values(&self) -> &ValueOrder {
        &self.values
    }

    /// Drop the values of the previous parse.
    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    /// A function token naming one of this function's aliases.
    pub fn accepts(&self, token: &Token) -> bool {
        token.code == self.codes.function && self.key.matches_any(&token.text)
    }

    /// Replay the analysis, storing values of present children and defaults of absent ones.
    ///
    /// The store is cleared first and stays empty on failure. Rejects exactly where
    /// [analyze](GrammarNode::analyze) would, with the same code; every other error means the
    /// grammar itself is inconsistent.
    pub fn collect(
        &mut self,
        tokens: &mut TokenList,
        message: &mut ErrorMessage,
    ) -> Result<(), CollectError> {
        self.values.clear();
        let collected = self.collect_children(tokens, message);
        if collected.is_err() {
            self.values.clear();
        }
        collected
    }

    fn collect_children(
        &mut self,
        tokens: &mut TokenList,
        message: &mut ErrorMessage,
    ) -> Result<(), CollectError> {
        self.enter(tokens, message)?;
        for child in &self.children {
            let token = current_or_reject(tokens, message)?;
            if child.accepts(token) {
                child.treated_value(&mut self.values, tokens, message)?;
            } else if child.mandatory() {
                child.exception_message(token, message);
                return Err(CollectError::Rejected);
            } else {
                trace!(function = %self.key, child = %child.key(), "default value");
                child.default_value(&mut self.values)?;
            }
        }
        self.finish(tokens, message)?;
        debug!(function = %self.key, values = self.values.len(), "collected");
        Ok(())
    }

    /// Invoke the bound run callback with the collected values.
    pub fn run(&self) {
        (self.run)(&self.key, &self.values);
    }

    /// Invoke `f` in place of the bound callback.
    pub fn run_with<F>(&self, f: F)
    where
        F: FnOnce(&CliKey, &ValueOrder),
    {
        f(&self.key, &self.values);
    }

    fn enter(&self, tokens: &mut TokenList, message: &mut ErrorMessage) -> Result<(), Rejected> {
        let token = current_or_reject(tokens, message)?;
        if !self.accepts(token) {
            self.exception_message(token, message);
            return Err(Rejected);
        }
        tokens.advance();
        Ok(())
    }

    /// After the last child only the end marker may remain.
    fn finish(&self, tokens: &TokenList, message: &mut ErrorMessage) -> Result<(), Rejected> {
        let token = current_or_reject(tokens, message)?;
        if token.code == self.codes.end {
            return Ok(());
        }
        let (code, text) = if token.code == self.codes.argument {
            (
                codes::UNDEFINED_ARGUMENT,
                format!(
                    "The argument ({}) is not defined for the function ({})",
                    token.text, self.key
                ),
            )
        } else if token.code == self.codes.option {
            (
                codes::UNDEFINED_OPTION,
                format!(
                    "The option ({}) is not defined for the function ({})",
                    token.text, self.key
                ),
            )
        } else if token.code == self.codes.function {
            (
                codes::UNEXPECTED_FUNCTION,
                format!(
                    "The function ({}) cannot follow the function ({})",
                    token.text, self.key
                ),
            )
        } else {
            (
                codes::UNEXPECTED_ELEMENT,
                format!(
                    "The element '({}){}' is not defined for the function ({})",
                    self.codes.label(token.code),
                    token.text,
                    self.key
                ),
            )
        };
        message.set(code, text);
        Err(Rejected)
    }
}

impl GrammarNode for Function {
    fn key(&self) -> &CliKey {
        &self.key
    }

    fn type_code(&self) -> TokenCode {
        self.codes.function
    }

    fn mandatory(&self) -> bool {
        true
    }

    /// Validate one invocation. The cursor must be on this function's token.
    fn analyze(&self, tokens: &mut TokenList, message: &mut ErrorMessage) -> Result<(), Rejected> {
        self.enter(tokens, message)?;
        for child in &self.children {
            let token = current_or_reject(tokens, message)?;
            if child.accepts(token) {
                child.analyze(tokens, message)?;
            } else if child.mandatory() {
                child.exception_message(token, message);
                debug!(function = %self.key, code = message.code, "analysis rejected");
                return Err(Rejected);
            }
        }
        self.finish(tokens, message)
    }

    fn exception_message(&self, token: &Token, message: &mut ErrorMessage) {
        message.set(
            codes::FUNCTION_MISMATCH,
            format!(
                "The element '({}){}' is not the function '{}'",
                self.codes.label(token.code),
                token.text,
                self.key
            ),
        );
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("key", &self.key)
            .field("children", &self.children)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argot::error::ValueOrderError;
    use crate::argot::grammar::{Argument, CliOption};
    use crate::argot::token::END_MARKER;

    fn no_default(_: &mut ValueOrder) -> Result<(), ValueOrderError> {
        Ok(())
    }

    fn index_default(values: &mut ValueOrder) -> Result<(), ValueOrderError> {
        values.add_alias("index", "-1")
    }

    fn index_name(_: usize) -> String {
        "index".to_string()
    }

    fn ignore(_: &CliKey, _: &ValueOrder) {}

    fn add() -> Function {
        let codes = TokenCodes::default();
        let file = Argument::new("arg1", true, Arc::new(no_default), codes).unwrap();
        let index = CliOption::new(
            "--index/--i",
            false,
            vec![Argument::new("index", true, Arc::new(no_default), codes).unwrap()],
            Arc::new(index_name),
            Arc::new(index_default),
            codes,
        )
        .unwrap();
        Function::new("add/-a", vec![file.into(), index.into()], Arc::new(ignore), codes).unwrap()
    }

    fn on(tokens: Vec<Token>) -> TokenList {
        let mut list = TokenList::from(tokens);
        list.start();
        list
    }

    #[test]
    fn function_without_children_accepts_its_token_alone() {
        let init = Function::new("init/-i", Vec::new(), Arc::new(ignore), TokenCodes::default())
            .unwrap();
        let mut tokens = on(vec![Token::new("-i", 1), Token::new(END_MARKER, 4)]);
        let mut message = ErrorMessage::new();
        assert_eq!(init.analyze(&mut tokens, &mut message), Ok(()));
        assert_eq!(tokens.index(), 1);
    }

    #[test]
    fn cursor_must_sit_on_the_function() {
        let mut tokens = on(vec![Token::new("remove", 1), Token::new(END_MARKER, 4)]);
        let mut message = ErrorMessage::new();
        assert_eq!(add().analyze(&mut tokens, &mut message), Err(Rejected));
        assert_eq!(message.code, codes::FUNCTION_MISMATCH);
    }

    #[test]
    fn collect_injects_defaults_for_absent_options() {
        let mut function = add();
        let mut tokens = on(vec![
            Token::new("add", 1),
            Token::new("file.txt", 3),
            Token::new(END_MARKER, 4),
        ]);
        let mut message = ErrorMessage::new();
        assert_eq!(function.analyze(&mut tokens, &mut message), Ok(()));
        tokens.start();
        function.collect(&mut tokens, &mut message).unwrap();
        assert_eq!(function.values().value("arg1"), Ok("file.txt"));
        assert_eq!(function.values().value("index"), Ok("-1"));
    }

    #[test]
    fn collect_clears_previous_values() {
        let mut function = add();
        let mut message = ErrorMessage::new();
        for _ in 0..2 {
            let mut tokens = on(vec![
                Token::new("-a", 1),
                Token::new("file.txt", 3),
                Token::new("--i", 2),
                Token::new("3", 3),
                Token::new(END_MARKER, 4),
            ]);
            function.collect(&mut tokens, &mut message).unwrap();
        }
        assert_eq!(function.values().len(), 2);
        assert_eq!(function.values().value("index"), Ok("3"));
    }

    #[test]
    fn trailing_tokens_are_reported_by_category() {
        let cases = [
            (Token::new("extra", 3), codes::UNDEFINED_ARGUMENT),
            (Token::new("--force", 2), codes::UNDEFINED_OPTION),
            (Token::new("remove", 1), codes::UNEXPECTED_FUNCTION),
            (Token::new("@", 9), codes::UNEXPECTED_ELEMENT),
        ];
        for (trailing, expected) in cases {
            let mut tokens = on(vec![
                Token::new("add", 1),
                Token::new("file.txt", 3),
                trailing,
                Token::new(END_MARKER, 4),
            ]);
            let mut message = ErrorMessage::new();
            assert_eq!(add().analyze(&mut tokens, &mut message), Err(Rejected));
            assert_eq!(message.code, expected);
        }
    }

    #[test]
    fn undefined_argument_message_names_both_sides() {
        let mut tokens = on(vec![
            Token::new("add", 1),
            Token::new("a", 3),
            Token::new("b", 3),
            Token::new(END_MARKER, 4),
        ]);
        let mut message = ErrorMessage::new();
        let _ = add().analyze(&mut tokens, &mut message);
        assert_eq!(
            message.message,
            "The argument (b) is not defined for the function (add/-a)"
        );
    }

    #[test]
    fn collect_rejects_where_analyze_rejects() {
        let mut function = add();
        let mut tokens = on(vec![Token::new("add", 1), Token::new(END_MARKER, 4)]);
        let mut message = ErrorMessage::new();
        assert_eq!(
            function.collect(&mut tokens, &mut message),
            Err(CollectError::Rejected)
        );
        assert_eq!(message.code, codes::MISSING_ARGUMENT);
    }

    #[test]
    fn collect_checks_option_arguments_like_analyze() {
        let cases = [
            (vec![Token::new("--index", 2)], codes::OPTION_BEFORE_ARGUMENT),
            (Vec::new(), codes::MISSING_ARGUMENT),
        ];
        for (after_switch, expected) in cases {
            let mut stream = vec![
                Token::new("add", 1),
                Token::new("f", 3),
                Token::new("--i", 2),
            ];
            stream.extend(after_switch);
            stream.push(Token::new(END_MARKER, 4));

            let mut message = ErrorMessage::new();
            assert_eq!(
                add().analyze(&mut on(stream.clone()), &mut message),
                Err(Rejected)
            );
            assert_eq!(message.code, expected);

            let mut function = add();
            let mut message = ErrorMessage::new();
            assert_eq!(
                function.collect(&mut on(stream), &mut message),
                Err(CollectError::Rejected)
            );
            assert_eq!(message.code, expected);
            assert!(function.values().is_empty());
        }
    }

    #[test]
    fn rejected_collect_leaves_the_store_empty() {
        let mut function = add();
        let mut message = ErrorMessage::new();
        let mut tokens = on(vec![
            Token::new("add", 1),
            Token::new("notes", 3),
            Token::new(END_MARKER, 4),
        ]);
        function.collect(&mut tokens, &mut message).unwrap();
        assert_eq!(function.values().len(), 2);

        let mut tokens = on(vec![
            Token::new("add", 1),
            Token::new("notes", 3),
            Token::new("--i", 2),
            Token::new(END_MARKER, 4),
        ]);
        assert!(function.collect(&mut tokens, &mut message).is_err());
        assert!(function.values().is_empty());
    }

    #[test]
    fn run_with_sees_collected_values() {
        let mut function = add();
        let mut tokens = on(vec![
            Token::new("add", 1),
            Token::new("notes", 3),
            Token::new(END_MARKER, 4),
        ]);
        let mut message = ErrorMessage::new();
        function.collect(&mut tokens, &mut message).unwrap();
        let mut seen = None;
        function.run_with(|key, values| {
            seen = Some((key.primary().to_string(), values.value("arg1").map(str::to_string)));
        });
        assert_eq!(seen, Some(("add".to_string(), Ok("notes".to_string()))));
    }
}
