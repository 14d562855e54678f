//! The demo grammar served by the `argot` binary
//!
//!     remove/-r   <arg1>
//!     add/-a      <arg1> [--index/--i <index>]
//!     init/-i
//!     version/-v
//!
//! Run callbacks only trace; the binary prints the collected values itself.

use argot_config::TokenConfig;
use argot_parser::argot::{
    CliKey, FunctionId, FunctionRegistry, Grammar, GrammarError, Parser, ParserError,
    RegistryError, TokenTableError, ValueOrder, ValueOrderError,
};
use thiserror::Error;
use tracing::debug;

/// Building the demo grammar failed. Always a bug or a bad token configuration.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("cannot register demo tokens: {0}")]
    Tokens(#[from] TokenTableError),
    #[error("cannot register demo callbacks: {0}")]
    Registry(#[from] RegistryError),
    #[error("cannot declare demo grammar: {0}")]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Parser(#[from] ParserError),
}

const RUN: FunctionId = 1;
const NO_DEFAULT: FunctionId = 2;
const INDEX_DEFAULT: FunctionId = 3;
const INDEX_NAME: FunctionId = 4;

/// Value stored for `index` when `--index` is not given.
pub const DEFAULT_INDEX: &str = "-1";

fn trace_run(key: &CliKey, values: &ValueOrder) {
    debug!(function = %key, values = values.len(), "run");
}

fn index_default(values: &mut ValueOrder) -> Result<(), ValueOrderError> {
    values.add_alias("index", DEFAULT_INDEX)
}

fn registry() -> Result<FunctionRegistry, RegistryError> {
    let mut registry = FunctionRegistry::new();
    registry.add_run(RUN, trace_run)?;
    registry.add_default_value(NO_DEFAULT, |_| Ok(()))?;
    registry.add_default_value(INDEX_DEFAULT, index_default)?;
    registry.add_arg_name(INDEX_NAME, |_| "index".to_string())?;
    Ok(registry)
}

pub fn parser(tokens: &TokenConfig) -> Result<Parser, DemoError> {
    let codes = tokens.codes();
    let mut table = tokens.table();
    table.add_tokens(
        codes.function,
        ["remove", "-r", "add", "-a", "init", "-i", "version", "-v"],
    )?;
    table.add_tokens(codes.option, ["--index", "--i"])?;

    let registry = registry()?;
    let grammar = Grammar::new(&registry).with_codes(codes);

    let remove = grammar.function(
        "remove/-r",
        RUN,
        vec![grammar.argument("arg1", true, NO_DEFAULT)?.into()],
    )?;
    let index = grammar.option(
        "--index/--i",
        false,
        INDEX_NAME,
        INDEX_DEFAULT,
        vec![grammar.argument("index", true, NO_DEFAULT)?],
    )?;
    let add = grammar.function(
        "add/-a",
        RUN,
        vec![grammar.argument("arg1", true, NO_DEFAULT)?.into(), index.into()],
    )?;
    let init = grammar.function("init/-i", RUN, Vec::new())?;
    let version = grammar.function("version/-v", RUN, Vec::new())?;

    let mut parser = Parser::new(table);
    for function in [remove, add, init, version] {
        parser.add_function(function)?;
    }
    Ok(parser)
}
