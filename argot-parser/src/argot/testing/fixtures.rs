//! Shared grammar fixtures
//!
//!     The demo grammar used across the test suite:
//!
//!         remove/-r   <arg1>
//!         add/-a      <arg1> [--index/--i <index>]
//!         init/-i
//!         version/-v
//!
//!     Run callbacks are no-ops; tests observe values through
//!     [Function::values](crate::argot::grammar::Function::values) or
//!     [Function::run_with](crate::argot::grammar::Function::run_with).
//!
//!     Fixtures panic on a broken definition, which is a bug in the fixture itself.

use crate::argot::error::{RegistryError, TokenTableError, ValueOrderError};
use crate::argot::grammar::{Function, Grammar};
use crate::argot::parsing::Parser;
use crate::argot::registry::FunctionRegistry;
use crate::argot::token::{DefaultToken, TokenTable};
use crate::argot::values::ValueOrder;

/// Registry ids of the demo callbacks.
pub mod ids {
    use crate::argot::registry::FunctionId;

    pub const RUN: FunctionId = 1;
    pub const NO_DEFAULT: FunctionId = 10;
    pub const INDEX_DEFAULT: FunctionId = 11;
    pub const INDEX_NAME: FunctionId = 20;
}

/// Value injected for `index` when `--index` is absent.
pub const INDEX_DEFAULT: &str = "-1";

pub fn index_default(values: &mut ValueOrder) -> Result<(), ValueOrderError> {
    values.add_alias("index", INDEX_DEFAULT)
}

pub fn registry() -> FunctionRegistry {
    build_registry().expect("demo registry ids are distinct")
}

fn build_registry() -> Result<FunctionRegistry, RegistryError> {
    let mut registry = FunctionRegistry::new();
    registry.add_run(ids::RUN, |_, _| {})?;
    registry.add_default_value(ids::NO_DEFAULT, |_| Ok(()))?;
    registry.add_default_value(ids::INDEX_DEFAULT, index_default)?;
    registry.add_arg_name(ids::INDEX_NAME, |_| "index".to_string())?;
    Ok(registry)
}

/// Function words and option switches of the demo grammar.
pub fn table() -> TokenTable {
    build_table().expect("demo tokens are distinct")
}

fn build_table() -> Result<TokenTable, TokenTableError> {
    let mut table = TokenTable::new();
    table.add_tokens(
        DefaultToken::Function.code(),
        ["remove", "-r", "add", "-a", "init", "-i", "version", "-v"],
    )?;
    table.add_tokens(DefaultToken::Option.code(), ["--index", "--i"])?;
    Ok(table)
}

pub fn remove_function(registry: &FunctionRegistry) -> Function {
    let grammar = Grammar::new(registry);
    let arg1 = grammar
        .argument("arg1", true, ids::NO_DEFAULT)
        .expect("arg1 is well formed");
    grammar
        .function("remove/-r", ids::RUN, vec![arg1.into()])
        .expect("remove is well formed")
}

pub fn add_function(registry: &FunctionRegistry) -> Function {
    let grammar = Grammar::new(registry);
    let arg1 = grammar
        .argument("arg1", true, ids::NO_DEFAULT)
        .expect("arg1 is well formed");
    let index = grammar
        .argument("index", true, ids::NO_DEFAULT)
        .expect("index is well formed");
    let option = grammar
        .option(
            "--index/--i",
            false,
            ids::INDEX_NAME,
            ids::INDEX_DEFAULT,
            vec![index],
        )
        .expect("--index is well formed");
    grammar
        .function("add/-a", ids::RUN, vec![arg1.into(), option.into()])
        .expect("add is well formed")
}

/// A function without children, under any alias.
pub fn init_function(registry: &FunctionRegistry, alias: &str) -> Function {
    Grammar::new(registry)
        .function(alias, ids::RUN, Vec::new())
        .expect("alias is well formed")
}

/// A parser over the demo table with all four demo functions declared.
pub fn demo_parser() -> Parser {
    let registry = registry();
    let mut parser = Parser::new(table());
    for function in [
        remove_function(&registry),
        add_function(&registry),
        init_function(&registry, "init/-i"),
        init_function(&registry, "version/-v"),
    ] {
        parser
            .add_function(function)
            .expect("demo functions do not overlap");
    }
    parser
}
