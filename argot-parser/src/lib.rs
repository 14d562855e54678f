//! # argot
//!
//! A tokenizer and grammar-validating parser for command-line arguments.
//!
//! File Layout
//!
//! The library is split the way the data flows through it: raw strings are classified into
//! tokens, a cursor walks those tokens against a declared grammar, and the values that survive
//! validation land in an ordered store handed to a callback.
//!
//! src/argot
//!   ├── token        Token types and the string → category table
//!   ├── cursor       Forward-only view over a classified token stream
//!   ├── key          Compound alias keys ("remove/-r")
//!   ├── values       The ordered value store
//!   ├── registry     Callbacks bound to grammar nodes by numeric id
//!   ├── grammar      Function / option / argument nodes, analyzer and collector
//!   ├── parsing      Orchestration: classify, select, validate, collect, dispatch
//!   └── testing      Fluent assertions and shared fixtures
//!
//! For testing guidelines, see the [testing module](argot::testing).

pub mod argot;
