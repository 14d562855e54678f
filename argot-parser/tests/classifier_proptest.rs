//! Property-based tests for token classification
//!
//! Classification is total: every input string gets exactly one token, in order, and the
//! stream always ends with a single end marker.

use argot_parser::argot::testing::assert_tokens;
use argot_parser::argot::token::END_MARKER;
use argot_parser::argot::{DefaultToken, TokenCodes, TokenTable};
use proptest::prelude::*;

const FUNCTIONS: [&str; 4] = ["remove", "-r", "add", "-a"];
const OPTIONS: [&str; 2] = ["--index", "--i"];

fn table() -> TokenTable {
    let mut table = TokenTable::new();
    table
        .add_tokens(DefaultToken::Function.code(), FUNCTIONS)
        .unwrap();
    table.add_tokens(DefaultToken::Option.code(), OPTIONS).unwrap();
    table
}

/// Either a registered word or free text.
fn arg_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(FUNCTIONS.to_vec()).prop_map(str::to_string),
        prop::sample::select(OPTIONS.to_vec()).prop_map(str::to_string),
        "[a-zA-Z0-9._/-]{0,12}",
    ]
}

fn expected_code(text: &str) -> i64 {
    if FUNCTIONS.contains(&text) {
        DefaultToken::Function.code()
    } else if OPTIONS.contains(&text) {
        DefaultToken::Option.code()
    } else {
        DefaultToken::Argument.code()
    }
}

proptest! {
    #[test]
    fn one_token_per_input_plus_end(args in prop::collection::vec(arg_strategy(), 0..12)) {
        let tokens = table().classify(&args);
        prop_assert_eq!(tokens.len(), args.len() + 1);
        assert_tokens(&tokens).ends_with_marker(END_MARKER, DefaultToken::EndCode.code());
    }

    #[test]
    fn texts_are_preserved_in_order(args in prop::collection::vec(arg_strategy(), 0..12)) {
        let tokens = table().classify(&args);
        for (token, arg) in tokens.iter().zip(&args) {
            prop_assert_eq!(token.text(), arg.as_str());
            prop_assert_eq!(token.code(), expected_code(arg));
        }
    }

    #[test]
    fn unregistered_text_falls_back_to_the_argument_code(
        text in "[a-z]{1,8}",
        argument in 10i64..1000,
    ) {
        let codes = TokenCodes { argument, ..TokenCodes::default() };
        let tokens = TokenTable::with_codes(codes).classify(&[text.as_str()]);
        prop_assert_eq!(tokens[0].code(), argument);
    }

    #[test]
    fn custom_end_marker_terminates_the_stream(marker in "\\([a-z]{1,6}\\)") {
        let table = TokenTable::new().with_end_marker(marker.clone());
        let tokens = table.classify(&["remove"]);
        assert_tokens(&tokens).count(2).ends_with_marker(&marker, DefaultToken::EndCode.code());
    }
}
