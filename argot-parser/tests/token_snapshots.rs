//! Snapshots of rendered token streams and serialized results

use argot_parser::argot::testing::fixtures;
use argot_parser::argot::token::render_tokens;
use insta::assert_snapshot;

#[test]
fn remove_stream_renders_one_token_per_line() {
    let tokens = fixtures::table().classify(&["remove", "loppo"]);
    assert_snapshot!(render_tokens(&tokens), @r"
    [remove, Function]
    [loppo, Argument]
    [(end-f), EndCode]
    ");
}

#[test]
fn unknown_function_still_classifies() {
    let tokens = fixtures::table().classify(&["frotz"]);
    assert_snapshot!(render_tokens(&tokens), @r"
    [frotz, Argument]
    [(end-f), EndCode]
    ");
}

#[test]
fn add_stream_with_option() {
    let tokens = fixtures::table().classify(&["-a", "notes.txt", "--i", "2"]);
    assert_snapshot!(render_tokens(&tokens), @r"
    [-a, Function]
    [notes.txt, Argument]
    [--i, Option]
    [2, Argument]
    [(end-f), EndCode]
    ");
}

#[test]
fn collected_values_serialize_in_insertion_order() {
    let mut parser = fixtures::demo_parser();
    let outcome = parser.parse(&["add", "notes.txt"]).unwrap();
    let values = outcome.function().unwrap().values();
    assert_snapshot!(
        serde_json::to_string(values).unwrap(),
        @r#"{"arg1":"notes.txt","index":"-1"}"#
    );
}

#[test]
fn error_message_serializes_code_and_message() {
    let mut parser = fixtures::demo_parser();
    let outcome = parser.parse(&["remove"]).unwrap();
    let json = serde_json::to_value(outcome.error().unwrap()).unwrap();
    assert_eq!(json["code"], 18);
    assert_eq!(json["message"], "Missing mandatory argument 'arg1'");
    assert!(json["id"].is_string());
}
