use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn argot() -> Command {
    let mut cmd = cargo_bin_cmd!("argot");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn remove_prints_collected_values() {
    argot()
        .args(["remove", "loppo"])
        .assert()
        .success()
        .stdout("remove\narg1=loppo\n");
}

#[test]
fn short_alias_after_separator() {
    argot()
        .args(["--", "-r", "loppo"])
        .assert()
        .success()
        .stdout("remove\narg1=loppo\n");
}

#[test]
fn add_collects_option_value() {
    argot()
        .args(["add", "notes.txt", "--i", "2"])
        .assert()
        .success()
        .stdout("add\narg1=notes.txt\nindex=2\n");
}

#[test]
fn add_injects_default_index() {
    argot()
        .args(["add", "notes.txt"])
        .assert()
        .success()
        .stdout("add\narg1=notes.txt\nindex=-1\n");
}

#[test]
fn missing_argument_exits_with_the_error_object() {
    argot()
        .arg("remove")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("ErrorCode: 18")
                .and(predicate::str::contains("Missing mandatory argument 'arg1'")),
        );
}

#[test]
fn unknown_function_is_rejected() {
    argot()
        .arg("frotz")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ErrorCode: 70"));
}

#[test]
fn no_arguments_is_rejected() {
    argot()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No function was given"));
}

#[test]
fn tokens_flag_prints_the_classified_stream() {
    argot()
        .args(["--tokens", "remove", "loppo"])
        .assert()
        .success()
        .stdout("[remove, Function]\n[loppo, Argument]\n[(end-f), EndCode]\n");
}

#[test]
fn json_output_lists_function_and_values() {
    argot()
        .args(["--format", "json", "add", "notes.txt"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"function\": \"add\"")
                .and(predicate::str::contains("\"index\": \"-1\"")),
        );
}

#[test]
fn json_rejection_goes_to_stderr() {
    argot()
        .args(["--format", "json", "remove"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"code\": 18"));
}

#[test]
fn config_file_changes_the_end_marker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("argot.toml");
    fs::write(&path, "[tokens]\nend_marker = \"<eof>\"\n").unwrap();

    argot()
        .arg("--config")
        .arg(&path)
        .args(["--tokens", "frotz"])
        .assert()
        .success()
        .stdout("[frotz, Argument]\n[<eof>, EndCode]\n");
}

#[test]
fn config_file_sets_the_output_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("argot.toml");
    fs::write(&path, "[cli]\nformat = \"json\"\n").unwrap();

    argot()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"function\": \"init\""));
}

#[test]
fn project_file_in_working_directory_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("argot.toml"), "[tokens]\nend_marker = \"<eof>\"\n").unwrap();

    argot()
        .current_dir(dir.path())
        .args(["--tokens", "frotz"])
        .assert()
        .success()
        .stdout("[frotz, Argument]\n[<eof>, EndCode]\n");
}

#[test]
fn missing_config_file_is_a_hard_failure() {
    let dir = tempfile::tempdir().unwrap();
    argot()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn debug_flag_logs_to_stderr_only() {
    argot()
        .args(["--debug", "remove", "loppo"])
        .assert()
        .success()
        .stdout("remove\narg1=loppo\n")
        .stderr(predicate::str::contains("selected"));
}
