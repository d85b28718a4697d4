//! Binary-level tests driving the built `ddconv` executable.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn ddconv() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ddconv"))
}

#[test]
fn help_lists_usage() {
    ddconv()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("Usage: ddconv"))
        .stdout(predicate::str::contains("--conv LIST"));
}

#[test]
fn version_prints_package_version() {
    ddconv()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "ddconv {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn stdin_to_stdout_with_window() {
    ddconv()
        .args(["--offset", "2", "--limit", "3"])
        .write_stdin("abcdef")
        .assert()
        .success()
        .stdout("cde");
}

#[test]
fn trims_and_upper_cases_stdin() {
    ddconv()
        .args(["--conv", "trim_spaces,upper_case"])
        .write_stdin("  Hello   World  \n")
        .assert()
        .success()
        .stdout("HELLO WORLD");
}

#[test]
fn file_to_file_with_tiny_blocks() {
    let dir = tempdir().expect("tempdir");
    let source = dir.path().join("in.txt");
    let sink = dir.path().join("out.txt");
    std::fs::write(&source, "Ünïcödé ÀND ßpaces".as_bytes()).expect("write source");

    ddconv()
        .arg("--from")
        .arg(&source)
        .arg("--to")
        .arg(&sink)
        .args(["--block-size", "1", "--conv", "lower_case"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let output = std::fs::read_to_string(&sink).expect("read sink");
    assert_eq!(output, "ünïcödé and ßpaces");
}

#[test]
fn verbose_run_logs_copy_summary() {
    ddconv()
        .arg("-v")
        .env_remove("DDCONV_LOG")
        .write_stdin("data")
        .assert()
        .success()
        .stdout("data")
        .stderr(predicate::str::contains("copy_complete"));
}

#[test]
fn log_directives_enable_window_events() {
    ddconv()
        .env("DDCONV_LOG", "ddconv::window=debug")
        .args(["--offset", "1"])
        .write_stdin("xy")
        .assert()
        .success()
        .stdout("y")
        .stderr(predicate::str::contains("window_skip_complete"));
}

#[test]
fn invalid_log_directive_warns_and_continues() {
    ddconv()
        .env("DDCONV_LOG", "ddconv=shouting")
        .write_stdin("ok")
        .assert()
        .success()
        .stdout("ok")
        .stderr(predicate::str::contains("ddconv: warning: invalid DDCONV_LOG directive"));
}
