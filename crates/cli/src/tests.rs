use super::*;
use std::ffi::OsStr;
use test_support::{FailingReader, TestDir};

fn run_with_args<I, S>(args: I, stdin: &[u8]) -> (i32, Vec<u8>, Vec<u8>)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run_with_input(args, stdin, &mut stdout, &mut stderr);
    (code, stdout, stderr)
}

fn stderr_text(stderr: Vec<u8>) -> String {
    String::from_utf8(stderr).expect("diagnostic is valid UTF-8")
}

#[test]
fn help_flag_renders_static_help_snapshot() {
    for flag in ["--help", "-h"] {
        let (code, stdout, stderr) = run_with_args([OsStr::new("ddconv"), OsStr::new(flag)], b"");

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(stdout, render_help().into_bytes());
    }
}

#[test]
fn version_flag_renders_banner() {
    for flag in ["--version", "-V"] {
        let (code, stdout, stderr) = run_with_args(["ddconv", flag], b"");

        assert_eq!(code, 0);
        assert!(stderr.is_empty());
        assert_eq!(stdout, render_version().into_bytes());
    }
}

#[test]
fn help_mentions_every_conversion() {
    let help = render_help();
    for name in ["lower_case", "upper_case", "trim_spaces"] {
        assert!(help.contains(name), "help is missing {name}");
    }
}

#[test]
fn help_text_carries_every_flag_description() {
    let help = render_help();
    for arg in arguments::clap_command().get_arguments() {
        let described = arg.get_help().map(ToString::to_string).unwrap_or_default();
        assert!(!described.is_empty(), "--{} has no description", arg.get_id());
        assert!(help.contains(&described), "help text is missing {described:?}");
    }
}

#[test]
fn stdin_is_copied_to_stdout_unchanged() {
    let input: Vec<u8> = (0..=255u8).collect();
    let (code, stdout, stderr) = run_with_args(["ddconv"], &input);

    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    assert_eq!(stdout, input);
}

#[test]
fn offset_and_limit_select_window() {
    let (code, stdout, _) = run_with_args(["ddconv", "--offset", "2", "--limit", "3"], b"abcdef");

    assert_eq!(code, 0);
    assert_eq!(stdout, b"cde");
}

#[test]
fn conversions_apply_in_order() {
    let (code, stdout, _) = run_with_args(
        ["ddconv", "--conv", "trim_spaces", "--conv", "upper_case"],
        "  hello   wörld \n".as_bytes(),
    );

    assert_eq!(code, 0);
    assert_eq!(stdout, "HELLO WÖRLD".as_bytes());
}

#[test]
fn small_block_size_keeps_multibyte_characters_intact() {
    let (code, stdout, _) = run_with_args(
        ["ddconv", "--block-size", "1", "--conv", "lower_case"],
        "ÄÖÜ 🦀 ΣΤ".as_bytes(),
    );

    assert_eq!(code, 0);
    assert_eq!(stdout, "äöü 🦀 στ".as_bytes());
}

#[test]
fn unknown_flag_is_an_argument_error() {
    let (code, stdout, stderr) = run_with_args(["ddconv", "--bogus"], b"");

    assert_eq!(code, ExitCode::Arguments.as_i32());
    assert!(stdout.is_empty());
    let rendered = stderr_text(stderr);
    assert!(rendered.starts_with("ddconv: can not parse flags: "));
    assert!(rendered.contains("--bogus"));
}

#[test]
fn conflicting_conversions_fail_before_reading() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let stdin = FailingReader::new(b"", std::io::ErrorKind::Other);
    let code = run_with_input(
        ["ddconv", "--conv", "lower_case,upper_case"],
        stdin,
        &mut stdout,
        &mut stderr,
    );

    assert_eq!(code, 1);
    assert_eq!(
        stderr_text(stderr),
        "ddconv: can not parse flags: lower_case and upper_case cannot be combined\n"
    );
}

#[test]
fn unknown_conversion_is_named() {
    let (code, _, stderr) = run_with_args(["ddconv", "--conv", "title_case"], b"x");

    assert_eq!(code, 1);
    assert!(stderr_text(stderr).contains("'title_case'"));
}

#[test]
fn zero_block_size_is_an_argument_error() {
    let (code, _, stderr) = run_with_args(["ddconv", "--block-size", "0"], b"x");

    assert_eq!(code, 1);
    assert!(stderr_text(stderr).contains("block size must be greater than zero"));
}

#[test]
fn missing_source_is_a_reader_error() {
    let dir = TestDir::new().expect("test dir");
    let missing = dir.join("absent.txt");
    let (code, _, stderr) = run_with_args(
        [OsString::from("ddconv"), OsString::from("--from"), missing.into_os_string()],
        b"",
    );

    assert_eq!(code, ExitCode::Reader.as_i32());
    assert!(stderr_text(stderr).starts_with("ddconv: can not create reader: failed to open source"));
}

#[test]
fn offset_past_end_is_a_reader_error() {
    let (code, stdout, stderr) = run_with_args(["ddconv", "--offset", "10"], b"abc");

    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert_eq!(
        stderr_text(stderr),
        "ddconv: can not create reader: source ended after 3 of 10 bytes while skipping\n"
    );
}

#[test]
fn offset_equal_to_length_copies_nothing() {
    let (code, stdout, stderr) = run_with_args(["ddconv", "--offset", "3"], b"abc");

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
}

#[test]
fn existing_sink_is_a_writer_error() {
    let dir = TestDir::new().expect("test dir");
    let sink = dir.write_file("out.txt", b"precious").expect("write");
    let (code, _, stderr) = run_with_args(
        [OsString::from("ddconv"), OsString::from("--to"), sink.into_os_string()],
        b"new",
    );

    assert_eq!(code, ExitCode::Writer.as_i32());
    assert!(stderr_text(stderr).starts_with("ddconv: can not create writer: sink"));
    assert_eq!(dir.read_file("out.txt").expect("read"), b"precious");
}

#[test]
fn failed_reader_leaves_no_sink_behind() {
    let dir = TestDir::new().expect("test dir");
    let sink = dir.join("out.txt");
    let (code, _, _) = run_with_args(
        [
            OsString::from("ddconv"),
            OsString::from("--offset=5"),
            OsString::from("--to"),
            sink.into_os_string(),
        ],
        b"abc",
    );

    assert_eq!(code, 2);
    assert!(!dir.exists("out.txt"));
}

#[test]
fn upstream_failure_is_a_copy_error() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let stdin = FailingReader::new(b"head", std::io::ErrorKind::BrokenPipe);
    let code = run_with_input(["ddconv", "--conv", "upper_case"], stdin, &mut stdout, &mut stderr);

    assert_eq!(code, ExitCode::Copy.as_i32());
    assert_eq!(stdout, b"HEAD");
    assert!(stderr_text(stderr).starts_with("ddconv: error while copying: read failed"));
}

#[test]
fn file_to_file_copy() {
    let dir = TestDir::new().expect("test dir");
    let source = dir.write_file("in.txt", b"  Hello   World  \n").expect("write");
    let sink = dir.join("out.txt");
    let (code, stdout, stderr) = run_with_args(
        [
            OsString::from("ddconv"),
            OsString::from("--from"),
            source.into_os_string(),
            OsString::from("--to"),
            sink.into_os_string(),
            OsString::from("--conv=trim_spaces"),
        ],
        b"",
    );

    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());
    assert_eq!(dir.read_file("out.txt").expect("read"), b"Hello World");
}

#[test]
fn exit_code_from_clamps_out_of_range_values() {
    let render = |code: std::process::ExitCode| format!("{code:?}");
    assert_eq!(render(exit_code_from(-5)), render(std::process::ExitCode::from(0)));
    assert_eq!(render(exit_code_from(4)), render(std::process::ExitCode::from(4)));
    assert_eq!(render(exit_code_from(300)), render(std::process::ExitCode::from(255)));
}
