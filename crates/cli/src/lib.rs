#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `ddconv`. It parses the
//! flags with [`clap`](https://docs.rs/clap/), turns them into an
//! [`engine::CopyConfig`], and runs the copy in three phases: building the
//! reader (source, offset, limit, conversions), building the writer, and
//! copying blocks.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, and returns the process exit status.
//! [`run_with_input`] additionally takes the handle used as standard input so
//! tests can feed data without a process. Help text is a static snapshot
//! rendered by the crate itself rather than by `clap`.
//!
//! # Invariants
//!
//! - `run` never panics; every failure becomes a non-zero [`ExitCode`].
//! - Flags are validated completely before any file is opened.
//! - The sink is created only after the reader was built, so a bad source or
//!   offset never leaves an empty output file behind.
//!
//! # Errors
//!
//! Each phase has its own exit status (see [`ExitCode`]). The diagnostic
//! written to standard error has the form
//! `ddconv: <phase description>: <error>`.
//!
//! # Examples
//!
//! ```
//! use cli::run_with_input;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = run_with_input(
//!     ["ddconv", "--offset", "2", "--limit", "3", "--conv", "upper_case"],
//!     &b"abcdef"[..],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(status, 0);
//! assert_eq!(stdout, b"CDE");
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/ddconv.rs` for the binary that wires [`run`] into `main`.

mod arguments;
mod exit_code;

use std::ffi::OsString;
use std::fmt::Display;
use std::io::{self, Read, Write};

use engine::{copy_blocks, open_reader, open_writer};
use logging::{TracingInitError, VerbosityConfig, build_filter, init_tracing, init_tracing_with_filter};

use arguments::{PROGRAM_NAME, ParsedArgs, parse_args};
pub use exit_code::ExitCode;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Deterministic help text describing the supported flags.
const HELP_TEXT: &str = concat!(
    "Usage: ddconv [OPTIONS]\n",
    "\n",
    "Copies bytes from a file or standard input to a new file or standard\n",
    "output, optionally skipping a prefix, limiting the amount copied, and\n",
    "converting the text on the way.\n",
    "\n",
    "Options:\n",
    "      --from PATH        File to read. Defaults to standard input.\n",
    "      --to PATH          File to create; must not exist. Defaults to standard output.\n",
    "      --offset BYTES     Number of bytes skipped at the start of the input.\n",
    "      --limit BYTES      Maximum number of bytes read after the offset.\n",
    "      --block-size BYTES Size of one block when reading and writing (default 1024).\n",
    "      --conv LIST        Comma-separated conversions, may be repeated:\n",
    "                           lower_case   map text to lower case\n",
    "                           upper_case   map text to upper case\n",
    "                           trim_spaces  drop leading and trailing whitespace and\n",
    "                                        collapse inner runs to one character\n",
    "  -v, --verbose          Increase diagnostic output; repeat for more detail.\n",
    "  -h, --help             Show this help message and exit.\n",
    "  -V, --version          Output version information and exit.\n",
    "\n",
    "The DDCONV_LOG environment variable overrides --verbose with tracing\n",
    "filter directives such as 'ddconv::copy=trace'.\n",
);

/// Renders the help text describing the supported flags.
fn render_help() -> String {
    HELP_TEXT.to_string()
}

/// Renders the version banner.
fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

/// Runs the CLI reading standard input from the process.
///
/// Returns the process exit status; see [`ExitCode`].
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    run_with_input(arguments, io::stdin().lock(), stdout, stderr)
}

/// Runs the CLI with an explicit standard input handle.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    stdin: In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: Read,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdin, stdout, stderr).as_i32(),
        Err(error) => {
            let rendered = error.to_string();
            let text = rendered.trim_end();
            let text = text.strip_prefix("error: ").unwrap_or(text);
            report(stderr, ExitCode::Arguments, text).as_i32()
        }
    }
}

fn execute<In, Out, Err>(parsed: ParsedArgs, stdin: In, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    In: Read,
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        return write_banner(stdout, &render_help());
    }
    if parsed.show_version {
        return write_banner(stdout, &render_version());
    }

    let config = match parsed.to_config() {
        Ok(config) => config,
        Err(error) => return report(stderr, ExitCode::Arguments, error),
    };

    install_tracing(VerbosityConfig::from_verbose_level(parsed.verbose), stderr);

    let reader = match open_reader(&config, stdin) {
        Ok(reader) => reader,
        Err(error) => return report(stderr, ExitCode::Reader, error),
    };
    let writer = match open_writer(&config, &mut *stdout) {
        Ok(writer) => writer,
        Err(error) => return report(stderr, ExitCode::Writer, error),
    };

    match copy_blocks(reader, writer, config.block_size()) {
        Ok(_) => ExitCode::Ok,
        Err(error) => report(stderr, ExitCode::Copy, error),
    }
}

fn write_banner<Out: Write>(stdout: &mut Out, text: &str) -> ExitCode {
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::Ok,
        Err(_) => ExitCode::Arguments,
    }
}

/// Installs the global subscriber once per process.
///
/// An invalid `DDCONV_LOG` value is reported as a warning and the `-v` level
/// is used instead. A subscriber installed by an earlier run is kept.
fn install_tracing<Err: Write>(config: VerbosityConfig, stderr: &mut Err) {
    match init_tracing(config) {
        Ok(()) | Err(TracingInitError::AlreadyInstalled(_)) => {}
        Err(error @ TracingInitError::InvalidDirective { .. }) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: warning: {error}");
            if let Ok(filter) = build_filter(config, None) {
                let _ = init_tracing_with_filter(filter);
            }
        }
    }
}

/// Writes `ddconv: <phase>: <error>` and returns the phase status.
fn report<Err: Write>(stderr: &mut Err, code: ExitCode, error: impl Display) -> ExitCode {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {}: {error}", code.description());
    code
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

#[cfg(test)]
mod tests;
