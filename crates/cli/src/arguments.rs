//! `clap` command definition and conversion of matches into a copy
//! configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use engine::{CopyConfig, EngineResult};

/// Program name used when the argument list is empty.
pub(crate) const PROGRAM_NAME: &str = "ddconv";

/// Values extracted from the command line.
#[derive(Debug, Default, Eq, PartialEq)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) verbose: u8,
    pub(crate) from: Option<PathBuf>,
    pub(crate) to: Option<PathBuf>,
    pub(crate) offset: Option<u64>,
    pub(crate) limit: Option<u64>,
    pub(crate) block_size: Option<usize>,
    pub(crate) conv: Vec<String>,
}

impl ParsedArgs {
    /// Transform names from every `--conv` value, split on commas.
    ///
    /// An empty value contributes no names.
    pub(crate) fn transform_names(&self) -> impl Iterator<Item = &str> {
        self.conv
            .iter()
            .filter(|value| !value.is_empty())
            .flat_map(|value| value.split(','))
    }

    /// Validates the parsed values into a [`CopyConfig`].
    pub(crate) fn to_config(&self) -> EngineResult<CopyConfig> {
        let mut builder = CopyConfig::builder().transform_names(self.transform_names());

        if let Some(path) = &self.from {
            builder = builder.source(path);
        }
        if let Some(path) = &self.to {
            builder = builder.sink(path);
        }
        if let Some(offset) = self.offset {
            builder = builder.skip(offset);
        }
        if let Some(limit) = self.limit {
            builder = builder.limit(limit);
        }
        if let Some(block_size) = self.block_size {
            builder = builder.block_size(block_size);
        }

        builder.build()
    }
}

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more detail.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("PATH")
                .help("File to read. Defaults to standard input.")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("PATH")
                .help("File to create; must not exist. Defaults to standard output.")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .value_name("BYTES")
                .help("Number of bytes skipped at the start of the input.")
                .value_parser(value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .value_name("BYTES")
                .help("Maximum number of bytes read after the offset.")
                .value_parser(value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("block-size")
                .long("block-size")
                .value_name("BYTES")
                .help("Size of one block when reading and writing (default 1024).")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("conv")
                .long("conv")
                .value_name("LIST")
                .help("Comma-separated conversions, may be repeated:")
                .action(ArgAction::Append),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        verbose: matches.get_count("verbose"),
        from: matches.remove_one::<PathBuf>("from"),
        to: matches.remove_one::<PathBuf>("to"),
        offset: matches.remove_one::<u64>("offset"),
        limit: matches.remove_one::<u64>("limit"),
        block_size: matches.remove_one::<usize>("block-size"),
        conv: matches
            .remove_many::<String>("conv")
            .map(|values| values.collect())
            .unwrap_or_default(),
    })
}
