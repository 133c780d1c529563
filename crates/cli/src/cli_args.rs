//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and maps its parse failures onto slugi's own error variants.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use log::debug;
use slugi_core::error::{Error, Result};
use slugi_core::options::RawParsedArguments;

/// Command-line arguments for the `slugi` binary.
///
/// clap's own help and version flags are disabled: `-h` and `-v` are plain
/// flags here, and the help text is rendered by [`crate::slugi::Slugi`].
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "slugi",
    term_width = 0,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Args {
    /// The string to transform.
    #[arg(value_name = "STRING")]
    pub strings: Vec<String>,

    /// Replacement for spaces.
    #[arg(long, short = 'r', value_name = "VALUE")]
    pub replacement: Option<String>,

    /// Output in lowercase.
    #[arg(long, short = 'l')]
    pub lowercase: bool,

    /// Show help.
    #[arg(long, short = 'h')]
    pub help: bool,

    /// Show version number.
    #[arg(long, short = 'v')]
    pub version: bool,
}

impl From<Args> for RawParsedArguments {
    fn from(args: Args) -> Self {
        Self {
            strings: args.strings,
            replacement: args.replacement,
            lowercase: args.lowercase.then_some(true),
            help: args.help.then_some(true),
            version: args.version.then_some(true),
        }
    }
}

/// Parses a full argument vector, program name first.
///
/// No defaults are applied: flags that were not given stay `None`.
///
/// # Errors
///
/// - [`Error::UnknownOption`] for a flag that is not recognised
/// - [`Error::MissingValue`] when `-r/--replacement` has no value
/// - [`Error::Parse`] for anything else clap rejects
pub fn parse_arguments<I, T>(argv: I) -> Result<RawParsedArguments>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(argv).map_err(from_clap_error)?;
    debug!("Parsed arguments: {args:?}");

    Ok(args.into())
}

fn from_clap_error(error: clap::Error) -> Error {
    let offending = match error.get(ContextKind::InvalidArg) {
        // Options render as `--replacement <VALUE>`, keep only the flag
        Some(ContextValue::String(arg)) => arg.split_whitespace().next().map(ToString::to_string),
        _ => None,
    };
    let value_is_empty = matches!(
        error.get(ContextKind::InvalidValue),
        Some(ContextValue::String(value)) if value.is_empty()
    );

    match (error.kind(), offending) {
        (ErrorKind::UnknownArgument, Some(token)) => Error::unknown_option(token),
        (ErrorKind::InvalidValue, Some(flag)) if value_is_empty => Error::missing_value(flag),
        _ => Error::Parse(summarize(&error)),
    }
}

/// First line of clap's rendered error, without the `error: ` prefix.
fn summarize(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line.trim_start_matches("error: ").trim().to_string()
}
