//! Parsed and validated command-line options.
//!
//! [`RawParsedArguments`] is what the argument parser found, with nothing
//! defaulted. [`validate`] turns it into [`NormalizedOptions`], applying the
//! caller's [`TransformOptions`] as defaults and enforcing the positional
//! string rules.

use crate::error::{Error, Result};

/// Options handed to the slug method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Replacement for whitespace in the slug.
    pub replacement: String,
    /// Whether the slug should be lowercased.
    pub lowercase: bool,
}

/// Flags and positionals exactly as found on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParsedArguments {
    pub strings: Vec<String>,
    pub replacement: Option<String>,
    pub lowercase: Option<bool>,
    pub help: Option<bool>,
    pub version: Option<bool>,
}

/// Validated, defaulted view of [`RawParsedArguments`].
///
/// `string`, when present, is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOptions {
    pub string: Option<String>,
    pub replacement: String,
    pub lowercase: bool,
    pub help: bool,
    pub version: bool,
}

impl NormalizedOptions {
    #[must_use]
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            replacement: self.replacement.clone(),
            lowercase: self.lowercase,
        }
    }
}

/// Validates raw parsed arguments against the positional string rules and
/// fills in defaults.
///
/// An empty positional list is not an error here: `string` is `None` and it
/// is up to the caller to decide whether a string was needed. A single blank
/// string, on the other hand, is rejected.
///
/// # Errors
///
/// - [`Error::TooManyStrings`] if more than one positional string was given
/// - [`Error::EmptyString`] if the positional string is empty after trimming
pub fn validate(raw: RawParsedArguments, defaults: &TransformOptions) -> Result<NormalizedOptions> {
    let string = single_string(raw.strings)?;

    Ok(NormalizedOptions {
        string,
        replacement: raw
            .replacement
            .unwrap_or_else(|| defaults.replacement.clone()),
        lowercase: raw.lowercase.unwrap_or(defaults.lowercase),
        help: raw.help.unwrap_or(false),
        version: raw.version.unwrap_or(false),
    })
}

fn single_string(strings: Vec<String>) -> Result<Option<String>> {
    if strings.len() > 1 {
        return Err(Error::TooManyStrings);
    }

    match strings.into_iter().next() {
        None => Ok(None),
        Some(string) => {
            let trimmed = string.trim();
            if trimmed.is_empty() {
                Err(Error::EmptyString)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
    }
}
