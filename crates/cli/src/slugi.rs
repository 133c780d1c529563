//! Turning an argument vector into slugi's output.
//!
//! [`Slugi`] parses and validates the arguments, picks between help, version
//! and the actual transform, and packages the result as an [`Outcome`].

use std::ffi::OsString;

use log::debug;
use slugi_core::error::{Error, Failure, Outcome, Result};
use slugi_core::options::{validate, NormalizedOptions, TransformOptions};
use slugi_core::slug::SlugMethod;

use crate::cli_args::parse_arguments;
use crate::colors::error_line;
use crate::VERSION;

/// Generates slugs from command-line arguments.
pub struct Slugi<M> {
    default_options: TransformOptions,
    slug_method: M,
    colored: bool,
}

impl<M: SlugMethod> Slugi<M> {
    /// Creates a `Slugi` that falls back to `default_options` for flags that
    /// are not given and transforms strings with `slug_method`.
    pub fn new(default_options: TransformOptions, slug_method: M) -> Self {
        Self {
            default_options,
            slug_method,
            colored: false,
        }
    }

    /// Enables colors on the `ERROR` line of failure messages.
    #[must_use]
    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    #[must_use]
    pub fn default_options(&self) -> &TransformOptions {
        &self.default_options
    }

    /// The help text, showing the configured defaults.
    #[must_use]
    pub fn help_message(&self) -> String {
        format!(
            r#"Usage: slugi <string> [options]

Transform a string into a slug

Positionals:
    string              The string to transform  [string]  [required]

Options:
    -r, --replacement   Replacement for spaces   [string]  [default: "{}"]
    -l, --lowercase     Output in lowercase      [boolean] [default: {}]
    -h, --help          Show help                [boolean]
    -v, --version       Show version number      [boolean]"#,
            self.default_options.replacement, self.default_options.lowercase
        )
    }

    /// The help text followed by an `ERROR` line with `message`.
    #[must_use]
    pub fn generate_help_message(&self, message: &str) -> String {
        format!(
            "{}\n\n{}",
            self.help_message(),
            error_line(message, self.colored)
        )
    }

    /// Parses and validates a full argument vector, program name first.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation error for invalid arguments.
    pub fn parse_arguments<I, T>(&self, argv: I) -> Result<NormalizedOptions>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let raw = parse_arguments(argv)?;
        validate(raw, &self.default_options)
    }

    /// Runs one invocation.
    ///
    /// Help wins over version, and both win over the string to transform,
    /// which is only required when neither was asked for.
    ///
    /// # Errors
    ///
    /// Usage errors (bad flags, bad or missing string) come back with the help
    /// text in their message. Slug method failures keep their own message.
    pub fn get_slug_from_arguments<I, T>(&self, argv: I) -> Outcome
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let options = match self.parse_arguments(argv) {
            Ok(options) => options,
            Err(error) => return Err(self.usage_failure(error)),
        };

        if options.help {
            debug!("Help requested");
            return Ok(self.help_message());
        }

        if options.version {
            debug!("Version requested");
            return Ok(VERSION.to_string());
        }

        let Some(text) = options.string.as_deref() else {
            return Err(self.usage_failure(Error::MissingInput));
        };

        let transform_options = options.transform_options();
        debug!("Transforming {text:?} with {transform_options:?}");

        self.slug_method
            .slugify(text, &transform_options)
            .map_err(|original| Failure::from(Error::transform(&*original)))
    }

    fn usage_failure(&self, error: Error) -> Failure {
        debug!("Usage error: {error:?}");
        let message = self.generate_help_message(&error.to_string());
        Failure::new(error, message)
    }
}
