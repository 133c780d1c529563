use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The result of a single `slugi` invocation: the text to print on success,
/// or a [`Failure`] holding the message to print on stderr.
pub type Outcome = std::result::Result<String, Failure>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown or unexpected option: {}", .0)]
    UnknownOption(String),

    #[error("option requires argument: {}", .0)]
    MissingValue(String),

    #[error("{}", .0)]
    Parse(String),

    #[error("only one string is allowed")]
    TooManyStrings,

    #[error("the string to transform cannot be empty")]
    EmptyString,

    #[error("please provide the string to transform")]
    MissingInput,

    #[error("{}", .0)]
    Transform(String),

    #[error("Something went wrong!")]
    Generic,
}

impl Error {
    pub fn unknown_option(token: impl Into<String>) -> Self {
        Self::UnknownOption(token.into())
    }

    pub fn missing_value(flag: impl Into<String>) -> Self {
        Self::MissingValue(flag.into())
    }

    /// Wraps an error raised by a slug method. Errors without any message
    /// collapse into [`Error::Generic`].
    pub fn transform(original: &(dyn std::error::Error + Send + Sync)) -> Self {
        let message = original.to_string();
        if message.trim().is_empty() {
            Self::Generic
        } else {
            Self::Transform(message)
        }
    }

    /// Errors caused by how the tool was invoked. These are shown together
    /// with the help text.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::UnknownOption(_)
                | Self::MissingValue(_)
                | Self::Parse(_)
                | Self::TooManyStrings
                | Self::EmptyString
                | Self::MissingInput
        )
    }
}

/// Failure arm of an [`Outcome`].
///
/// `message` is what ends up on stderr; it may embed the help text around the
/// underlying error, which stays reachable through [`Failure::error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Failure {
    #[source]
    error: Error,
    message: String,
}

impl Failure {
    pub fn new(error: Error, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(&self) -> &Error {
        &self.error
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        let message = error.to_string();
        Self { error, message }
    }
}
