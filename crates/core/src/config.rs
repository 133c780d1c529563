//! Default transform settings for slugi.
//!
//! These are the values used when `-r/--replacement` or `-l/--lowercase` are
//! not given on the command line.

use crate::options::TransformOptions;

/// Default replacement for whitespace
pub const DEFAULT_REPLACEMENT: &str = "-";
/// Default for lowercasing the output
pub const DEFAULT_LOWERCASE: bool = false;

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            replacement: DEFAULT_REPLACEMENT.to_string(),
            lowercase: DEFAULT_LOWERCASE,
        }
    }
}
