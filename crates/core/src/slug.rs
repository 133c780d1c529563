//! The string-to-slug transform.
//!
//! The orchestrator only knows about the [`SlugMethod`] trait. Any
//! `Fn(&str, &TransformOptions) -> String` is a slug method, and [`slugify`]
//! is the one the `slugi` binary uses.

use crate::options::TransformOptions;

/// Error type slug methods may fail with.
pub type SlugError = Box<dyn std::error::Error + Send + Sync>;

/// Turns a string into a slug.
pub trait SlugMethod {
    /// # Errors
    ///
    /// Implementations may fail for inputs they cannot transform.
    fn slugify(&self, text: &str, options: &TransformOptions) -> Result<String, SlugError>;
}

impl<F> SlugMethod for F
where
    F: Fn(&str, &TransformOptions) -> String,
{
    fn slugify(&self, text: &str, options: &TransformOptions) -> Result<String, SlugError> {
        Ok(self(text, options))
    }
}

/// Punctuation kept in slugs, in addition to alphanumerics and `_`.
const KEPT_SYMBOLS: &str = "$*_+~.()'\"!-:@";

/// Default slug transform.
///
/// Characters equal to the replacement are treated as whitespace, anything
/// that is not alphanumeric, whitespace or in [`KEPT_SYMBOLS`] is dropped, the
/// result is trimmed and every whitespace run becomes a single replacement.
///
/// ```
/// use slugi_core::options::TransformOptions;
/// use slugi_core::slug::slugify;
///
/// let options = TransformOptions { replacement: "_".to_string(), lowercase: true };
/// assert_eq!(slugify("  Hello, World  ", &options), "hello_world");
/// ```
#[must_use]
pub fn slugify(text: &str, options: &TransformOptions) -> String {
    let kept: String = text
        .chars()
        .map(|ch| {
            if is_replacement(ch, &options.replacement) {
                ' '
            } else {
                ch
            }
        })
        .filter(|&ch| is_kept(ch))
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut in_whitespace = false;
    for ch in kept.trim().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push_str(&options.replacement);
                in_whitespace = true;
            }
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }

    if options.lowercase {
        slug.to_lowercase()
    } else {
        slug
    }
}

fn is_replacement(ch: char, replacement: &str) -> bool {
    let mut chars = replacement.chars();
    chars.next() == Some(ch) && chars.next().is_none()
}

fn is_kept(ch: char) -> bool {
    ch.is_alphanumeric() || ch.is_whitespace() || KEPT_SYMBOLS.contains(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(replacement: &str, lowercase: bool) -> TransformOptions {
        TransformOptions {
            replacement: replacement.to_string(),
            lowercase,
        }
    }

    #[test]
    fn test_default_options() {
        assert_eq!(slugify("hello world", &options("-", false)), "hello-world");
        assert_eq!(slugify("HELLO world", &options("-", false)), "HELLO-world");
    }

    #[test]
    fn test_custom_replacement() {
        assert_eq!(slugify("hello world", &options("0", false)), "hello0world");
        assert_eq!(slugify("hello world", &options("", false)), "helloworld");
        assert_eq!(slugify("a b c", &options("--", false)), "a--b--c");
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(slugify("HELLO world", &options("-", true)), "hello-world");
        assert_eq!(slugify("HELLO world", &options("0", true)), "hello0world");
    }

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(
            slugify("  multiple \t  spaces  ", &options("-", false)),
            "multiple-spaces"
        );
    }

    #[test]
    fn test_removes_disallowed_characters() {
        assert_eq!(slugify("Hello, World!", &options("-", false)), "Hello-World!");
        assert_eq!(slugify("a#b%c", &options("-", false)), "abc");
    }

    #[test]
    fn test_keeps_allowed_symbols() {
        assert_eq!(
            slugify("user@host:8080 (v1.2)", &options("-", false)),
            "user@host:8080-(v1.2)"
        );
    }

    #[test]
    fn test_replacement_character_in_input_acts_as_whitespace() {
        assert_eq!(slugify("a - b", &options("-", false)), "a-b");
        assert_eq!(slugify("x_y z", &options("_", false)), "x_y_z");
        assert_eq!(slugify("-leading", &options("-", false)), "leading");
    }

    #[test]
    fn test_unicode_letters_are_kept() {
        assert_eq!(slugify("Grüße Welt", &options("-", true)), "grüße-welt");
    }

    #[test]
    fn test_closure_is_a_slug_method() {
        let method = |text: &str, options: &TransformOptions| {
            format!("{text}{}", options.replacement)
        };
        let slug = SlugMethod::slugify(&method, "abc", &options("!", false)).unwrap();
        assert_eq!(slug, "abc!");
    }

    #[test]
    fn test_function_is_a_slug_method() {
        let slug = SlugMethod::slugify(&slugify, "hello world", &options("-", false)).unwrap();
        assert_eq!(slug, "hello-world");
    }
}
