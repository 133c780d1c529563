//! Slugi Core Library
//!
//! This crate provides the core functionality for slugi, a command-line tool
//! that turns a string into a URL-safe slug.
//!
//! # Key Features
//!
//! - **Options Validation**: Turn raw parsed flags and positionals into validated, defaulted options
//! - **Slug Transform**: A default slug method, behind a trait so callers can supply their own
//! - **Error Handling**: One error variant per way an invocation can fail
//!
//! # Examples
//!
//! Validating parsed arguments and transforming the string:
//!
//! ```
//! use slugi_core::options::{validate, RawParsedArguments, TransformOptions};
//! use slugi_core::slug::slugify;
//!
//! let raw = RawParsedArguments {
//!     strings: vec!["  Hello World ".to_string()],
//!     lowercase: Some(true),
//!     ..RawParsedArguments::default()
//! };
//! let options = validate(raw, &TransformOptions::default())?;
//! let text = options.string.as_deref().unwrap_or_default();
//! assert_eq!(slugify(text, &options.transform_options()), "hello-world");
//! # Ok::<(), slugi_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod slug;
