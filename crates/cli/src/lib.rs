//! Slugi CLI Library
//!
//! This crate provides the command-line interface for slugi, a tool that turns
//! a string into a URL-safe slug. It parses the arguments, decides between
//! help, version and the transform itself, and renders errors together with
//! the help text.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing with `clap`
//! - [`slugi`]: The [`Slugi`] orchestrator producing an invocation's outcome
//! - [`colors`]: Terminal styling of the `ERROR` line
//!
//! # Examples
//!
//! The CLI binary (`slugi`) can be used in several ways:
//!
//! ```bash
//! # Default replacement
//! slugi "hello world"            # hello-world
//!
//! # Custom replacement, lowercased
//! slugi -l -r _ "HELLO world"    # hello_world
//!
//! # Help and version
//! slugi --help
//! slugi --version
//! ```

pub mod cli_args;
pub mod colors;
pub mod slugi;

pub use crate::slugi::Slugi;

/// Version of the `slugi` binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
