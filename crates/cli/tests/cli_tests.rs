//! End-to-end tests for the `slugi` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use slugi_cli::{Slugi, VERSION};
use slugi_core::options::TransformOptions;
use slugi_core::slug::slugify;

fn slugi() -> Command {
    let mut command = Command::cargo_bin("slugi").unwrap();
    command.env_remove("RUST_LOG");
    command
}

fn help_message() -> String {
    Slugi::new(TransformOptions::default(), slugify).help_message()
}

fn assert_success(args: &[&str], expected: &str) {
    slugi()
        .args(args)
        .assert()
        .success()
        .stderr("")
        .stdout(format!("{expected}\n"));
}

fn assert_failure(args: &[&str], expected: &str) {
    slugi()
        .args(args)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(help_message()))
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains(expected));
}

mod arguments {
    use super::*;

    #[test]
    fn replacement_short_option() {
        assert_success(&["-r", "0", "hello world"], "hello0world");
    }

    #[test]
    fn replacement_long_option() {
        assert_success(&["--replacement", "0", "hello world"], "hello0world");
        assert_success(&["--replacement=0", "hello world"], "hello0world");
    }

    #[test]
    fn lowercase_short_option() {
        assert_success(&["-l", "HELLO world"], "hello-world");
    }

    #[test]
    fn lowercase_long_option() {
        assert_success(&["--lowercase", "HELLO world"], "hello-world");
    }

    #[test]
    fn both_options() {
        assert_success(&["-r", "0", "-l", "HELLO world"], "hello0world");
        assert_success(&["-lr", "0", "HELLO world"], "hello0world");
    }

    #[test]
    fn last_replacement_wins() {
        assert_success(&["-r", "0", "-r", "1", "hello world"], "hello1world");
    }

    #[test]
    fn help() {
        let help = help_message();
        assert_success(&["-h"], &help);
        assert_success(&["--help"], &help);
        assert_success(&["--lowercase", "hello world", "-r", "0", "-h", "-v"], &help);
    }

    #[test]
    fn version() {
        assert_success(&["-v"], VERSION);
        assert_success(&["--version"], VERSION);
        assert_success(&["--lowercase", "hello world", "-r", "0", "-v"], VERSION);
    }
}

mod display_help_and_exit {
    use super::*;

    #[test]
    fn no_arguments_are_provided() {
        assert_failure(&[], "please provide the string to transform");
    }

    #[test]
    fn no_string_is_provided() {
        assert_failure(&["-r", "a", "-l"], "please provide the string to transform");
    }

    #[test]
    fn more_than_one_string_is_provided() {
        assert_failure(&["abc1", "abc2"], "only one string is allowed");
    }

    #[test]
    fn an_unknown_option_is_provided() {
        assert_failure(&["-z", "a", "hello world"], "unknown or unexpected option: -z");
    }

    #[test]
    fn an_option_is_missing_a_value() {
        assert_failure(&["-r"], "option requires argument");
    }

    #[test]
    fn empty_string_is_provided() {
        assert_failure(&[""], "empty");
        assert_failure(&["        "], "empty");
    }
}
