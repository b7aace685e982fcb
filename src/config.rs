//! @ai:module:intent Runtime configuration and its env-style parsers
//! @ai:module:layer infrastructure
//! @ai:module:public_api Config, parse_flag, split_args
//! @ai:module:stateless true

use crate::error::Result;
use std::path::PathBuf;

/// @ai:intent Plain values the driver needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base program, normally `cargo`.
    pub program: String,
    /// Extra arguments as a single shell-style string.
    pub cargo_command: String,
    pub with_annotation: bool,
    /// Read a captured stream from here instead of running the program.
    pub input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: default_program(),
            cargo_command: String::new(),
            with_annotation: default_with_annotation(),
            input: None,
        }
    }
}

fn default_program() -> String {
    "cargo".to_string()
}

fn default_with_annotation() -> bool {
    true
}

impl Config {
    /// @ai:intent Tokenize `cargo_command` into program arguments
    /// @ai:effects pure
    pub fn extra_args(&self) -> Result<Vec<String>> {
        split_args(&self.cargo_command)
    }
}

/// @ai:intent Parse an env-style boolean; only "true" (any case) is true
/// @ai:effects pure
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// @ai:intent Split a command string with shell quoting rules
/// @ai:effects pure
/// @ai:edge_cases blank input yields no arguments; unbalanced quotes are an error
pub fn split_args(command: &str) -> Result<Vec<String>> {
    let command = command.trim();

    if command.is_empty() {
        return Ok(Vec::new());
    }

    Ok(shell_words::split(command)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" True \n"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_split_args_quoting() {
        let args = split_args(r#"clippy --all-targets -- -D warnings -A "clippy::needless return" 'a b'"#)
            .unwrap();

        assert_eq!(
            args,
            vec![
                "clippy",
                "--all-targets",
                "--",
                "-D",
                "warnings",
                "-A",
                "clippy::needless return",
                "a b",
            ]
        );
    }

    #[test]
    fn test_split_args_escapes() {
        assert_eq!(split_args(r"check --features a\ b").unwrap(), vec!["check", "--features", "a b"]);
    }

    #[test]
    fn test_split_args_blank() {
        assert!(split_args("").unwrap().is_empty());
        assert!(split_args("   \t").unwrap().is_empty());
    }

    #[test]
    fn test_split_args_unbalanced_quote() {
        assert!(matches!(split_args("clippy \"oops"), Err(Error::InvalidCommand(_))));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.program, "cargo");
        assert!(config.cargo_command.is_empty());
        assert!(config.with_annotation);
        assert!(config.input.is_none());
        assert!(config.extra_args().unwrap().is_empty());
    }
}
