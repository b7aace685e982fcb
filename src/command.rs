//! @ai:module:intent Build and run the cargo invocation that produces JSON diagnostics
//! @ai:module:layer infrastructure
//! @ai:module:public_api CargoCommand, CapturedOutput, JSON_FLAG
//! @ai:module:depends_on config, error

use crate::config::Config;
use crate::error::{Error, Result};
use std::fmt;
use std::process::{Command, ExitStatus};

/// Flag appended when the arguments do not already ask for JSON output.
pub const JSON_FLAG: &str = "--message-format=json";

/// @ai:intent Program plus arguments for one diagnostic run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoCommand {
    program: String,
    args: Vec<String>,
}

/// @ai:intent What the subprocess left behind once it exited
#[derive(Debug)]
pub struct CapturedOutput {
    pub stdout: Vec<u8>,
    pub status: ExitStatus,
}

impl CargoCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// @ai:intent Build the full invocation described by a config
    /// @ai:effects pure
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.program.clone())
            .args(config.extra_args()?)
            .with_json_output())
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// @ai:intent Append the JSON message-format flag unless one is present
    /// @ai:effects pure
    /// @ai:idempotent true
    pub fn with_json_output(mut self) -> Self {
        if !self.requests_json() {
            self.args.push(JSON_FLAG.to_string());
        }
        self
    }

    /// @ai:intent Check for `--message-format=json*` or `--message-format json*`
    /// @ai:effects pure
    pub fn requests_json(&self) -> bool {
        let is_json = |value: &str| value.split(',').any(|v| v.starts_with("json"));

        self.args.iter().enumerate().any(|(i, arg)| {
            if let Some(value) = arg.strip_prefix("--message-format=") {
                return is_json(value);
            }

            arg == "--message-format"
                && self
                    .args
                    .get(i + 1)
                    .is_some_and(|next| is_json(next.as_str()))
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// @ai:intent Run to completion and capture stdout
    /// @ai:effects io
    /// @ai:post the exit status is reported but never treated as a failure
    pub fn run(&self) -> Result<CapturedOutput> {
        tracing::info!("Running {}", self);

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        tracing::debug!("{} exited with {}", self.program, output.status);
        tracing::debug!("{} stderr: {}", self.program, String::from_utf8_lossy(&output.stderr));

        Ok(CapturedOutput {
            stdout: output.stdout,
            status: output.status,
        })
    }
}

impl fmt::Display for CargoCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let argv = std::iter::once(&self.program).chain(&self.args);
        f.write_str(&shell_words::join(argv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn command(args: &[&str]) -> CargoCommand {
        CargoCommand::new("cargo").args(args.iter().copied())
    }

    #[test]
    fn test_json_flag_appended() {
        let cmd = command(&["clippy", "--all-targets"]).with_json_output();

        assert_eq!(cmd.get_args(), ["clippy", "--all-targets", JSON_FLAG]);
    }

    #[test]
    fn test_json_flag_not_duplicated() {
        let cmd = command(&["check", JSON_FLAG]).with_json_output().with_json_output();

        assert_eq!(cmd.get_args(), ["check", JSON_FLAG]);
    }

    #[test]
    fn test_json_flag_variants_detected() {
        assert!(command(&["check", "--message-format=json-diagnostic-short"]).requests_json());
        assert!(command(&["check", "--message-format", "json"]).requests_json());
        assert!(command(&["check", "--message-format=short,json"]).requests_json());
        assert!(!command(&["check", "--message-format=short"]).requests_json());
        assert!(!command(&["check", "--message-format"]).requests_json());
        assert!(!command(&[]).requests_json());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            cargo_command: "clippy -- -D 'clippy::all'".to_string(),
            ..Default::default()
        };

        let cmd = CargoCommand::from_config(&config).unwrap();

        assert_eq!(cmd.program(), "cargo");
        assert_eq!(cmd.get_args(), ["clippy", "--", "-D", "clippy::all", JSON_FLAG]);
    }

    #[test]
    fn test_from_config_empty_command() {
        let cmd = CargoCommand::from_config(&Config::default()).unwrap();

        assert_eq!(cmd.get_args(), [JSON_FLAG]);
        assert_eq!(cmd.to_string(), "cargo --message-format=json");
    }

    #[test]
    fn test_display_quotes_arguments() {
        let cmd = command(&["clippy", "--", "-A", "a b"]);

        assert_eq!(cmd.to_string(), "cargo clippy -- -A 'a b'");
    }

    #[test]
    fn test_spawn_failure() {
        let cmd = CargoCommand::new("definitely-not-a-real-program-4242");

        match cmd.run() {
            Err(Error::Spawn { program, .. }) => {
                assert_eq!(program, "definitely-not-a-real-program-4242")
            }
            other => panic!("expected spawn error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_stdout_only() {
        let cmd = CargoCommand::new("sh").args(["-c", "echo out; echo err >&2; exit 3"]);

        let captured = cmd.run().unwrap();

        assert_eq!(captured.stdout, b"out\n");
        assert_eq!(captured.status.code(), Some(3));
    }
}
