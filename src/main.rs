//! @ai:module:intent CLI entry point for cargo-annotation
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on runner, config, output

use cargo_annotation::{output, parse_flag, runner, Config, Result, Summary};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cargo-annotation")]
#[command(author, version, about = "Report cargo diagnostics as CI workflow annotations")]
struct Cli {
    /// Extra arguments for cargo, split with shell quoting rules (e.g. "clippy --all-targets")
    #[arg(
        long,
        env = "INPUT_CARGO_COMMAND",
        default_value = "",
        allow_hyphen_values = true
    )]
    cargo_command: String,

    /// Print annotations; only "true" (any case) enables them
    #[arg(long, env = "INPUT_WITH_ANNOTATION", default_value = "true")]
    with_annotation: String,

    /// Program to run in place of cargo
    #[arg(long, env = "CARGO", default_value = "cargo")]
    cargo: String,

    /// Read captured JSON diagnostics from a file ("-" for stdin) instead of running cargo
    #[arg(long, short)]
    input: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            program: cli.cargo,
            cargo_command: cli.cargo_command,
            with_annotation: parse_flag(&cli.with_annotation),
            input: cli.input,
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries nothing but annotations.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cargo_annotation=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Cli::parse());
    let mut stdout = std::io::stdout().lock();

    let result = runner::run(&config, &mut stdout);

    match &result {
        Ok(summary) => eprintln!("{}", output::format_summary(summary, config.with_annotation)),
        Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
    }

    ExitCode::from(exit_code(&result))
}

/// @ai:intent Map a run to its exit status: 0 found, 1 none found, 2 failed
/// @ai:effects pure
fn exit_code(result: &Result<Summary>) -> u8 {
    match result {
        Ok(summary) if summary.found_any() => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}
