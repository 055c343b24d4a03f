//! Mazegraph - observable graph searches over grid mazes
//!
//! Loads a maze file, turns it into a weighted directed graph and runs BFS,
//! DFS or Dijkstra between two junctures, reporting every observer
//! notification the run produces.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use mazegraph_core::config::Config;
use mazegraph_core::error::{ExitCode as MazeExitCode, MazeGraphError};
use mazegraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let error = match err.kind() {
                    // Help and version are informational, not errors - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        MazeGraphError::UsageError(err.to_string())
                    }
                    _ => MazeGraphError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&e, cli.format.unwrap_or_default(), cli.quiet),
    };

    let log_level = cli.log_level.as_deref().or(config.log_level.as_deref());
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let format = cli.format.unwrap_or(config.format);

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::from(MazeExitCode::Success as u8),
        Err(e) => report(&e, format, cli.quiet),
    }
}

fn report(error: &MazeGraphError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }

    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    args_request_json(env::args().skip(1))
}

fn args_request_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if arg
            .strip_prefix("--format=")
            .is_some_and(|v| v.eq_ignore_ascii_case("json"))
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_json_format_detected_in_any_case() {
        assert!(args_request_json(argv(&["--format", "json", "info"])));
        assert!(args_request_json(argv(&["--format", "JSON", "info"])));
        assert!(args_request_json(argv(&["info", "--format=Json"])));
    }

    #[test]
    fn test_other_formats_not_detected() {
        assert!(!args_request_json(argv(&["--format", "human", "info"])));
        assert!(!args_request_json(argv(&["--format"])));
        assert!(!args_request_json(argv(&["info", "json"])));
    }
}
