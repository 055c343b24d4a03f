//! Command dispatch logic for mazegraph

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use mazegraph_core::config::Config;
use mazegraph_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    debug!(%format, algorithm = %config.algorithm, "resolved_config");

    let ctx = CommandContext::new(cli, config, format, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
