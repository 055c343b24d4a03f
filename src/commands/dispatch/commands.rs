//! Command implementations for all mazegraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{info, search};
use mazegraph_core::error::Result;
use mazegraph_core::graph::Algorithm;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs(args) => search::execute(ctx, Algorithm::Bfs, args),
            Commands::Dfs(args) => search::execute(ctx, Algorithm::Dfs, args),
            Commands::Dijkstra(args) => search::execute(ctx, Algorithm::Dijkstra, args),
            Commands::Solve(args) => {
                let algorithm = args.algorithm.unwrap_or(ctx.config.algorithm);
                search::execute(ctx, algorithm, &args.search)
            }
            Commands::Info(args) => info::execute(ctx, args),
        }
    }
}
