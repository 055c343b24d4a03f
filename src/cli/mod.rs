//! CLI argument parsing for mazegraph
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{MazeArgs, SearchArgs, SolveArgs};
pub use mazegraph_core::format::OutputFormat;
use parse::parse_output_format;

/// Mazegraph - observable BFS, DFS and Dijkstra runs over grid mazes
#[derive(Parser, Debug)]
#[command(name = "mazegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json (defaults to the configured format)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. "trace" or "mazegraph_core=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a config file (defaults to ~/.config/mazegraph/config.toml)
    #[arg(long, global = true, env = "MAZEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search between two junctures
    Bfs(SearchArgs),

    /// Depth-first search between two junctures
    Dfs(SearchArgs),

    /// Dijkstra shortest path between two junctures
    Dijkstra(SearchArgs),

    /// Run the configured default algorithm
    Solve(SolveArgs),

    /// Show maze dimensions and graph size
    Info(MazeArgs),
}
