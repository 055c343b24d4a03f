use std::path::PathBuf;

use clap::Args;
use mazegraph_core::graph::Algorithm;
use mazegraph_core::maze::Juncture;

use super::parse::{parse_algorithm, parse_juncture};

#[derive(Args, Debug, Clone)]
pub struct MazeArgs {
    /// Maze file (.toml or .json)
    pub maze: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub maze: MazeArgs,

    /// Start juncture as X,Y (default: upper-left corner)
    #[arg(long, value_parser = parse_juncture)]
    pub from: Option<Juncture>,

    /// End juncture as X,Y (default: lower-right corner)
    #[arg(long, value_parser = parse_juncture)]
    pub to: Option<Juncture>,
}

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Override the configured algorithm (bfs, dfs, dijkstra)
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,
}
