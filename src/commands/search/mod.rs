//! Observed BFS, DFS and Dijkstra runs over a maze file

mod human;
mod json;

use std::rc::Rc;
use std::time::Instant;

use serde::Serialize;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use mazegraph_core::error::Result;
use mazegraph_core::graph::{Algorithm, AlgorithmEvent, EventLog, SearchOutcome, TracingObserver};
use mazegraph_core::maze::{build_maze_graph, GridMaze, Juncture};

/// Everything observed during one algorithm run
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub from: Juncture,
    pub to: Juncture,
    /// Only set for BFS and DFS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SearchOutcome>,
    pub events: Vec<AlgorithmEvent<Juncture>>,
}

/// Execute a search command
pub fn execute(ctx: &CommandContext, algorithm: Algorithm, args: &SearchArgs) -> Result<()> {
    let start = Instant::now();

    let maze = GridMaze::load(&args.maze.maze)?;
    let mut graph = build_maze_graph(&maze)?;
    trace_command!(ctx.cli, start, "build_graph");

    let from = args.from.unwrap_or_else(|| maze.entrance());
    let to = args.to.unwrap_or_else(|| maze.exit());

    let log = Rc::new(EventLog::<Juncture>::new());
    graph.add_observer(log.clone());
    graph.add_observer(Rc::new(TracingObserver));

    let outcome = match algorithm {
        Algorithm::Bfs => Some(graph.search_bfs(&from, &to)?.outcome),
        Algorithm::Dfs => Some(graph.search_dfs(&from, &to)?.outcome),
        Algorithm::Dijkstra => {
            graph.shortest_paths(&from, &to)?;
            None
        }
    };
    trace_command!(ctx.cli, start, "run_algorithm");

    let report = SearchReport {
        algorithm,
        from,
        to,
        outcome,
        events: log.take(),
    };

    match ctx.format {
        OutputFormat::Json => json::output_report(&report)?,
        OutputFormat::Human => human::output_report(ctx.cli, &report),
    }

    trace_command!(ctx.cli, ctx.start, "search_complete");
    Ok(())
}
