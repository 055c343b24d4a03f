//! Maze summary command

use std::time::Instant;

use crate::cli::{MazeArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};
use mazegraph_core::error::Result;
use mazegraph_core::maze::{build_maze_graph, GridMaze, Maze};

/// Execute the info command
pub fn execute(ctx: &CommandContext, args: &MazeArgs) -> Result<()> {
    let start = Instant::now();

    let maze = GridMaze::load(&args.maze)?;
    let graph = build_maze_graph(&maze)?;
    trace_command!(ctx.cli, start, "build_graph");

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "maze": args.maze.display().to_string(),
                "width": maze.width(),
                "height": maze.height(),
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("maze: {}", args.maze.display());
            }
            println!("size: {}x{}", maze.width(), maze.height());
            println!("vertices: {}", graph.vertex_count());
            println!("edges: {}", graph.edge_count());
        }
    }

    Ok(())
}
