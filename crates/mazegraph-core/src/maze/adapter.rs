use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::maze::{Juncture, Maze, Side};
use crate::trace_time;

/// Convert a maze into a directed weighted graph over its junctures.
///
/// Every cell of the `width x height` grid becomes a vertex, inserted
/// column by column (`x` outer, `y` inner). A second pass in the same order
/// adds one edge per open side whose neighbor is a vertex of the graph, checking
/// sides in [`Side::ALL`] order. Edge weights come from [`Maze::weight`],
/// so a negative weight surfaces as an `InvalidEdge` error.
#[tracing::instrument(
    level = "debug",
    skip(maze),
    fields(width = maze.width(), height = maze.height())
)]
pub fn build_maze_graph(maze: &dyn Maze) -> Result<WeightedGraph<Juncture>> {
    let started = Instant::now();
    let mut graph = WeightedGraph::new();

    for x in 0..maze.width() {
        for y in 0..maze.height() {
            graph.add_vertex(Juncture::new(x, y))?;
        }
    }

    for x in 0..maze.width() {
        for y in 0..maze.height() {
            let here = Juncture::new(x, y);
            for side in Side::ALL {
                if maze.is_wall(here, side) {
                    continue;
                }
                let there = here.neighbor(side);
                if !graph.contains_vertex(&there) {
                    continue;
                }
                graph.add_edge(&here, &there, maze.weight(here, side))?;
            }
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "maze_graph_built"
    );
    trace_time!(started, "build_maze_graph");

    Ok(graph)
}
