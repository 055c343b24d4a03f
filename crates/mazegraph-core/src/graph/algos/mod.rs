//! Graph algorithm implementations
//!
//! Each algorithm is an inherent method on [`WeightedGraph`](super::WeightedGraph)
//! that notifies the graph's observers as it runs:
//! - `bfs`: Breadth-first search from a start vertex to an end vertex
//! - `dfs`: Depth-first search with an explicit frame stack
//! - `dijkstra`: Shortest paths over the whole graph, O(V²) selection

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
