//! Mazegraph Core Library
//!
//! Weighted directed graph engine with an observer protocol for BFS, DFS and
//! Dijkstra runs, plus the adapter that turns a grid maze into a graph.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;
