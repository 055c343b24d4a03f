//! Weighted graph engine
//!
//! Provides a generic directed graph with non-negative integer edge weights
//! and three observable algorithms:
//! - BFS and DFS searches from a start vertex to an end vertex
//! - Dijkstra shortest paths with explicit unreachable results
//! - An observer trait notified synchronously as each algorithm runs

pub mod algos;
pub mod observer;
pub mod types;
pub mod weighted;

pub use observer::{AlgorithmEvent, EventLog, GraphAlgorithmObserver, TracingObserver};
pub use types::{Algorithm, Cost, SearchOutcome, SearchRun, ShortestPath, ShortestPaths, Weight};
pub use weighted::WeightedGraph;
