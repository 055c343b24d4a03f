use serde::{Deserialize, Serialize};

use crate::error::MazeGraphError;

/// Weight of a single directed edge
pub type Weight = u64;

/// Accumulated cost of a path from the start vertex
pub type Cost = u64;

/// The algorithm a graph run is performing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    #[default]
    /// Dijkstra's shortest paths
    Dijkstra,
}

impl std::str::FromStr for Algorithm {
    type Err = MazeGraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(MazeGraphError::invalid_value(
                "algorithm",
                format!("{} (expected: bfs, dfs, dijkstra)", other),
            )),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// How a BFS or DFS run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOutcome {
    /// The end vertex was visited and the search concluded
    Reached,
    /// Every reachable vertex was visited without reaching the end vertex
    Exhausted,
}

/// Result of a BFS or DFS run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRun<V> {
    pub outcome: SearchOutcome,
    /// Vertices in the order they were visited
    pub visited: Vec<V>,
}

impl<V> SearchRun<V> {
    pub fn reached(visited: Vec<V>) -> Self {
        Self {
            outcome: SearchOutcome::Reached,
            visited,
        }
    }

    pub fn exhausted(visited: Vec<V>) -> Self {
        Self {
            outcome: SearchOutcome::Exhausted,
            visited,
        }
    }

    pub fn is_reached(&self) -> bool {
        self.outcome == SearchOutcome::Reached
    }
}

/// Least-cost path from the start vertex to the end vertex of a Dijkstra run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ShortestPath<V> {
    /// Start first, end last
    Found { vertices: Vec<V>, cost: Cost },
    /// No chain of edges leads from start to end
    Unreachable,
}

impl<V> ShortestPath<V> {
    pub fn vertices(&self) -> Option<&[V]> {
        match self {
            ShortestPath::Found { vertices, .. } => Some(vertices),
            ShortestPath::Unreachable => None,
        }
    }

    pub fn cost(&self) -> Option<Cost> {
        match self {
            ShortestPath::Found { cost, .. } => Some(*cost),
            ShortestPath::Unreachable => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ShortestPath::Found { .. })
    }
}

/// Result of a Dijkstra run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths<V> {
    /// Finished vertices with their final cost, in finalization order
    pub finalized: Vec<(V, Cost)>,
    pub path: ShortestPath<V>,
}

impl<V: PartialEq> ShortestPaths<V> {
    /// Final cost of a vertex, or `None` if it was never reached
    pub fn cost_of(&self, vertex: &V) -> Option<Cost> {
        self.finalized
            .iter()
            .find(|(v, _)| v == vertex)
            .map(|(_, cost)| *cost)
    }
}
