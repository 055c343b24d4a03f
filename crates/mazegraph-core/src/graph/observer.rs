//! Observer protocol for graph algorithm runs
//!
//! A [`WeightedGraph`](super::WeightedGraph) notifies every registered
//! observer, in registration order, as an algorithm makes progress. All
//! notifications are synchronous: the algorithm does not continue until each
//! observer has returned.

use std::cell::RefCell;
use std::fmt::Debug;

use serde::Serialize;

use super::types::{Algorithm, Cost, ShortestPath};

/// Receives progress notifications from graph algorithms.
///
/// Every method has an empty default, so implementors only override the
/// notifications they care about.
pub trait GraphAlgorithmObserver<V> {
    /// An algorithm run is starting
    fn began(&self, _algorithm: Algorithm) {}

    /// BFS/DFS just marked `vertex` as visited
    fn visited(&self, _vertex: &V) {}

    /// BFS/DFS visited the end vertex; no further vertices will be processed
    fn search_concluded(&self) {}

    /// Dijkstra moved `vertex` into the finished set with its final cost
    fn vertex_finalized(&self, _vertex: &V, _cost: Cost) {}

    /// Dijkstra finished; carries the least-cost path to the end vertex
    fn completed(&self, _path: &ShortestPath<V>) {}
}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlgorithmEvent<V> {
    Began { algorithm: Algorithm },
    Visited { vertex: V },
    SearchConcluded,
    VertexFinalized { vertex: V, cost: Cost },
    Completed { path: ShortestPath<V> },
}

/// Observer that records every notification it receives
#[derive(Debug)]
pub struct EventLog<V> {
    events: RefCell<Vec<AlgorithmEvent<V>>>,
}

impl<V> Default for EventLog<V> {
    fn default() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }
}

impl<V: Clone> EventLog<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<AlgorithmEvent<V>> {
        self.events.borrow().clone()
    }

    /// Remove and return all recorded events
    pub fn take(&self) -> Vec<AlgorithmEvent<V>> {
        self.events.take()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Vertices from `visited` events, in order
    pub fn visited_vertices(&self) -> Vec<V> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                AlgorithmEvent::Visited { vertex } => Some(vertex.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of `search_concluded` events
    pub fn conclusions(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, AlgorithmEvent::SearchConcluded))
            .count()
    }

    fn push(&self, event: AlgorithmEvent<V>) {
        self.events.borrow_mut().push(event);
    }
}

impl<V: Clone> GraphAlgorithmObserver<V> for EventLog<V> {
    fn began(&self, algorithm: Algorithm) {
        self.push(AlgorithmEvent::Began { algorithm });
    }

    fn visited(&self, vertex: &V) {
        self.push(AlgorithmEvent::Visited {
            vertex: vertex.clone(),
        });
    }

    fn search_concluded(&self) {
        self.push(AlgorithmEvent::SearchConcluded);
    }

    fn vertex_finalized(&self, vertex: &V, cost: Cost) {
        self.push(AlgorithmEvent::VertexFinalized {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn completed(&self, path: &ShortestPath<V>) {
        self.push(AlgorithmEvent::Completed { path: path.clone() });
    }
}

/// Observer that forwards notifications to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<V: Debug> GraphAlgorithmObserver<V> for TracingObserver {
    fn began(&self, algorithm: Algorithm) {
        tracing::debug!(%algorithm, "algorithm_began");
    }

    fn visited(&self, vertex: &V) {
        tracing::trace!(?vertex, "vertex_visited");
    }

    fn search_concluded(&self) {
        tracing::debug!("search_concluded");
    }

    fn vertex_finalized(&self, vertex: &V, cost: Cost) {
        tracing::trace!(?vertex, cost, "vertex_finalized");
    }

    fn completed(&self, path: &ShortestPath<V>) {
        match path {
            ShortestPath::Found { vertices, cost } => {
                let hops = vertices.len().saturating_sub(1);
                tracing::debug!(hops, cost, "dijkstra_completed");
            }
            ShortestPath::Unreachable => tracing::debug!("dijkstra_completed_unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let log: EventLog<&str> = EventLog::new();
        log.began(Algorithm::Bfs);
        log.visited(&"A");
        log.visited(&"B");
        log.search_concluded();

        assert_eq!(log.len(), 4);
        assert_eq!(log.visited_vertices(), vec!["A", "B"]);
        assert_eq!(log.conclusions(), 1);
        assert_eq!(
            log.events()[0],
            AlgorithmEvent::Began {
                algorithm: Algorithm::Bfs
            }
        );
    }

    #[test]
    fn test_event_log_take_drains() {
        let log: EventLog<&str> = EventLog::new();
        log.vertex_finalized(&"A", 0);
        let drained = log.take();
        assert_eq!(drained.len(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_default_methods_are_noops() {
        struct Silent;
        impl GraphAlgorithmObserver<u32> for Silent {}

        let silent = Silent;
        silent.began(Algorithm::Dfs);
        silent.visited(&1);
        silent.completed(&ShortestPath::Unreachable);
    }

    #[test]
    fn test_event_serialization() {
        let event = AlgorithmEvent::VertexFinalized {
            vertex: "B",
            cost: 7,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "vertex_finalized", "vertex": "B", "cost": 7})
        );

        let json = serde_json::to_value(AlgorithmEvent::<&str>::SearchConcluded).unwrap();
        assert_eq!(json, serde_json::json!({"event": "search_concluded"}));
    }
}
