use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::graph::types::{Algorithm, SearchRun};
use crate::graph::WeightedGraph;
use crate::trace_time;

impl<V: Eq + Hash + Clone + Debug> WeightedGraph<V> {
    /// Breadth-first search from `start` until `end` has been visited.
    ///
    /// Vertices are visited when dequeued, not when discovered, so a vertex
    /// may sit in the queue more than once but is visited at most once.
    /// Outgoing edges are followed in insertion order. If `end` is
    /// unreachable the search exhausts the queue and `search_concluded` is
    /// never sent.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn search_bfs(&self, start: &V, end: &V) -> Result<SearchRun<V>> {
        let started = Instant::now();
        let start_ix = self.require_index(start)?;
        let end_ix = self.require_index(end)?;

        self.notify(|observer| observer.began(Algorithm::Bfs));

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start_ix]);

        while let Some(current) = queue.pop_front() {
            if !visited[current] {
                let vertex = self.vertex_at(current);
                self.notify(|observer| observer.visited(vertex));
                visited[current] = true;
                order.push(vertex.clone());

                for &(neighbor, _) in self.edges_at(current) {
                    if !visited[neighbor] {
                        queue.push_back(neighbor);
                    }
                }
            }

            if visited[end_ix] {
                self.notify(|observer| observer.search_concluded());
                debug!(visited = order.len(), pending = queue.len(), "bfs_reached_end");
                trace_time!(started, "search_bfs");
                return Ok(SearchRun::reached(order));
            }
        }

        debug!(visited = order.len(), "bfs_exhausted");
        trace_time!(started, "search_bfs");
        Ok(SearchRun::exhausted(order))
    }
}
