use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::graph::types::{Algorithm, SearchRun};
use crate::graph::WeightedGraph;
use crate::trace_time;

/// A vertex on the DFS path and the next adjacency slot to try
struct Frame {
    vertex: usize,
    next_edge: usize,
}

impl<V: Eq + Hash + Clone + Debug> WeightedGraph<V> {
    /// Pre-order depth-first search from `start` until `end` has been visited.
    ///
    /// Adjacencies are explored in insertion order. The path is kept on an
    /// explicit stack, so search depth is bounded by heap memory rather than
    /// the call stack. `search_concluded` is sent once, right after `end` is
    /// visited, and the whole search stops there.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn search_dfs(&self, start: &V, end: &V) -> Result<SearchRun<V>> {
        let started = Instant::now();
        let start_ix = self.require_index(start)?;
        let end_ix = self.require_index(end)?;

        self.notify(|observer| observer.began(Algorithm::Dfs));

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();

        self.visit_vertex(start_ix, &mut visited, &mut order);
        if start_ix == end_ix {
            return Ok(self.conclude_dfs(order, started));
        }

        let mut stack = vec![Frame {
            vertex: start_ix,
            next_edge: 0,
        }];
        let mut max_depth = 1;

        while let Some(frame) = stack.last_mut() {
            let edges = self.edges_at(frame.vertex);
            let unvisited = edges[frame.next_edge..]
                .iter()
                .position(|&(neighbor, _)| !visited[neighbor]);

            let Some(offset) = unvisited else {
                stack.pop();
                continue;
            };

            let slot = frame.next_edge + offset;
            frame.next_edge = slot + 1;
            let next = edges[slot].0;

            self.visit_vertex(next, &mut visited, &mut order);
            if next == end_ix {
                debug!(depth = stack.len() + 1, "dfs_reached_end");
                return Ok(self.conclude_dfs(order, started));
            }

            stack.push(Frame {
                vertex: next,
                next_edge: 0,
            });
            max_depth = max_depth.max(stack.len());
        }

        debug!(visited = order.len(), max_depth, "dfs_exhausted");
        trace_time!(started, "search_dfs");
        Ok(SearchRun::exhausted(order))
    }

    fn visit_vertex(&self, ix: usize, visited: &mut [bool], order: &mut Vec<V>) {
        let vertex = self.vertex_at(ix);
        self.notify(|observer| observer.visited(vertex));
        visited[ix] = true;
        order.push(vertex.clone());
    }

    fn conclude_dfs(&self, order: Vec<V>, started: Instant) -> SearchRun<V> {
        self.notify(|observer| observer.search_concluded());
        trace_time!(started, "search_dfs");
        SearchRun::reached(order)
    }
}
