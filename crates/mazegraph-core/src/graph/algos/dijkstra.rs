use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::types::{Algorithm, Cost, ShortestPath, ShortestPaths};
use crate::graph::WeightedGraph;
use crate::trace_time;

/// Per-run bookkeeping for Dijkstra, indexed by vertex index
struct DijkstraState {
    /// `None` means the vertex has not been reached yet
    costs: Vec<Option<Cost>>,
    predecessors: Vec<Option<usize>>,
    finished: Vec<bool>,
}

impl DijkstraState {
    fn new(vertex_count: usize, start: usize) -> Self {
        let mut costs = vec![None; vertex_count];
        costs[start] = Some(0);
        Self {
            costs,
            predecessors: vec![None; vertex_count],
            finished: vec![false; vertex_count],
        }
    }

    /// Unfinished vertex with the lowest known cost; ties go to the lowest index
    fn closest_unfinished(&self) -> Option<(usize, Cost)> {
        self.costs
            .iter()
            .enumerate()
            .filter(|(ix, _)| !self.finished[*ix])
            .filter_map(|(ix, cost)| cost.map(|c| (ix, c)))
            .min_by_key(|&(_, cost)| cost)
    }

    /// Walk predecessors back from `end` to the start vertex
    fn path_to(&self, end: usize) -> Option<(Vec<usize>, Cost)> {
        let cost = self.costs[end]?;
        let mut path = vec![end];
        let mut current = end;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some((path, cost))
    }
}

impl<V: Eq + Hash + Clone + Debug> WeightedGraph<V> {
    /// Dijkstra's algorithm from `start` over the entire graph.
    ///
    /// Uses an explicit finished set and a linear scan for the next vertex,
    /// O(V²) per run. The run does not stop early at `end`: every vertex
    /// reachable from `start` is finalized.
    ///
    /// The loop ends when no unfinished vertex has a known cost, rather than
    /// when every vertex is finished. Unreached vertices are therefore never
    /// finalized and never given a placeholder cost. A relaxation whose cost
    /// would overflow [`Cost`] is skipped, so a vertex reachable only through
    /// such a path stays unreached.
    ///
    /// Once the loop ends, the least-cost path to `end` is rebuilt from the
    /// predecessor chain and sent to observers via `completed`, exactly once,
    /// or [`ShortestPath::Unreachable`] if no path exists.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn shortest_paths(&self, start: &V, end: &V) -> Result<ShortestPaths<V>> {
        let started = Instant::now();
        let start_ix = self.require_index(start)?;
        let end_ix = self.require_index(end)?;

        self.notify(|observer| observer.began(Algorithm::Dijkstra));

        let mut state = DijkstraState::new(self.vertex_count(), start_ix);
        let mut finalized = Vec::new();

        while let Some((current, cost)) = state.closest_unfinished() {
            state.finished[current] = true;
            let vertex = self.vertex_at(current);
            self.notify(|observer| observer.vertex_finalized(vertex, cost));
            finalized.push((vertex.clone(), cost));

            for &(neighbor, weight) in self.edges_at(current) {
                if state.finished[neighbor] {
                    continue;
                }
                // An overflowing candidate cannot beat any representable cost
                let Some(candidate) = cost.checked_add(weight) else {
                    trace!(
                        from = ?vertex,
                        to = ?self.vertex_at(neighbor),
                        "relaxation_overflowed"
                    );
                    continue;
                };
                if state.costs[neighbor].is_none_or(|known| candidate < known) {
                    trace!(from = ?vertex, to = ?self.vertex_at(neighbor), candidate, "relaxed");
                    state.costs[neighbor] = Some(candidate);
                    state.predecessors[neighbor] = Some(current);
                }
            }
        }

        let path = match state.path_to(end_ix) {
            Some((indices, cost)) => ShortestPath::Found {
                vertices: indices
                    .into_iter()
                    .map(|ix| self.vertex_at(ix).clone())
                    .collect(),
                cost,
            },
            None => ShortestPath::Unreachable,
        };

        self.notify(|observer| observer.completed(&path));

        debug!(
            finalized = finalized.len(),
            unreached = self.vertex_count() - finalized.len(),
            path_cost = ?path.cost(),
            "dijkstra_complete"
        );
        trace_time!(started, "shortest_paths");

        Ok(ShortestPaths { finalized, path })
    }
}
