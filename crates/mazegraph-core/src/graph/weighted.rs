//! Directed weighted graph storage and construction

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use tracing::trace;

use crate::error::{EdgeRejection, MazeGraphError, Result};
use crate::graph::observer::GraphAlgorithmObserver;
use crate::graph::types::Weight;

/// A vertex and its outgoing edges, in insertion order
#[derive(Debug, Clone)]
struct VertexEntry<V> {
    vertex: V,
    edges: Vec<(usize, Weight)>,
}

/// A directed graph whose edges carry non-negative integer weights.
///
/// Vertices are interned into dense indices in insertion order, so iteration
/// over vertices and over each vertex's adjacency is deterministic. Re-adding
/// an edge overwrites its weight in place.
///
/// The graph owns a set of [`GraphAlgorithmObserver`]s that are notified by
/// [`search_bfs`](Self::search_bfs), [`search_dfs`](Self::search_dfs) and
/// [`shortest_paths`](Self::shortest_paths).
pub struct WeightedGraph<V> {
    index: HashMap<V, usize>,
    entries: Vec<VertexEntry<V>>,
    observers: Vec<Rc<dyn GraphAlgorithmObserver<V>>>,
}

impl<V: Debug> Debug for WeightedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("entries", &self.entries)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
            observers: Vec::new(),
        }
    }
}

impl<V: Eq + Hash + Clone + Debug> WeightedGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for all subsequent algorithm runs.
    ///
    /// Returns `false` if this exact observer instance is already registered.
    pub fn add_observer(&mut self, observer: Rc<dyn GraphAlgorithmObserver<V>>) -> bool {
        let already = self
            .observers
            .iter()
            .any(|existing| std::ptr::addr_eq(Rc::as_ptr(existing), Rc::as_ptr(&observer)));
        if already {
            return false;
        }
        self.observers.push(observer);
        true
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Add a vertex with no outgoing edges.
    ///
    /// Fails with [`MazeGraphError::DuplicateVertex`] if it is already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.index.contains_key(&vertex) {
            return Err(MazeGraphError::duplicate_vertex(&vertex));
        }
        let ix = self.entries.len();
        self.index.insert(vertex.clone(), ix);
        self.entries.push(VertexEntry {
            vertex,
            edges: Vec::new(),
        });
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Add or overwrite the directed edge `from -> to`.
    ///
    /// Both vertices must already be in the graph and `weight` must not be
    /// negative. The reverse edge is never created implicitly.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        let Some(&from_ix) = self.index.get(from) else {
            return Err(MazeGraphError::invalid_edge(
                from,
                to,
                EdgeRejection::MissingSource,
            ));
        };
        let Some(&to_ix) = self.index.get(to) else {
            return Err(MazeGraphError::invalid_edge(
                from,
                to,
                EdgeRejection::MissingDestination,
            ));
        };
        let Ok(weight) = Weight::try_from(weight) else {
            return Err(MazeGraphError::invalid_edge(
                from,
                to,
                EdgeRejection::NegativeWeight(weight),
            ));
        };

        let edges = &mut self.entries[from_ix].edges;
        match edges.iter_mut().find(|(dest, _)| *dest == to_ix) {
            Some(existing) => existing.1 = weight,
            None => edges.push((to_ix, weight)),
        }
        trace!(?from, ?to, weight, "edge_added");
        Ok(())
    }

    /// Weight of the directed edge `from -> to`.
    ///
    /// Returns `Ok(None)` when both vertices exist but no such edge does.
    pub fn get_weight(&self, from: &V, to: &V) -> Result<Option<Weight>> {
        let from_ix = self.require_index(from)?;
        let to_ix = self.require_index(to)?;
        Ok(self.entries[from_ix]
            .edges
            .iter()
            .find(|(dest, _)| *dest == to_ix)
            .map(|(_, weight)| *weight))
    }

    /// Outgoing edges of `vertex` as `(destination, weight)`, in insertion order
    pub fn neighbors(&self, vertex: &V) -> Result<Vec<(&V, Weight)>> {
        let ix = self.require_index(vertex)?;
        Ok(self.entries[ix]
            .edges
            .iter()
            .map(|&(dest, weight)| (&self.entries[dest].vertex, weight))
            .collect())
    }

    /// All vertices, in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|entry| &entry.vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.edges.len()).sum()
    }

    pub(crate) fn require_index(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| MazeGraphError::unknown_vertex(vertex))
    }

    pub(crate) fn vertex_at(&self, ix: usize) -> &V {
        &self.entries[ix].vertex
    }

    pub(crate) fn edges_at(&self, ix: usize) -> &[(usize, Weight)] {
        &self.entries[ix].edges
    }

    /// Deliver one notification to every observer, in registration order
    pub(crate) fn notify(&self, notification: impl Fn(&dyn GraphAlgorithmObserver<V>)) {
        for observer in &self.observers {
            notification(observer.as_ref());
        }
    }
}
