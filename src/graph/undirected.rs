//! Core graph structure: vertices with symmetric neighbor sets.

use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{GraphError, GraphResult};

/// An undirected graph stored as an adjacency list.
///
/// Every vertex maps to the set of vertices it shares an edge with. The
/// relation is kept symmetric: whenever `b` is in the set of `a`, `a` is in
/// the set of `b`. Vertices and neighbors keep their insertion order, so
/// enumeration and traversal are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<V: Eq + Hash> {
    /// Adjacency list: vertex -> neighbors, both in insertion order.
    adjacency: IndexMap<V, IndexSet<V>>,
}

impl<V: Eq + Hash> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V> UndirectedGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an adjacency-list literal.
    ///
    /// One-sided entries are mirrored, so `{A: [B]}` yields the edge A–B
    /// even when B lists no neighbors.
    pub fn from_adjacency<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let mut graph = Self::new();
        for (vertex, neighbors) in entries {
            graph.add_vertex(vertex.clone());
            for neighbor in neighbors {
                graph.add_edge(vertex.clone(), neighbor);
            }
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// True if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Every undirected edge exactly once, as `(a, b)` where `a` was
    /// inserted no later than `b`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(move |(index, (vertex, neighbors))| {
                neighbors
                    .iter()
                    .filter(move |n| {
                        self.adjacency
                            .get_index_of(*n)
                            .is_some_and(|other| other >= index)
                    })
                    .map(move |n| (vertex, n))
            })
    }

    /// Vertex -> neighbors pairs, in insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&V, &IndexSet<V>)> + '_ {
        self.adjacency.iter()
    }

    /// Position of a vertex in insertion order.
    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    /// The neighbor set of a vertex, if present.
    pub(crate) fn lookup(&self, vertex: &V) -> Option<&IndexSet<V>> {
        self.adjacency.get(vertex)
    }

    /// The neighbor set of a vertex.
    pub(crate) fn neighbor_set(&self, vertex: &V) -> GraphResult<&IndexSet<V>, V> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }

    /// Iterate the neighbors of a vertex.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<impl Iterator<Item = &V> + '_, V> {
        Ok(self.neighbor_set(vertex)?.iter())
    }

    /// Number of neighbors of a vertex. A self-loop counts once.
    pub fn degree(&self, vertex: &V) -> GraphResult<usize, V> {
        Ok(self.neighbor_set(vertex)?.len())
    }

    /// Add a vertex with no neighbors. Returns false if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, IndexSet::new());
        log::trace!("Added vertex, {} vertices", self.adjacency.len());
        true
    }

    /// Add an undirected edge, creating either endpoint if missing.
    ///
    /// Adding an existing edge again has no effect. `add_edge(a, a)` stores
    /// a self-loop: `a` appears once in its own neighbor set.
    pub fn add_edge(&mut self, a: V, b: V) {
        let inserted = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        if inserted {
            log::trace!("Added edge, {} vertices", self.adjacency.len());
        }
    }

    /// Remove a vertex and every edge touching it.
    ///
    /// Returns its former neighbors, one per dropped edge. A vertex with a
    /// self-loop is listed among its own neighbors.
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphResult<Vec<V>, V> {
        let neighbors = self
            .adjacency
            .shift_remove(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))?;

        let mut detached = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            if neighbor == *vertex {
                detached.push(neighbor);
            } else if let Some(set) = self.adjacency.get_mut(&neighbor) {
                set.shift_remove(vertex);
                detached.push(neighbor);
            }
        }

        log::debug!(
            "Removed vertex, {} incident edges dropped, {} vertices remain",
            detached.len(),
            self.adjacency.len()
        );
        Ok(detached)
    }

    /// Remove the edge between `a` and `b`.
    ///
    /// Both vertices must exist. Returns false if they were not adjacent.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> GraphResult<bool, V> {
        self.neighbor_set(a)?;
        self.neighbor_set(b)?;

        let mut removed = false;
        if let Some(set) = self.adjacency.get_mut(a) {
            removed |= set.shift_remove(b);
        }
        if let Some(set) = self.adjacency.get_mut(b) {
            removed |= set.shift_remove(a);
        }
        log::trace!("Remove edge: removed={}", removed);
        Ok(removed)
    }

    /// True if `a` and `b` share an edge. Both vertices must exist.
    pub fn has_edge(&self, a: &V, b: &V) -> GraphResult<bool, V> {
        let from_a = self.neighbor_set(a)?;
        let from_b = self.neighbor_set(b)?;
        Ok(from_a.contains(b) && from_b.contains(a))
    }

    /// Remove all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}

/// One line per vertex: `<vertex> -> <neighbor>,<neighbor>,...`
impl<V> fmt::Display for UndirectedGraph<V>
where
    V: Eq + Hash + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "{} -> ", vertex)?;
            for (i, neighbor) in neighbors.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", neighbor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V> Serialize for UndirectedGraph<V>
where
    V: Eq + Hash + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.adjacency.serialize(serializer)
    }
}

impl<'de, V> Deserialize<'de> for UndirectedGraph<V>
where
    V: Eq + Hash + Clone + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: IndexMap<V, Vec<V>> = IndexMap::deserialize(deserializer)?;
        Ok(Self::from_adjacency(raw))
    }
}
