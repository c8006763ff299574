//! Fluent API for building UndirectedGraph instances.

use std::hash::Hash;

use super::UndirectedGraph;

/// Fluent builder for constructing an UndirectedGraph.
pub struct GraphBuilder<V: Eq + Hash> {
    graph: UndirectedGraph<V>,
}

impl<V> GraphBuilder<V>
where
    V: Eq + Hash + Clone,
{
    /// Create a new builder with no vertices.
    pub fn new() -> Self {
        Self {
            graph: UndirectedGraph::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(mut self, vertex: V) -> Self {
        self.graph.add_vertex(vertex);
        self
    }

    /// Add several vertices.
    pub fn vertices(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        for vertex in vertices {
            self.graph.add_vertex(vertex);
        }
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(mut self, a: V, b: V) -> Self {
        self.graph.add_edge(a, b);
        self
    }

    /// Add several edges.
    pub fn edges(mut self, edges: impl IntoIterator<Item = (V, V)>) -> Self {
        for (a, b) in edges {
            self.graph.add_edge(a, b);
        }
        self
    }

    /// Add a vertex together with its neighbors, as in one adjacency-list row.
    pub fn adjacency(mut self, vertex: V, neighbors: impl IntoIterator<Item = V>) -> Self {
        self.graph.add_vertex(vertex.clone());
        for neighbor in neighbors {
            self.graph.add_edge(vertex.clone(), neighbor);
        }
        self
    }

    /// Build the final UndirectedGraph.
    pub fn build(self) -> UndirectedGraph<V> {
        self.graph
    }
}

impl<V> Default for GraphBuilder<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
