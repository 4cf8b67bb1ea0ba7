//! Graph trait and SimpleGraph implementation.
//!
//! The solver only needs a handful of queries against the instance: adjacency,
//! degrees, the non-edge list (which seeds the pair constraints of the LP
//! relaxation), and edge counts inside induced subgraphs (the clique
//! completeness check).

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// Trait for undirected graph types.
///
/// Vertices are `0..num_vertices()`. All default methods are derived from
/// `has_edge`/`neighbors`, so an implementation only has to provide the
/// basic queries.
pub trait Graph: Clone + Send + Sync + 'static {
    /// Returns the number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Returns the number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// Returns all edges as a list of (u, v) pairs, each edge once.
    fn edges(&self) -> Vec<(usize, usize)>;

    /// Checks if an edge exists between vertices u and v.
    fn has_edge(&self, u: usize, v: usize) -> bool;

    /// Returns all neighbors of vertex v.
    fn neighbors(&self, v: usize) -> Vec<usize>;

    /// Returns the degree of vertex v.
    fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Returns all non-adjacent pairs u < v.
    fn non_edges(&self) -> Vec<(usize, usize)> {
        let n = self.num_vertices();
        let mut pairs = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                if !self.has_edge(u, v) {
                    pairs.push((u, v));
                }
            }
        }
        pairs
    }

    /// Returns the number of edges of the subgraph induced by `vertices`.
    fn induced_edge_count(&self, vertices: &[usize]) -> usize {
        let mut count = 0;
        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                if self.has_edge(u, v) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Returns the non-adjacent pairs u < v inside `vertices` (the edges of
    /// the complement of the induced subgraph).
    fn complement_edges_within(&self, vertices: &[usize]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                if u != v && !self.has_edge(u, v) {
                    pairs.push((u, v));
                }
            }
        }
        pairs
    }
}

/// A simple unweighted undirected graph, backed by petgraph's `UnGraph`.
///
/// # Example
///
/// ```
/// use cliquer::topology::{Graph, SimpleGraph};
///
/// let graph = SimpleGraph::new(4, vec![(0, 1), (1, 2), (2, 3)]);
/// assert_eq!(graph.num_vertices(), 4);
/// assert_eq!(graph.num_edges(), 3);
/// assert!(graph.has_edge(0, 1));
/// assert!(!graph.has_edge(0, 2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleGraph {
    inner: UnGraph<(), ()>,
}

impl SimpleGraph {
    /// Creates a new graph with the given vertices and edges.
    ///
    /// Parallel edges are collapsed, so DIMACS files that repeat an `e` line
    /// still produce a simple graph.
    ///
    /// # Panics
    ///
    /// Panics if any edge references a vertex index >= num_vertices or is a
    /// self-loop.
    pub fn new(num_vertices: usize, edges: Vec<(usize, usize)>) -> Self {
        let mut inner = UnGraph::new_undirected();
        for _ in 0..num_vertices {
            inner.add_node(());
        }
        for (u, v) in edges {
            assert!(
                u < num_vertices && v < num_vertices,
                "edge ({}, {}) references vertex >= num_vertices ({})",
                u,
                v,
                num_vertices
            );
            assert!(u != v, "self-loop on vertex {}", u);
            let (a, b) = (NodeIndex::new(u), NodeIndex::new(v));
            if inner.find_edge(a, b).is_none() {
                inner.add_edge(a, b, ());
            }
        }
        Self { inner }
    }

    /// Creates an empty graph with the given number of vertices.
    pub fn empty(num_vertices: usize) -> Self {
        Self::new(num_vertices, vec![])
    }

    /// Creates a complete graph (all vertices connected).
    pub fn complete(num_vertices: usize) -> Self {
        let mut edges = Vec::new();
        for i in 0..num_vertices {
            for j in (i + 1)..num_vertices {
                edges.push((i, j));
            }
        }
        Self::new(num_vertices, edges)
    }

    /// Creates a cycle graph (0-1-2-...-n-0).
    pub fn cycle(num_vertices: usize) -> Self {
        if num_vertices < 3 {
            let edges: Vec<_> = (0..num_vertices.saturating_sub(1))
                .map(|i| (i, i + 1))
                .collect();
            return Self::new(num_vertices, edges);
        }
        let mut edges: Vec<_> = (0..num_vertices - 1).map(|i| (i, i + 1)).collect();
        edges.push((num_vertices - 1, 0));
        Self::new(num_vertices, edges)
    }

    /// Returns the neighbor sets of all vertices at once.
    ///
    /// The heuristic recomputes residual degrees many times; a dense
    /// adjacency snapshot avoids going through petgraph on every probe.
    pub fn neighbor_sets(&self) -> Vec<std::collections::HashSet<usize>> {
        (0..self.num_vertices())
            .map(|v| self.neighbors(v).into_iter().collect())
            .collect()
    }
}

impl Graph for SimpleGraph {
    fn num_vertices(&self) -> usize {
        self.inner.node_count()
    }

    fn num_edges(&self) -> usize {
        self.inner.edge_count()
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.inner
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect()
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.inner
            .find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .is_some()
    }

    fn neighbors(&self, v: usize) -> Vec<usize> {
        self.inner
            .neighbors(NodeIndex::new(v))
            .map(|n| n.index())
            .collect()
    }
}
