//! Generic directed weighted multigraph and shortest-path search.
//!
//! Vertices are dense integer ids. Edges live in an arena and are referred
//! to by their position in it, so callers can keep per-edge payloads in a
//! parallel vector indexed by `EdgeId`.

mod dijkstra;

use std::fmt;
use std::ops::Add;

pub use dijkstra::{PathInfo, shortest_path};

/// Dense vertex identifier.
pub type VertexId = usize;

/// Position of an edge in the graph's edge arena.
pub type EdgeId = usize;

/// A weight usable by the shortest-path search.
///
/// `Default` must be the zero weight. Weights added to the graph must be
/// non-negative.
pub trait EdgeWeight: Copy + PartialOrd + Add<Output = Self> + Default + fmt::Debug {}

impl<T> EdgeWeight for T where T: Copy + PartialOrd + Add<Output = T> + Default + fmt::Debug {}

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

/// A directed multigraph with weighted edges.
///
/// Parallel edges and self-loops are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedWeightedGraph<W> {
    edges: Vec<Edge<W>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<W: EdgeWeight> DirectedWeightedGraph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Adds an edge and returns its id.
    ///
    /// The vertex set grows if the edge mentions a vertex beyond it.
    pub fn add_edge(&mut self, edge: Edge<W>) -> EdgeId {
        debug_assert!(
            edge.weight >= W::default(),
            "negative edge weight {:?}",
            edge.weight
        );

        let needed = edge.from.max(edge.to) + 1;
        if self.incidence.len() < needed {
            self.incidence.resize_with(needed, Vec::new);
        }

        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[edge.from].push(id);
        id
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<W>> {
        self.edges.get(id)
    }

    /// Returns all edges in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns the ids of edges leaving a vertex.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
