//! Single-source shortest path with a binary heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{DirectedWeightedGraph, EdgeId, EdgeWeight, VertexId};

/// A shortest path: its total weight and the edges it follows, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo<W> {
    pub weight: W,
    pub edges: Vec<EdgeId>,
}

/// Heap entry, ordered so that the smallest cost pops first.
#[derive(Debug, Clone, Copy)]
struct State<W> {
    cost: W,
    vertex: VertexId,
}

impl<W: PartialOrd> PartialEq for State<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for State<W> {}

impl<W: PartialOrd> Ord for State<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<W: PartialOrd> PartialOrd for State<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a minimum-weight path from `from` to `to`.
///
/// Returns `None` if either vertex is outside the graph or `to` is not
/// reachable. A path from a vertex to itself is empty with zero weight.
/// Edge weights must be non-negative.
///
/// # Examples
///
/// ```
/// use transit_router::graph::{DirectedWeightedGraph, Edge, shortest_path};
///
/// let mut graph = DirectedWeightedGraph::new(3);
/// graph.add_edge(Edge { from: 0, to: 1, weight: 1.0 });
/// graph.add_edge(Edge { from: 1, to: 2, weight: 1.0 });
/// graph.add_edge(Edge { from: 0, to: 2, weight: 5.0 });
///
/// let path = shortest_path(&graph, 0, 2).unwrap();
/// assert_eq!(path.weight, 2.0);
/// assert_eq!(path.edges, vec![0, 1]);
/// ```
pub fn shortest_path<W: EdgeWeight>(
    graph: &DirectedWeightedGraph<W>,
    from: VertexId,
    to: VertexId,
) -> Option<PathInfo<W>> {
    let n = graph.vertex_count();
    if from >= n || to >= n {
        return None;
    }
    if from == to {
        return Some(PathInfo {
            weight: W::default(),
            edges: Vec::new(),
        });
    }

    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[from] = Some(W::default());
    heap.push(State {
        cost: W::default(),
        vertex: from,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if vertex == to {
            break;
        }
        // Stale entry: a shorter route to this vertex was already settled
        if dist[vertex].is_some_and(|best| cost > best) {
            continue;
        }

        for &edge_id in graph.incident_edges(vertex) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let candidate = cost + edge.weight;
            let improves = match dist[edge.to] {
                Some(best) => candidate < best,
                None => true,
            };
            if improves {
                dist[edge.to] = Some(candidate);
                prev_edge[edge.to] = Some(edge_id);
                heap.push(State {
                    cost: candidate,
                    vertex: edge.to,
                });
            }
        }
    }

    let weight = dist[to]?;

    let mut edges = Vec::new();
    let mut vertex = to;
    while vertex != from {
        let edge_id = prev_edge[vertex]?;
        edges.push(edge_id);
        vertex = graph.edge(edge_id)?.from;
    }
    edges.reverse();

    Some(PathInfo { weight, edges })
}
