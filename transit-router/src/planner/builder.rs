//! Route graph construction.
//!
//! Turns a finished catalogue into a directed multigraph with one vertex per
//! stop and one edge per ordered pair of positions along each bus's
//! effective route. Each edge carries the boarding wait plus the riding time
//! accumulated over every hop in between, so a passenger can board once and
//! ride many stops without paying the wait again.

use std::collections::HashMap;

use tracing::debug;

use crate::catalogue::Catalogue;
use crate::domain::CatalogueError;
use crate::graph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};

use super::router::RouterError;
use super::settings::RoutingSettings;

/// Bidirectional mapping between stop names and dense vertex ids.
///
/// Ids follow catalogue order and cover every catalogue stop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopIndex {
    names: Vec<String>,
    ids: HashMap<String, VertexId>,
}

impl StopIndex {
    /// Assigns ids to every stop in the catalogue.
    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        let names: Vec<String> = catalogue
            .stops()
            .iter()
            .map(|stop| stop.name().to_string())
            .collect();
        let ids = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Self { names, ids }
    }

    /// Returns the vertex id of a stop.
    pub fn id(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /// Returns the stop name of a vertex.
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Returns the number of stops.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no stops.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// What an edge means: riding one bus for `span` hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideEdge {
    /// Index into [`RouteGraph::bus_name`].
    pub bus: usize,
    /// Number of stop-to-stop hops.
    pub span: usize,
}

/// The frozen routing graph with its stop index and per-edge ride data.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGraph {
    graph: DirectedWeightedGraph<f64>,
    rides: Vec<RideEdge>,
    buses: Vec<String>,
    stops: StopIndex,
}

impl RouteGraph {
    /// Returns the underlying graph. Weights are minutes.
    pub fn graph(&self) -> &DirectedWeightedGraph<f64> {
        &self.graph
    }

    /// Returns the stop index.
    pub fn stops(&self) -> &StopIndex {
        &self.stops
    }

    /// Returns the ride data for an edge.
    pub fn ride(&self, edge: EdgeId) -> Option<&RideEdge> {
        self.rides.get(edge)
    }

    /// Returns the name of a bus by its index.
    pub fn bus_name(&self, bus: usize) -> Option<&str> {
        self.buses.get(bus).map(String::as_str)
    }
}

/// Builds the routing graph for a catalogue.
///
/// # Errors
///
/// Returns `Err` if the velocity is not positive, or if a traversed pair
/// has no road distance.
pub fn build_route_graph(
    catalogue: &Catalogue,
    settings: &RoutingSettings,
) -> Result<RouteGraph, RouterError> {
    if !settings.is_valid() {
        return Err(RouterError::InvalidVelocity(settings.bus_velocity));
    }

    let stops = StopIndex::from_catalogue(catalogue);
    let mut graph = DirectedWeightedGraph::new(stops.len());
    let mut rides = Vec::new();
    let mut buses = Vec::with_capacity(catalogue.buses().len());

    let wait = settings.wait_minutes();

    for (bus_idx, bus) in catalogue.buses().iter().enumerate() {
        buses.push(bus.name().to_string());
        let route = bus.effective_stops();
        let ids = route
            .iter()
            .map(|name| {
                stops.id(name).ok_or_else(|| CatalogueError::UnknownStop {
                    bus: bus.name().to_string(),
                    stop: name.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for from_pos in 0..route.len() {
            let mut meters = 0.0;
            for to_pos in (from_pos + 1)..route.len() {
                let (prev, next) = (route[to_pos - 1], route[to_pos]);
                let hop = catalogue.road_distance(prev, next).ok_or_else(|| {
                    CatalogueError::MissingDistance {
                        bus: bus.name().to_string(),
                        from: prev.to_string(),
                        to: next.to_string(),
                    }
                })?;
                meters += f64::from(hop);

                graph.add_edge(Edge {
                    from: ids[from_pos],
                    to: ids[to_pos],
                    weight: wait + settings.travel_minutes(meters),
                });
                rides.push(RideEdge {
                    bus: bus_idx,
                    span: to_pos - from_pos,
                });
            }
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Route graph built"
    );

    Ok(RouteGraph {
        graph,
        rides,
        buses,
        stops,
    })
}
