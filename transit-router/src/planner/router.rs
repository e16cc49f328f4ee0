//! Point-to-point route queries over the frozen route graph.

use tracing::trace;

use crate::catalogue::Catalogue;
use crate::domain::CatalogueError;
use crate::graph::{PathInfo, shortest_path};

use super::builder::{RouteGraph, StopIndex, build_route_graph};
use super::itinerary::{Route, RouteItem};
use super::settings::RoutingSettings;

/// Error from building a router.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// Bus velocity must be positive and finite
    #[error("invalid bus velocity: {0}")]
    InvalidVelocity(f64),

    /// The catalogue's topology is inconsistent
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

/// Answers fastest-route queries between stops.
///
/// The router owns its graph and keeps no reference to the catalogue it was
/// built from. It is immutable, so queries may run concurrently from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct TransitRouter {
    graph: RouteGraph,
    settings: RoutingSettings,
}

impl TransitRouter {
    /// Builds a router for a catalogue.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the settings are invalid or the catalogue is
    /// missing a road distance on a bus route.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::catalogue::Catalogue;
    /// use transit_router::domain::{BusDefinition, Coordinates, StopDefinition};
    /// use transit_router::planner::{RoutingSettings, TransitRouter};
    ///
    /// let stops = vec![
    ///     StopDefinition::new("A", Coordinates::new(0.0, 0.0)).with_distance("B", 1000),
    ///     StopDefinition::new("B", Coordinates::new(0.0, 0.01)),
    /// ];
    /// let buses = vec![BusDefinition::round_trip("1", ["A", "B"])];
    /// let catalogue = Catalogue::new(stops, buses).unwrap();
    ///
    /// let router = TransitRouter::new(&catalogue, RoutingSettings::new(5, 50.0)).unwrap();
    /// let route = router.route("A", "B").unwrap();
    ///
    /// assert_eq!(route.total_time, 25.0);
    /// assert_eq!(route.items.len(), 2);
    /// ```
    pub fn new(catalogue: &Catalogue, settings: RoutingSettings) -> Result<Self, RouterError> {
        let graph = build_route_graph(catalogue, &settings)?;
        Ok(Self { graph, settings })
    }

    /// Finds the fastest route between two stops.
    ///
    /// Returns `None` if either stop is unknown or no route exists. A route
    /// from a stop to itself is empty and takes no time.
    pub fn route(&self, from: &str, to: &str) -> Option<Route> {
        let stops = self.graph.stops();
        let (Some(from_id), Some(to_id)) = (stops.id(from), stops.id(to)) else {
            trace!(from, to, "Route query for unknown stop");
            return None;
        };

        let path = shortest_path(self.graph.graph(), from_id, to_id);
        trace!(from, to, found = path.is_some(), "Route query");

        self.assemble(path?)
    }

    /// Returns the routing settings.
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Returns the route graph.
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Returns the stop index used for vertex ids.
    pub fn stop_index(&self) -> &StopIndex {
        self.graph.stops()
    }

    /// Expands each edge of a raw path into a wait and a ride.
    fn assemble(&self, path: PathInfo<f64>) -> Option<Route> {
        let wait = self.settings.wait_minutes();
        let mut items = Vec::with_capacity(path.edges.len() * 2);

        for edge_id in path.edges {
            let edge = self.graph.graph().edge(edge_id)?;
            let ride = self.graph.ride(edge_id)?;

            items.push(RouteItem::Wait {
                stop_name: self.graph.stops().name(edge.from)?.to_string(),
                time: wait,
            });
            items.push(RouteItem::Ride {
                bus: self.graph.bus_name(ride.bus)?.to_string(),
                span_count: ride.span,
                time: edge.weight - wait,
            });
        }

        Some(Route {
            total_time: path.weight,
            items,
        })
    }
}
