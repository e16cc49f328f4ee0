//! Fastest-route planning over the transit network.
//!
//! The catalogue is turned once into a directed multigraph whose edges are
//! "board this bus here, ride it to there" hops, weighted by the boarding
//! wait plus the riding time. Queries then run Dijkstra from the origin.

mod builder;
mod itinerary;
mod router;
mod settings;

pub use builder::{RideEdge, RouteGraph, StopIndex, build_route_graph};
pub use itinerary::{Route, RouteItem};
pub use router::{RouterError, TransitRouter};
pub use settings::RoutingSettings;
