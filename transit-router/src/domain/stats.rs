//! Derived per-bus and per-stop statistics.

use serde::Serialize;

/// Statistics for a single bus route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BusData {
    /// Stops on the effective route, counting repeats.
    pub total_stops: usize,
    /// Distinct stops on the route.
    pub unique_stops: usize,
    /// Road length of the effective route in metres.
    pub route_length: f64,
    /// Road length divided by geographic length; NaN if the latter is zero.
    pub curvature: f64,
}

/// Buses serving a single stop.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StopData {
    /// Bus names, sorted.
    pub buses: Vec<String>,
}

impl StopData {
    /// Returns true if no bus serves the stop.
    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}
