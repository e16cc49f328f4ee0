//! Itinerary types.
//!
//! A `Route` is the answer to a point-to-point query: a total time and the
//! sequence of waits and rides that achieves it.

use chrono::Duration;
use serde::Serialize;

/// One step of an itinerary: waiting at a stop or riding a bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    /// Waiting at a stop for a bus
    Wait {
        stop_name: String,
        /// Minutes
        time: f64,
    },
    /// Riding a bus for `span_count` stops
    Ride {
        bus: String,
        span_count: usize,
        /// Minutes
        time: f64,
    },
}

impl RouteItem {
    /// Returns the duration of this item in minutes.
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } => *time,
            RouteItem::Ride { time, .. } => *time,
        }
    }

    /// Returns true if this is a wait.
    pub fn is_wait(&self) -> bool {
        matches!(self, RouteItem::Wait { .. })
    }

    /// Returns true if this is a ride.
    pub fn is_ride(&self) -> bool {
        matches!(self, RouteItem::Ride { .. })
    }
}

/// The fastest way between two stops.
///
/// # Invariants
///
/// - Items alternate Wait, Ride, Wait, Ride, ...
/// - `total_time` is the sum of item times
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Total elapsed time in minutes.
    pub total_time: f64,
    /// Waits and rides in travel order.
    pub items: Vec<RouteItem>,
}

impl Route {
    /// A route that goes nowhere.
    pub fn empty() -> Self {
        Self {
            total_time: 0.0,
            items: Vec::new(),
        }
    }

    /// Returns true if the route has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of buses boarded.
    pub fn ride_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_ride()).count()
    }

    /// Returns the total time, rounded to the nearest millisecond.
    pub fn total_duration(&self) -> Duration {
        Duration::milliseconds((self.total_time * 60_000.0).round() as i64)
    }
}
