//! Routing configuration for the transit planner.

use chrono::Duration;
use serde::Deserialize;

/// Metres per minute in one kilometre per hour.
const KMH_TO_METERS_PER_MIN: f64 = 1000.0 / 60.0;

/// Configuration parameters for route planning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting at a stop each time a bus is boarded (minutes).
    pub bus_wait_time: u32,

    /// Bus speed (metres per minute).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings from a wait time in minutes and a velocity in metres per minute.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Create settings from a wait time in minutes and a velocity in km/h.
    pub fn from_kmh(bus_wait_time: u32, velocity_kmh: f64) -> Self {
        Self::new(bus_wait_time, velocity_kmh * KMH_TO_METERS_PER_MIN)
    }

    /// Returns the boarding wait time in minutes, as a float.
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Returns the boarding wait time as a Duration.
    pub fn bus_wait(&self) -> Duration {
        Duration::minutes(i64::from(self.bus_wait_time))
    }

    /// Returns the riding time in minutes for a road distance in metres.
    pub fn travel_minutes(&self, meters: f64) -> f64 {
        meters / self.bus_velocity
    }

    /// Returns true if the velocity is positive and finite.
    pub fn is_valid(&self) -> bool {
        self.bus_velocity.is_finite() && self.bus_velocity > 0.0
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self::from_kmh(6, 40.0)
    }
}
