//! Geographic coordinates and great-circle distance.

use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinates {
    /// Creates coordinates from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns the coordinates as a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

/// Great-circle distance between two coordinates, in metres.
///
/// # Examples
///
/// ```
/// use transit_router::domain::{Coordinates, compute_distance};
///
/// let a = Coordinates::new(55.611087, 37.20829);
/// assert_eq!(compute_distance(a, a), 0.0);
/// ```
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }
    Haversine.distance(from.to_point(), to.to_point())
}
