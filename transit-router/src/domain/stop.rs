//! Stop types.

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use super::Coordinates;

/// Input definition of a stop, as supplied by the ingestion layer.
///
/// # Examples
///
/// ```
/// use transit_router::domain::{Coordinates, StopDefinition};
///
/// let stop = StopDefinition::new("Tolstopaltsevo", Coordinates::new(55.611087, 37.20829))
///     .with_distance("Marushkino", 3900);
///
/// assert_eq!(stop.road_distances["Marushkino"], 3900);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopDefinition {
    /// Unique stop name.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Directed road distances in metres to named neighbouring stops.
    #[serde(default)]
    pub road_distances: HashMap<String, u32>,
}

impl StopDefinition {
    /// Creates a stop definition with no road distances.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            latitude: coordinates.lat,
            longitude: coordinates.lng,
            road_distances: HashMap::new(),
        }
    }

    /// Adds a directed road distance from this stop to `to`.
    pub fn with_distance(mut self, to: impl Into<String>, meters: u32) -> Self {
        self.road_distances.insert(to.into(), meters);
        self
    }

    /// Returns the stop's coordinates.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A stop owned by the catalogue.
///
/// Stops that were only ever named as a distance-table neighbour carry no
/// geometry. Such stops may exist in the catalogue but can never be served
/// by a bus.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    name: String,
    coordinates: Option<Coordinates>,
    buses: BTreeSet<String>,
    distances: HashMap<String, u32>,
}

impl Stop {
    /// Creates a stop from its input definition.
    pub(crate) fn from_definition(definition: StopDefinition) -> Self {
        let coordinates = definition.coordinates();
        Self {
            name: definition.name,
            coordinates: Some(coordinates),
            buses: BTreeSet::new(),
            distances: definition.road_distances,
        }
    }

    /// Creates a stop known only by name.
    pub(crate) fn implicit(name: String) -> Self {
        Self {
            name,
            coordinates: None,
            buses: BTreeSet::new(),
            distances: HashMap::new(),
        }
    }

    /// Returns the stop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the coordinates, if the stop was explicitly defined.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Returns the names of buses visiting this stop, sorted.
    pub fn buses(&self) -> &BTreeSet<String> {
        &self.buses
    }

    /// Returns true if at least one bus visits this stop.
    pub fn is_served(&self) -> bool {
        !self.buses.is_empty()
    }

    /// Returns the directed road distance to a neighbour, if recorded.
    pub fn distance_to(&self, to: &str) -> Option<u32> {
        self.distances.get(to).copied()
    }

    /// Returns all recorded directed road distances.
    pub fn distances(&self) -> &HashMap<String, u32> {
        &self.distances
    }

    pub(crate) fn add_bus(&mut self, bus: &str) {
        if !self.buses.contains(bus) {
            self.buses.insert(bus.to_string());
        }
    }

    pub(crate) fn set_distance(&mut self, to: &str, meters: u32) {
        self.distances.insert(to.to_string(), meters);
    }
}
