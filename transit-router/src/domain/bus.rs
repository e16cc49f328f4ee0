//! Bus route types.

use serde::Deserialize;

/// Input definition of a bus route, as supplied by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusDefinition {
    /// Unique bus name.
    pub name: String,
    /// Stop names in travel order.
    pub stops: Vec<String>,
    /// True if the route is a loop; false for a there-and-back route.
    #[serde(alias = "is_roundtrip")]
    pub is_loop: bool,
}

impl BusDefinition {
    /// Creates a loop route that is traversed in the given order only.
    pub fn looped<S: Into<String>>(
        name: impl Into<String>,
        stops: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
            is_loop: true,
        }
    }

    /// Creates a there-and-back route: the given stops, then the same stops in reverse.
    pub fn round_trip<S: Into<String>>(
        name: impl Into<String>,
        stops: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
            is_loop: false,
        }
    }
}

/// A bus route owned by the catalogue.
///
/// # Invariants
///
/// - At least one stop
/// - Every stop is present in the owning catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    name: String,
    stops: Vec<String>,
    is_loop: bool,
}

impl Bus {
    pub(crate) fn from_definition(definition: BusDefinition) -> Self {
        Self {
            name: definition.name,
            stops: definition.stops,
            is_loop: definition.is_loop,
        }
    }

    /// Returns the bus name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stops as given in the input.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Returns true if the route is a loop.
    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    /// Returns the first stop of the route.
    pub fn first_stop(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    /// Returns the turnaround stop: the last listed stop.
    pub fn last_stop(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }

    /// Returns the sequence of stops the bus actually traverses.
    ///
    /// Loops traverse their stops once in order. Round trips traverse them
    /// in order and then back again, without repeating the turnaround stop.
    pub fn effective_stops(&self) -> Vec<&str> {
        let forward = self.stops.iter().map(String::as_str);
        if self.is_loop {
            return forward.collect();
        }
        let back = self.stops.iter().rev().skip(1).map(String::as_str);
        forward.chain(back).collect()
    }

    /// Returns the number of stops in the effective route.
    pub fn effective_len(&self) -> usize {
        if self.is_loop || self.stops.is_empty() {
            self.stops.len()
        } else {
            2 * self.stops.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(definition: BusDefinition) -> Bus {
        Bus::from_definition(definition)
    }

    #[test]
    fn loop_effective_route_is_unchanged() {
        let b = bus(BusDefinition::looped("256", ["A", "B", "C", "A"]));
        assert_eq!(b.effective_stops(), vec!["A", "B", "C", "A"]);
        assert_eq!(b.effective_len(), 4);
    }

    #[test]
    fn round_trip_effective_route_returns() {
        let b = bus(BusDefinition::round_trip("750", ["A", "B", "C"]));
        assert_eq!(b.effective_stops(), vec!["A", "B", "C", "B", "A"]);
        assert_eq!(b.effective_len(), 5);
    }

    #[test]
    fn single_stop_round_trip() {
        let b = bus(BusDefinition::round_trip("1", ["A"]));
        assert_eq!(b.effective_stops(), vec!["A"]);
        assert_eq!(b.effective_len(), 1);
    }

    #[test]
    fn endpoints() {
        let b = bus(BusDefinition::round_trip("1", ["A", "B", "C"]));
        assert_eq!(b.first_stop(), Some("A"));
        assert_eq!(b.last_stop(), Some("C"));
    }

    #[test]
    fn deserializes_roundtrip_alias() {
        let json = r#"{"name": "14", "stops": ["A", "B", "A"], "is_roundtrip": true}"#;
        let def: BusDefinition = serde_json::from_str(json).unwrap();
        assert!(def.is_loop);
        assert_eq!(def.stops.len(), 3);
    }
}
