//! The transport catalogue.
//!
//! Owns every stop and bus, indexes them by name, completes missing
//! directed road distances and precomputes statistics. A catalogue is built
//! once and never mutated afterwards, so it can be shared freely between
//! threads.

mod stats;

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::domain::{
    Bus, BusData, BusDefinition, CatalogueError, Coordinates, Stop, StopData, StopDefinition,
    compute_distance,
};

/// Immutable store of stops and buses with cached statistics.
#[derive(Debug, Clone)]
pub struct Catalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: HashMap<String, usize>,
    bus_index: HashMap<String, usize>,
    bus_stats: HashMap<String, BusData>,
    stop_stats: HashMap<String, StopData>,
}

impl Catalogue {
    /// Builds a catalogue from stop and bus definitions.
    ///
    /// Stops named only in another stop's distance table are created
    /// without coordinates. A bus may not visit such a stop.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - A stop or bus name is defined twice
    /// - A bus has no stops
    /// - A bus visits a stop that is unknown or has no coordinates
    /// - A pair of consecutive stops on a bus has no road distance in
    ///   either direction
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::catalogue::Catalogue;
    /// use transit_router::domain::{BusDefinition, Coordinates, StopDefinition};
    ///
    /// let stops = vec![
    ///     StopDefinition::new("A", Coordinates::new(55.611087, 37.20829)).with_distance("B", 3900),
    ///     StopDefinition::new("B", Coordinates::new(55.595884, 37.209755)),
    /// ];
    /// let buses = vec![BusDefinition::round_trip("750", ["A", "B"])];
    ///
    /// let catalogue = Catalogue::new(stops, buses).unwrap();
    /// let stats = catalogue.bus_stats("750").unwrap();
    ///
    /// assert_eq!(stats.total_stops, 3);
    /// assert_eq!(stats.route_length, 7800.0);
    /// assert!(catalogue.bus_stats("751").is_none());
    /// ```
    pub fn new(
        stops: Vec<StopDefinition>,
        buses: Vec<BusDefinition>,
    ) -> Result<Self, CatalogueError> {
        let mut catalogue = Catalogue {
            stops: Vec::with_capacity(stops.len()),
            buses: Vec::with_capacity(buses.len()),
            stop_index: HashMap::with_capacity(stops.len()),
            bus_index: HashMap::with_capacity(buses.len()),
            bus_stats: HashMap::with_capacity(buses.len()),
            stop_stats: HashMap::with_capacity(stops.len()),
        };

        for definition in stops {
            catalogue.insert_stop(Stop::from_definition(definition))?;
        }
        catalogue.insert_implicit_stops();

        for definition in buses {
            catalogue.insert_bus(definition)?;
        }

        catalogue.register_buses();
        catalogue.fill_distances()?;
        catalogue.compute_statistics()?;

        debug!(
            stops = catalogue.stops.len(),
            buses = catalogue.buses.len(),
            "Catalogue built"
        );

        Ok(catalogue)
    }

    /// Returns statistics for a bus, or `None` if the bus is unknown.
    pub fn bus_stats(&self, name: &str) -> Option<BusData> {
        self.bus_stats.get(name).copied()
    }

    /// Returns the buses serving a stop, or `None` if the stop is unknown.
    ///
    /// A known stop served by no bus yields an empty list.
    pub fn stop_stats(&self, name: &str) -> Option<&StopData> {
        self.stop_stats.get(name)
    }

    /// Returns all stops in catalogue order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns all buses in catalogue order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Looks up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|&idx| &self.stops[idx])
    }

    /// Looks up a bus by name.
    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|&idx| &self.buses[idx])
    }

    /// Returns the position of a stop in catalogue order.
    pub fn stop_position(&self, name: &str) -> Option<usize> {
        self.stop_index.get(name).copied()
    }

    /// Returns the directed road distance in metres between two stops.
    pub fn road_distance(&self, from: &str, to: &str) -> Option<u32> {
        self.stop(from)?.distance_to(to)
    }

    /// Returns the great-circle distance in metres between two stops.
    ///
    /// Returns `None` if either stop is unknown or has no coordinates.
    pub fn geographic_distance(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.stop(from)?.coordinates()?;
        let to = self.stop(to)?.coordinates()?;
        Some(compute_distance(from, to))
    }

    /// Returns coordinates of every stop served by at least one bus.
    pub fn served_stop_coordinates(&self) -> Vec<Coordinates> {
        self.stops
            .iter()
            .filter(|stop| stop.is_served())
            .filter_map(Stop::coordinates)
            .collect()
    }

    fn insert_stop(&mut self, stop: Stop) -> Result<(), CatalogueError> {
        if self.stop_index.contains_key(stop.name()) {
            return Err(CatalogueError::DuplicateStop {
                stop: stop.name().to_string(),
            });
        }
        self.stop_index
            .insert(stop.name().to_string(), self.stops.len());
        self.stops.push(stop);
        Ok(())
    }

    /// Creates geometry-less stops for names seen only in distance tables.
    fn insert_implicit_stops(&mut self) {
        let mut missing = BTreeSet::new();
        for stop in &self.stops {
            for neighbour in stop.distances().keys() {
                if !self.stop_index.contains_key(neighbour) {
                    missing.insert(neighbour.clone());
                }
            }
        }

        for name in missing {
            debug!(stop = %name, "Creating stop referenced only by distance");
            self.stop_index.insert(name.clone(), self.stops.len());
            self.stops.push(Stop::implicit(name));
        }
    }

    fn insert_bus(&mut self, definition: BusDefinition) -> Result<(), CatalogueError> {
        if definition.stops.is_empty() {
            return Err(CatalogueError::EmptyRoute {
                bus: definition.name,
            });
        }
        if self.bus_index.contains_key(&definition.name) {
            return Err(CatalogueError::DuplicateBus {
                bus: definition.name,
            });
        }

        for name in &definition.stops {
            let stop = self
                .stop(name)
                .ok_or_else(|| CatalogueError::UnknownStop {
                    bus: definition.name.clone(),
                    stop: name.clone(),
                })?;
            if stop.coordinates().is_none() {
                return Err(CatalogueError::MissingGeometry {
                    bus: definition.name.clone(),
                    stop: name.clone(),
                });
            }
        }

        self.bus_index
            .insert(definition.name.clone(), self.buses.len());
        self.buses.push(Bus::from_definition(definition));
        Ok(())
    }

    fn register_buses(&mut self) {
        for bus in &self.buses {
            for name in bus.stops() {
                if let Some(&idx) = self.stop_index.get(name) {
                    self.stops[idx].add_bus(bus.name());
                }
            }
        }
    }

    /// Completes one-sided road distances along every bus route.
    ///
    /// For each consecutive pair A -> B on an effective route, if A has no
    /// distance to B, B's distance to A is used. Explicit distances are
    /// never overwritten, so asymmetric input is preserved.
    fn fill_distances(&mut self) -> Result<(), CatalogueError> {
        for bus in &self.buses {
            for pair in bus.effective_stops().windows(2) {
                let (from, to) = (pair[0], pair[1]);
                let (Some(&from_idx), Some(&to_idx)) =
                    (self.stop_index.get(from), self.stop_index.get(to))
                else {
                    continue;
                };

                if self.stops[from_idx].distance_to(to).is_some() {
                    continue;
                }

                let meters = match self.stops[to_idx].distance_to(from) {
                    Some(meters) => meters,
                    None if from_idx == to_idx => 0,
                    None => {
                        return Err(CatalogueError::MissingDistance {
                            bus: bus.name().to_string(),
                            from: from.to_string(),
                            to: to.to_string(),
                        });
                    }
                };

                debug!(from, to, meters, "Filled road distance from reverse direction");
                self.stops[from_idx].set_distance(to, meters);
            }
        }
        Ok(())
    }

    fn compute_statistics(&mut self) -> Result<(), CatalogueError> {
        let mut bus_stats = HashMap::with_capacity(self.buses.len());
        for bus in &self.buses {
            bus_stats.insert(bus.name().to_string(), stats::calculate_bus_data(self, bus)?);
        }

        let stop_stats = self
            .stops
            .iter()
            .map(|stop| {
                let data = StopData {
                    buses: stop.buses().iter().cloned().collect(),
                };
                (stop.name().to_string(), data)
            })
            .collect();

        self.bus_stats = bus_stats;
        self.stop_stats = stop_stats;
        Ok(())
    }
}
