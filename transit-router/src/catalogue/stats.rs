//! Bus route statistics.

use std::collections::HashSet;

use crate::domain::{Bus, BusData, CatalogueError};

use super::Catalogue;

/// Computes statistics for a bus along its effective route.
///
/// Both the road length and the geographic length are summed over the
/// effective route, so a round trip doubles both and a perfectly straight
/// route has curvature 1. The outbound and return legs of a round trip use
/// their own directed road distances, which need not be equal.
pub(super) fn calculate_bus_data(
    catalogue: &Catalogue,
    bus: &Bus,
) -> Result<BusData, CatalogueError> {
    let route = bus.effective_stops();

    let unique_stops = bus
        .stops()
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .len();

    let mut route_length = 0.0;
    let mut geographic_length = 0.0;
    for pair in route.windows(2) {
        let (from, to) = (pair[0], pair[1]);

        let road = catalogue
            .road_distance(from, to)
            .ok_or_else(|| CatalogueError::MissingDistance {
                bus: bus.name().to_string(),
                from: from.to_string(),
                to: to.to_string(),
            })?;
        route_length += f64::from(road);

        geographic_length += catalogue.geographic_distance(from, to).ok_or_else(|| {
            CatalogueError::MissingGeometry {
                bus: bus.name().to_string(),
                stop: to.to_string(),
            }
        })?;
    }

    let curvature = if geographic_length > 0.0 {
        route_length / geographic_length
    } else {
        f64::NAN
    };

    Ok(BusData {
        total_stops: route.len(),
        unique_stops,
        route_length,
        curvature,
    })
}


#[cfg(test)]
mod proptests {
    use crate::catalogue::Catalogue;
    use crate::domain::{BusDefinition, Coordinates, StopDefinition, compute_distance};
    use proptest::prelude::*;

    /// A chain of stops along the equator, with road distances at least as
    /// long as the straight line between neighbours.
    fn chain_strategy() -> impl Strategy<Value = (Vec<StopDefinition>, Vec<String>)> {
        prop::collection::vec((1u32..50, 0u32..5000), 2..8).prop_map(|steps| {
            let mut stops = Vec::new();
            let mut names = Vec::new();
            let mut lng = 0.0;
            for (i, (step, extra)) in steps.iter().enumerate() {
                let here = Coordinates::new(0.0, lng);
                lng += f64::from(*step) * 0.001;
                let next = Coordinates::new(0.0, lng);
                let straight = compute_distance(here, next).ceil() as u32;

                let name = format!("S{i}");
                stops.push(
                    StopDefinition::new(name.clone(), here)
                        .with_distance(format!("S{}", i + 1), straight + extra),
                );
                names.push(name);
            }
            let last = format!("S{}", steps.len());
            stops.push(StopDefinition::new(last.clone(), Coordinates::new(0.0, lng)));
            names.push(last);
            (stops, names)
        })
    }

    proptest! {
        #[test]
        fn loop_total_stops_matches_input((stops, names) in chain_strategy()) {
            let len = names.len();
            let catalogue = Catalogue::new(stops, vec![BusDefinition::looped("L", names)]).unwrap();
            prop_assert_eq!(catalogue.bus_stats("L").unwrap().total_stops, len);
        }

        #[test]
        fn round_trip_total_stops_doubles((stops, names) in chain_strategy()) {
            let len = names.len();
            let catalogue = Catalogue::new(stops, vec![BusDefinition::round_trip("R", names)]).unwrap();
            prop_assert_eq!(catalogue.bus_stats("R").unwrap().total_stops, 2 * len - 1);
        }

        #[test]
        fn curvature_at_least_one((stops, names) in chain_strategy()) {
            let catalogue = Catalogue::new(stops, vec![BusDefinition::round_trip("R", names)]).unwrap();
            let data = catalogue.bus_stats("R").unwrap();
            prop_assert!(data.curvature >= 1.0, "curvature {} < 1", data.curvature);
        }
    }
}
