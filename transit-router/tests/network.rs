//! End-to-end tests: build a catalogue from a structured document, then
//! answer statistics and route queries.

use approx::assert_relative_eq;
use serde::Deserialize;
use transit_router::catalogue::Catalogue;
use transit_router::domain::{BusDefinition, Coordinates, StopDefinition};
use transit_router::planner::{RouteItem, RoutingSettings, TransitRouter};

#[derive(Deserialize)]
struct Document {
    stops: Vec<StopDefinition>,
    buses: Vec<BusDefinition>,
    routing_settings: RoutingSettings,
}

const DOCUMENT: &str = r#"{
    "routing_settings": {"bus_wait_time": 2, "bus_velocity": 500.0},
    "stops": [
        {"name": "Biryulyovo Zapadnoye", "latitude": 55.574371, "longitude": 37.6517,
         "road_distances": {"Biryusinka": 1800, "Universam": 2400, "Biryulyovo Tovarnaya": 2600}},
        {"name": "Biryusinka", "latitude": 55.581065, "longitude": 37.64839,
         "road_distances": {"Universam": 750}},
        {"name": "Universam", "latitude": 55.587655, "longitude": 37.645687,
         "road_distances": {"Biryulyovo Tovarnaya": 900}},
        {"name": "Biryulyovo Tovarnaya", "latitude": 55.592028, "longitude": 37.653656,
         "road_distances": {"Biryulyovo Passazhirskaya": 1300}},
        {"name": "Biryulyovo Passazhirskaya", "latitude": 55.580999, "longitude": 37.659164,
         "road_distances": {"Biryulyovo Zapadnoye": 1200}},
        {"name": "Pokrovskaya", "latitude": 55.603601, "longitude": 37.635517}
    ],
    "buses": [
        {"name": "297", "is_roundtrip": true,
         "stops": ["Biryulyovo Zapadnoye", "Biryulyovo Tovarnaya", "Universam",
                   "Biryulyovo Zapadnoye"]},
        {"name": "635", "is_roundtrip": false,
         "stops": ["Biryulyovo Tovarnaya", "Universam", "Biryusinka"]},
        {"name": "828", "is_roundtrip": true,
         "stops": ["Biryulyovo Zapadnoye", "Universam", "Biryulyovo Zapadnoye"]}
    ]
}"#;

fn load() -> (Catalogue, TransitRouter) {
    let document: Document = serde_json::from_str(DOCUMENT).unwrap();
    let catalogue = Catalogue::new(document.stops, document.buses).unwrap();
    let router = TransitRouter::new(&catalogue, document.routing_settings).unwrap();
    (catalogue, router)
}

#[test]
fn bus_statistics() {
    let (catalogue, _) = load();

    let loop_bus = catalogue.bus_stats("297").unwrap();
    assert_eq!(loop_bus.total_stops, 4);
    assert_eq!(loop_bus.unique_stops, 3);
    // Tovarnaya -> Universam and Universam -> Zapadnoye come from the reverse direction
    assert_eq!(loop_bus.route_length, 2600.0 + 900.0 + 2400.0);
    assert!(loop_bus.curvature > 1.0);

    let round_trip = catalogue.bus_stats("635").unwrap();
    assert_eq!(round_trip.total_stops, 5);
    assert_eq!(round_trip.unique_stops, 3);
    // Tovarnaya <- Universam 900 both ways, Universam <- Biryusinka 750 both ways
    assert_eq!(round_trip.route_length, 2.0 * (900.0 + 750.0));

    assert!(catalogue.bus_stats("751").is_none());
}

#[test]
fn stop_statistics() {
    let (catalogue, _) = load();

    assert_eq!(
        catalogue.stop_stats("Universam").unwrap().buses,
        vec!["297", "635", "828"]
    );
    assert!(catalogue.stop_stats("Pokrovskaya").unwrap().is_empty());
    assert!(catalogue.stop_stats("Samara").is_none());
}

#[test]
fn route_with_transfer_sums_items() {
    let (_, router) = load();

    let route = router
        .route("Biryulyovo Zapadnoye", "Biryusinka")
        .unwrap();

    assert!(route.ride_count() >= 1);
    let sum: f64 = route.items.iter().map(RouteItem::time).sum();
    assert_relative_eq!(sum, route.total_time, max_relative = 1e-9);

    // Waits and rides alternate, starting with a wait at the origin
    for (i, item) in route.items.iter().enumerate() {
        assert_eq!(item.is_wait(), i % 2 == 0);
    }
    assert!(matches!(
        &route.items[0],
        RouteItem::Wait { stop_name, .. } if stop_name == "Biryulyovo Zapadnoye"
    ));
}

#[test]
fn unserved_stop_has_no_route() {
    let (_, router) = load();

    assert!(router.route("Universam", "Pokrovskaya").is_none());
    let same = router.route("Pokrovskaya", "Pokrovskaya").unwrap();
    assert!(same.is_empty());
}

#[test]
fn concurrent_queries_agree() {
    let (catalogue, router) = load();
    let pairs = [
        ("Biryulyovo Zapadnoye", "Biryusinka"),
        ("Biryusinka", "Biryulyovo Tovarnaya"),
        ("Universam", "Biryulyovo Zapadnoye"),
    ];
    let expected: Vec<_> = pairs.iter().map(|(a, b)| router.route(a, b)).collect();
    let (router, catalogue, pairs) = (&router, &catalogue, &pairs);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let routes: Vec<_> = pairs.iter().map(|(a, b)| router.route(a, b)).collect();
                    let stats = catalogue.bus_stats("297");
                    (routes, stats)
                })
            })
            .collect();

        for handle in handles {
            let (routes, stats) = handle.join().unwrap();
            assert_eq!(routes, expected);
            assert_eq!(stats, catalogue.bus_stats("297"));
        }
    });
}

#[test]
fn scenario_single_board_multi_span() {
    let stops = vec![
        StopDefinition::new("A", Coordinates::new(0.0, 0.0)).with_distance("B", 1000),
        StopDefinition::new("B", Coordinates::new(0.0, 1.0)).with_distance("C", 1000),
        StopDefinition::new("C", Coordinates::new(0.0, 2.0)),
    ];
    let buses = vec![BusDefinition::round_trip("1", ["A", "B", "C"])];
    let catalogue = Catalogue::new(stops, buses).unwrap();
    let router = TransitRouter::new(&catalogue, RoutingSettings::new(5, 50.0)).unwrap();

    let route = router.route("A", "C").unwrap();
    assert_relative_eq!(route.total_time, 45.0);
    assert_eq!(route.items.len(), 2);
    assert!(matches!(
        route.items[1],
        RouteItem::Ride { span_count: 2, .. }
    ));

    let same = router.route("A", "A").unwrap();
    assert_eq!(same.total_time, 0.0);
    assert!(same.items.is_empty());
}
