use campus_pathfinding::prelude::*;
use campus_pathfinding::LoadError;

const CAMPUS: &str = r#"digraph Campus {
    node [shape=box];
    "Union South" -> "Computer Sciences and Statistics" [seconds=176.0];
    "Computer Sciences and Statistics" -> "Union South" [seconds=168.9];
    "Union South" -> "Atmospheric, Oceanic and Space Sciences" [seconds=127.2];
    "Atmospheric, Oceanic and Space Sciences" -> "Union South" [seconds=112.8];
    "Computer Sciences and Statistics" -> "Atmospheric, Oceanic and Space Sciences" [seconds=62.9];
    "Atmospheric, Oceanic and Space Sciences" -> "Computer Sciences and Statistics" [seconds=60.3];
    "Atmospheric, Oceanic and Space Sciences" -> "Weeks Hall for Geological Sciences" [seconds=88.7];
    "Weeks Hall for Geological Sciences" -> "Atmospheric, Oceanic and Space Sciences" [seconds=85.0];
    "Computer Sciences and Statistics" -> "Medical Sciences" [seconds=305.4];
    "Medical Sciences" -> "Computer Sciences and Statistics" [seconds=299.1];
    "Weeks Hall for Geological Sciences" -> "Van Hise Hall" [seconds=400.6];
    "Van Hise Hall" -> "Bascom Hall" [seconds=212.0];
    "Bascom Hall" -> "Van Hise Hall" [seconds=230.4];
    "Medical Sciences" -> "Bascom Hall" [seconds=350.0];
    "Bascom Hall" -> "Memorial Union" [seconds=251.3];
    "Memorial Union" -> "Bascom Hall" [seconds=320.9];
    "Memorial Union" -> "Science Hall" [seconds=112.5];
    "Science Hall" -> "Memorial Union" [seconds=118.0];
    "Science Hall" -> "Helen C White Hall" [seconds=93.2];
    "Helen C White Hall" -> "Memorial Union" [seconds=190.1];
    "Radio Hall" [shape=ellipse];
}"#;

fn campus() -> CampusMap {
    let _ = env_logger::builder().is_test(true).try_init();
    CampusMap::from_reader(CAMPUS.as_bytes()).unwrap()
}

#[test]
fn list_of_all_locations() {
    let map = campus();
    assert_eq!(
        map.locations(),
        vec![
            "Union South",
            "Computer Sciences and Statistics",
            "Atmospheric, Oceanic and Space Sciences",
            "Weeks Hall for Geological Sciences",
            "Medical Sciences",
            "Van Hise Hall",
            "Bascom Hall",
            "Memorial Union",
            "Science Hall",
            "Helen C White Hall",
        ]
    );
    // Node declarations without Segments are not Locations
    assert!(!map.graph().contains_node("Radio Hall"));
    assert_eq!(map.graph().edge_count(), 20);
}

#[test]
fn direct_route() {
    let map = campus();
    assert_eq!(
        map.find_shortest_path("Union South", "Atmospheric, Oceanic and Space Sciences")
            .unwrap(),
        vec!["Union South", "Atmospheric, Oceanic and Space Sciences"]
    );
    assert_eq!(
        map.travel_times_on_path("Union South", "Atmospheric, Oceanic and Space Sciences")
            .unwrap(),
        vec![127.2]
    );
}

#[test]
fn route_across_campus() {
    let map = campus();
    let route = map.find_shortest_path("Union South", "Helen C White Hall").unwrap();
    assert_eq!(
        route,
        vec![
            "Union South",
            "Atmospheric, Oceanic and Space Sciences",
            "Weeks Hall for Geological Sciences",
            "Van Hise Hall",
            "Bascom Hall",
            "Memorial Union",
            "Science Hall",
            "Helen C White Hall",
        ]
    );
    let times = map
        .travel_times_on_path("Union South", "Helen C White Hall")
        .unwrap();
    assert_eq!(times, vec![127.2, 88.7, 400.6, 212.0, 251.3, 112.5, 93.2]);

    let total = map.path_cost("Union South", "Helen C White Hall").unwrap();
    let summed: Cost = times.iter().sum();
    assert!((total - summed).abs() < 1e-9);
}

#[test]
fn one_way_segments() {
    let map = campus();
    // Helen C White Hall only leads back to the Memorial Union
    assert_eq!(
        map.find_shortest_path("Helen C White Hall", "Science Hall")
            .unwrap(),
        vec!["Helen C White Hall", "Memorial Union", "Science Hall"]
    );
    assert_eq!(
        map.reachable_locations("Helen C White Hall", 1000.0),
        vec!["Memorial Union"]
    );
}

#[test]
fn reachable_within() {
    let map = campus();
    assert_eq!(
        map.reachable_locations("Computer Sciences and Statistics", 200.0),
        vec!["Union South", "Atmospheric, Oceanic and Space Sciences"]
    );
    // Weeks Hall is 62.9 + 88.7 seconds away, but not through a single Segment
    assert!(!map
        .reachable_locations("Computer Sciences and Statistics", 200.0)
        .contains(&"Weeks Hall for Geological Sciences".to_string()));
    assert!(map.reachable_locations("Radio Hall", 1000.0).is_empty());
}

#[test]
fn unknown_locations() {
    let map = campus();
    assert_eq!(
        map.find_shortest_path("Radio Hall", "Bascom Hall"),
        Err(Error::NotFound(Lookup::Node))
    );
    assert_eq!(
        map.find_shortest_path("Bascom Hall", "Radio Hall"),
        Err(Error::NoPathFound)
    );
    assert_eq!(map.path_cost("Bascom Hall", "Radio Hall"), None);
    assert!(map.travel_times_on_path("Radio Hall", "Bascom Hall").is_err());
}

#[test]
fn closing_a_building() {
    let mut map = campus();
    map.graph_mut().remove_node("Van Hise Hall").unwrap();
    let route = map.find_shortest_path("Union South", "Bascom Hall").unwrap();
    assert_eq!(
        route,
        vec![
            "Union South",
            "Computer Sciences and Statistics",
            "Medical Sciences",
            "Bascom Hall",
        ]
    );
    assert!(!map.locations().contains(&"Van Hise Hall"));
}

#[test]
fn load_errors() {
    let broken = "digraph {\n  \"A\" -> \"B\" [seconds=12];\n  \"B\" -> \"C\" [minutes=3];\n}";
    match CampusMap::from_reader(broken.as_bytes()) {
        Err(error @ LoadError::Parse { line: 3, .. }) => {
            assert_eq!(error.to_string(), "line 3: missing `seconds` attribute");
        }
        other => panic!("unexpected result {:?}", other),
    }
}
