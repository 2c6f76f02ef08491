//! The reference east-coast network.
//!
//! Nine locations between Serdang (UPM) and Besut, with the main trunk road
//! and three alternatives.  Used by the demo binary and as a fixture in
//! search tests.

use crate::{NetworkResult, RoadNetwork};

/// Location names in insertion order.
pub const FESTIVE_LOCATIONS: [&str; 9] = [
    "UPM",
    "KL",
    "Karak",
    "Kuantan",
    "Kuala Terengganu",
    "Besut",
    "Alternative1",
    "Alternative2",
    "CoastalRoute",
];

/// `(a, b, distance_km, toll, base_minutes)` for every road.
pub const FESTIVE_ROADS: [(&str, &str, f64, f64, f64); 11] = [
    ("UPM",              "KL",               25.0,  5.00,  30.0),
    ("KL",               "Karak",            60.0, 15.00,  45.0),
    ("Karak",            "Kuantan",         150.0, 25.00, 120.0),
    ("Kuantan",          "Kuala Terengganu", 200.0, 35.00, 150.0),
    ("Kuala Terengganu", "Besut",            60.0, 10.00,  50.0),
    ("KL",               "Alternative1",     40.0,  8.00, 140.0),
    ("Alternative1",     "Kuantan",         170.0, 20.00, 140.0),
    ("Karak",            "Alternative2",     80.0, 12.00,  70.0),
    ("Alternative2",     "Kuala Terengganu", 220.0, 30.00, 180.0),
    ("Kuantan",          "CoastalRoute",    180.0, 25.00, 160.0),
    ("CoastalRoute",     "Besut",            70.0, 15.00,  60.0),
];

/// Build the reference network at free-flow (all congestion factors 1.0).
pub fn festive_network() -> NetworkResult<RoadNetwork> {
    let mut net = RoadNetwork::with_capacity(FESTIVE_LOCATIONS.len(), FESTIVE_ROADS.len());
    for name in FESTIVE_LOCATIONS {
        net.add_location(name)?;
    }
    for (a, b, dist, toll, mins) in FESTIVE_ROADS {
        net.add_road(a, b, dist, toll, mins)?;
    }
    Ok(net)
}
