//! Unit tests for mcr-network.
//!
//! All tests use hand-built networks; the preset is only checked for shape.

#[cfg(test)]
mod helpers {
    use crate::RoadNetwork;

    /// `A - B - C` line plus an isolated `D`.
    ///
    ///   A-B: 10 km, toll 2.0, 10 min
    ///   B-C: 20 km, toll 3.0, 20 min
    pub fn line_network() -> RoadNetwork {
        let mut net = RoadNetwork::new();
        for name in ["A", "B", "C", "D"] {
            net.add_location(name).unwrap();
        }
        net.add_road("A", "B", 10.0, 2.0, 10.0).unwrap();
        net.add_road("B", "C", 20.0, 3.0, 20.0).unwrap();
        net
    }
}

// ── Road cost model ───────────────────────────────────────────────────────────

#[cfg(test)]
mod road {
    use crate::FUEL_PRICE_PER_10KM;

    #[test]
    fn derived_costs() {
        let net = super::helpers::line_network();
        let a = net.location("A").unwrap();
        let road = net.road(net.incident_roads(a)[0]);
        assert_eq!(road.current_travel_time(), 10.0);
        assert!((road.fuel_cost() - FUEL_PRICE_PER_10KM).abs() < 1e-12);
        assert!((road.total_monetary_cost() - 4.05).abs() < 1e-12);
    }

    #[test]
    fn congestion_scales_time_not_cost() {
        let mut net = super::helpers::line_network();
        net.update_traffic_conditions("A", "B", 2.5).unwrap();
        let a = net.location("A").unwrap();
        let road = net.road(net.incident_roads(a)[0]);
        assert_eq!(road.current_travel_time(), 25.0);
        assert!((road.total_monetary_cost() - 4.05).abs() < 1e-12);
    }

    #[test]
    fn zero_congestion_is_non_negative() {
        let mut net = super::helpers::line_network();
        net.update_traffic_conditions("B", "C", 0.0).unwrap();
        for (_, road) in net.roads() {
            assert!(road.current_travel_time() >= 0.0);
            assert!(road.total_monetary_cost() >= 0.0);
        }
    }
}

// ── Topology ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod topology {
    use crate::{NetworkError, RoadNetwork};

    #[test]
    fn empty_network() {
        let net = RoadNetwork::new();
        assert!(net.is_empty());
        assert_eq!(net.location_count(), 0);
        assert_eq!(net.road_count(), 0);
    }

    #[test]
    fn add_location_is_idempotent() {
        let mut net = super::helpers::line_network();
        let b = net.location("B").unwrap();
        let before: Vec<_> = net.incident_roads(b).to_vec();
        let generation = net.generation();

        assert_eq!(net.add_location("B").unwrap(), b);
        assert_eq!(net.location_count(), 4);
        assert_eq!(net.incident_roads(b), before.as_slice());
        assert_eq!(net.generation(), generation);
    }

    #[test]
    fn road_is_visible_from_both_ends() {
        let net = super::helpers::line_network();
        let a = net.location("A").unwrap();
        let b = net.location("B").unwrap();
        assert_eq!(net.road_between(a, b), net.road_between(b, a));
        assert!(net.road_between(a, b).is_some());
    }

    #[test]
    fn incident_lists_keep_insertion_order() {
        let net = super::helpers::line_network();
        let b = net.location("B").unwrap();
        let neighbours: Vec<_> = net.neighbors(b).map(|(_, n)| net.name(n)).collect();
        assert_eq!(neighbours, ["A", "C"]);
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let mut net = super::helpers::line_network();
        let err = net.add_road("A", "Z", 1.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownLocation(name) if name == "Z"));
        assert_eq!(net.road_count(), 2);
    }

    #[test]
    fn invalid_attributes_rejected() {
        let mut net = super::helpers::line_network();
        assert!(matches!(
            net.add_road("A", "C", 0.0, 1.0, 1.0),
            Err(NetworkError::InvalidAttribute { field: "distance_km", .. })
        ));
        assert!(matches!(
            net.add_road("A", "C", 1.0, -1.0, 1.0),
            Err(NetworkError::InvalidAttribute { field: "toll_cost", .. })
        ));
        assert!(matches!(
            net.add_road("A", "C", 1.0, 0.0, f64::NAN),
            Err(NetworkError::InvalidAttribute { field: "base_travel_time", .. })
        ));
        assert_eq!(net.road_count(), 2);
    }

    #[test]
    fn foreign_id_rejected() {
        let mut net = super::helpers::line_network();
        let a = net.location("A").unwrap();
        let bogus = mcr_core::LocationId(99);
        assert!(matches!(
            net.add_road_by_id(a, bogus, 1.0, 0.0, 1.0),
            Err(NetworkError::UnknownLocationId(_))
        ));
    }

    #[test]
    fn parallel_roads_are_distinct() {
        let mut net = super::helpers::line_network();
        let first = net.add_road("A", "C", 50.0, 0.0, 5.0).unwrap();
        let second = net.add_road("C", "A", 70.0, 0.0, 7.0).unwrap();
        assert_ne!(first, second);
        let a = net.location("A").unwrap();
        let c = net.location("C").unwrap();
        assert_eq!(net.road_between(a, c), Some(first));
        assert_eq!(net.road_between(c, a), Some(first));
    }

    #[test]
    fn ids_stop_short_of_the_invalid_sentinel() {
        use mcr_core::{LocationId, RoadId};

        use crate::network::{location_id_for, road_id_for};

        let last = u32::MAX as usize - 1;
        assert_eq!(location_id_for(last).unwrap(), LocationId(u32::MAX - 1));
        assert_eq!(road_id_for(last).unwrap(), RoadId(u32::MAX - 1));

        // u32::MAX is LocationId::INVALID / RoadId::INVALID.
        let sentinel = u32::MAX as usize;
        assert!(matches!(location_id_for(sentinel), Err(NetworkError::CapacityExceeded("locations"))));
        assert!(matches!(road_id_for(sentinel), Err(NetworkError::CapacityExceeded("roads"))));

        #[cfg(target_pointer_width = "64")]
        assert!(location_id_for(u32::MAX as usize + 1).is_err());
    }
}

// ── Traffic updates ──────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use mcr_core::SimRng;

    use crate::{CongestionScript, NetworkError};

    #[test]
    fn update_is_seen_from_both_directions() {
        let mut net = super::helpers::line_network();
        assert!(net.update_traffic_conditions("B", "A", 2.0).unwrap());

        let a = net.location("A").unwrap();
        let b = net.location("B").unwrap();
        let ab = net.road(net.road_between(a, b).unwrap());
        let ba = net.road(net.road_between(b, a).unwrap());
        assert_eq!(ab.congestion_factor(), 2.0);
        assert_eq!(ba.congestion_factor(), 2.0);
    }

    #[test]
    fn missing_road_is_noop() {
        let mut net = super::helpers::line_network();
        let generation = net.generation();
        let applied = net.update_traffic_conditions("A", "C", 3.0).unwrap();
        assert!(!applied);
        assert_eq!(net.generation(), generation);
        for (_, road) in net.roads() {
            assert_eq!(road.congestion_factor(), 1.0);
        }
    }

    #[test]
    fn unknown_location_is_error() {
        let mut net = super::helpers::line_network();
        assert!(matches!(
            net.update_traffic_conditions("A", "Nowhere", 2.0),
            Err(NetworkError::UnknownLocation(_))
        ));
        assert!(matches!(
            net.update_traffic_conditions("Nowhere", "A", 2.0),
            Err(NetworkError::UnknownLocation(_))
        ));
    }

    #[test]
    fn invalid_factor_rejected() {
        let mut net = super::helpers::line_network();
        assert!(matches!(
            net.update_traffic_conditions("A", "B", -1.0),
            Err(NetworkError::InvalidCongestion(_))
        ));
        assert!(net.update_traffic_conditions("A", "B", f64::INFINITY).is_err());
    }

    #[test]
    fn reset_restores_free_flow() {
        let mut net = super::helpers::line_network();
        net.update_traffic_conditions("A", "B", 3.0).unwrap();
        net.reset_traffic();
        assert!(net.roads().all(|(_, r)| r.congestion_factor() == 1.0));
    }

    #[test]
    fn successful_update_bumps_generation() {
        let mut net = super::helpers::line_network();
        let before = net.generation();
        net.update_traffic_conditions("A", "B", 1.2).unwrap();
        assert_eq!(net.generation(), before + 1);
    }

    #[test]
    fn script_is_deterministic() {
        let script = CongestionScript::festive();
        let mut n1 = crate::festive_network().unwrap();
        let mut n2 = crate::festive_network().unwrap();
        let r1 = script.apply(&mut n1, &mut SimRng::new(42)).unwrap();
        let r2 = script.apply(&mut n2, &mut SimRng::new(42)).unwrap();
        assert_eq!(r1, r2);
        assert_eq!(r1.len(), 5);
        for applied in &r1 {
            assert!(applied.applied);
            assert!((1.5..3.5).contains(&applied.factor), "got {}", applied.factor);
        }
    }

    #[test]
    fn script_tolerates_missing_roads() {
        let mut net = super::helpers::line_network();
        let script = CongestionScript::new(2.0, 2.0)
            .with_pair("A", "C")
            .with_pair("B", "C");
        let out = script.apply(&mut net, &mut SimRng::new(1)).unwrap();
        assert!(!out[0].applied);
        assert!(out[1].applied);
        assert_eq!(out[1].factor, 2.0);
    }
}

// ── Shared handle & preset ───────────────────────────────────────────────────

#[cfg(test)]
mod shared {
    use crate::SharedNetwork;
    use crate::preset::{FESTIVE_LOCATIONS, FESTIVE_ROADS};

    #[test]
    fn writes_visible_to_later_reads() {
        let shared = SharedNetwork::new(super::helpers::line_network());
        let before = shared.generation().unwrap();
        assert!(shared.update_traffic_conditions("A", "B", 2.0).unwrap());
        assert_eq!(shared.generation().unwrap(), before + 1);

        let net = shared.read().unwrap();
        let a = net.location("A").unwrap();
        let road = net.road(net.incident_roads(a)[0]);
        assert_eq!(road.congestion_factor(), 2.0);
    }

    #[test]
    fn clones_share_state() {
        let shared = SharedNetwork::new(super::helpers::line_network());
        let other = shared.clone();
        other.write().unwrap().add_location("E").unwrap();
        assert!(shared.read().unwrap().location("E").is_some());
    }

    #[test]
    fn preset_shape() {
        let net = crate::festive_network().unwrap();
        assert_eq!(net.location_count(), FESTIVE_LOCATIONS.len());
        assert_eq!(net.road_count(), FESTIVE_ROADS.len());
        let kuantan = net.location("Kuantan").unwrap();
        assert_eq!(net.incident_roads(kuantan).len(), 4);
    }
}
