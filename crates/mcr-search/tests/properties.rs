//! Property-based tests for the search engine.
//!
//! # Invariants tested
//!
//! - **Optimality agreement:** A* with a zero heuristic returns the same
//!   totals as Dijkstra for every criteria mode (or both find no path).
//! - **Distance consistency:** `total_distance` equals the summed distance of
//!   consecutive hops in the returned path.
//! - **Totals consistency:** `total_time` and `total_cost` equal the sums of
//!   the per-road derived values along the path.
//! - **Symmetry:** every road is reachable from both endpoints.
//! - **Non-negativity:** derived time and money are never negative.

use std::collections::HashSet;

use mcr_core::LocationId;
use mcr_network::RoadNetwork;
use mcr_search::{Criteria, PathResult, ZeroHeuristic, astar, dijkstra};
use proptest::prelude::*;

type RawRoad = (usize, usize, f64, f64, f64, f64);

/// Roads as `(a, b, distance, toll, base_time, congestion)`; duplicate and
/// self-loop pairs are dropped so each hop names exactly one road.
fn roads_strategy(n: usize) -> impl Strategy<Value = Vec<RawRoad>> {
    prop::collection::vec(
        (0..n, 0..n, 1.0..200.0f64, 0.0..40.0f64, 1.0..180.0f64, 0.0..4.0f64),
        0..(n * 3),
    )
}

fn build(n: usize, raw: &[RawRoad]) -> RoadNetwork {
    let mut net = RoadNetwork::new();
    let ids: Vec<LocationId> = (0..n).map(|i| net.add_location(&format!("L{i}")).unwrap()).collect();
    let mut seen = HashSet::new();
    for &(a, b, dist, toll, time, congestion) in raw {
        if a == b || !seen.insert((a.min(b), a.max(b))) {
            continue;
        }
        net.add_road_by_id(ids[a], ids[b], dist, toll, time).unwrap();
        net.set_congestion(ids[a], ids[b], congestion).unwrap();
    }
    net
}

fn hop_sums(net: &RoadNetwork, path: &PathResult) -> (f64, f64, f64) {
    path.path.windows(2).fold((0.0, 0.0, 0.0), |(d, t, c), hop| {
        let road = net.road(net.road_between(hop[0], hop[1]).expect("hop has a road"));
        (
            d + road.distance_km(),
            t + road.current_travel_time(),
            c + road.total_monetary_cost(),
        )
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

fn network_strategy() -> impl Strategy<Value = (usize, Vec<RawRoad>, usize, usize)> {
    (2usize..9).prop_flat_map(|n| (Just(n), roads_strategy(n), 0..n, 0..n))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn astar_zero_heuristic_agrees_with_dijkstra((n, raw, s, e) in network_strategy()) {
        let net = build(n, &raw);
        let (s, e) = (LocationId(s as u32), LocationId(e as u32));
        for c in Criteria::ALL {
            let d = dijkstra(&net, s, e, c).unwrap();
            let a = astar(&net, s, e, c, &ZeroHeuristic).unwrap();
            match (d, a) {
                (Some(d), Some(a)) => {
                    prop_assert!(close(c.blend(d.total_time, d.total_cost),
                                       c.blend(a.total_time, a.total_cost)),
                        "{c}: dijkstra {d:?} vs astar {a:?}");
                }
                (None, None) => {}
                (d, a) => prop_assert!(false, "{c}: reachability differs: {d:?} vs {a:?}"),
            }
        }
    }

    #[test]
    fn totals_match_the_returned_path((n, raw, s, e) in network_strategy()) {
        let net = build(n, &raw);
        let (s, e) = (LocationId(s as u32), LocationId(e as u32));
        for c in Criteria::ALL {
            if let Some(r) = dijkstra(&net, s, e, c).unwrap() {
                prop_assert_eq!(r.start(), Some(s));
                prop_assert_eq!(r.end(), Some(e));
                let (dist, time, cost) = hop_sums(&net, &r);
                prop_assert!(close(r.total_distance, dist));
                prop_assert!(close(r.total_time, time));
                prop_assert!(close(r.total_cost, cost));
            }
        }
    }

    #[test]
    fn roads_are_symmetric_and_non_negative((n, raw, _s, _e) in network_strategy()) {
        let net = build(n, &raw);
        for (id, road) in net.roads() {
            let (a, b) = road.endpoints();
            prop_assert!(net.incident_roads(a).contains(&id));
            prop_assert!(net.incident_roads(b).contains(&id));
            prop_assert_eq!(net.road_between(a, b), net.road_between(b, a));
            prop_assert!(road.current_travel_time() >= 0.0);
            prop_assert!(road.total_monetary_cost() >= 0.0);
        }
    }

    #[test]
    fn missing_pair_update_changes_nothing((n, raw, s, e) in network_strategy(), factor in 0.0..5.0f64) {
        let mut net = build(n, &raw);
        let (s, e) = (LocationId(s as u32), LocationId(e as u32));
        prop_assume!(net.road_between(s, e).is_none());
        let before: Vec<f64> = net.roads().map(|(_, r)| r.congestion_factor()).collect();
        prop_assert!(!net.set_congestion(s, e, factor).unwrap());
        let after: Vec<f64> = net.roads().map(|(_, r)| r.congestion_factor()).collect();
        prop_assert_eq!(before, after);
    }
}
