//! Uninformed search.
//!
//! Classic Dijkstra over blended cost.  Each candidate is scored by blending
//! the *accumulated* time and money at the neighbour, so the frontier key is
//! exactly [`Criteria::blend`] of the path totals.
//!
//! A location is settled the first time a non-stale entry for it is popped;
//! settled locations are never relaxed again and later entries for them are
//! dropped.  The loop stops as soon as the destination is settled, which is
//! optimal because every remaining key is at least as large.

use std::collections::BinaryHeap;

use tracing::{debug, trace};

use mcr_core::LocationId;
use mcr_network::RoadNetwork;

use crate::frontier::{Labels, SearchNode, SearchStats};
use crate::{Criteria, PathResult, SearchResult};

/// Cheapest path from `start` to `end` under `criteria`.
///
/// Returns `Ok(None)` when `end` is unreachable and an error when either id
/// does not belong to `network`.
pub fn dijkstra(
    network: &RoadNetwork,
    start: LocationId,
    end: LocationId,
    criteria: Criteria,
) -> SearchResult<Option<PathResult>> {
    network.check(start)?;
    network.check(end)?;

    let n = network.location_count();
    let mut labels  = Labels::new(n, start);
    let mut settled = vec![false; n];
    let mut stats   = SearchStats::default();

    let mut heap = BinaryHeap::new();
    heap.push(SearchNode::origin(start, 0.0));
    stats.pushed += 1;

    while let Some(node) = heap.pop() {
        let u = node.location.index();
        if settled[u] || node.score > labels.best[u] {
            stats.stale += 1;
            continue;
        }
        settled[u] = true;
        stats.expanded += 1;

        if node.location == end {
            break;
        }

        for (road_id, next) in network.neighbors(node.location) {
            if settled[next.index()] {
                continue;
            }
            let road = network.road(road_id);
            let time  = labels.time[u] + road.current_travel_time();
            let cost  = labels.cost[u] + road.total_monetary_cost();
            let score = criteria.blend(time, cost);

            if score < labels.best[next.index()] {
                trace!(from = %node.location, to = %next, score, "relax");
                labels.improve(next, score, time, cost, (node.location, road_id));
                heap.push(SearchNode { location: next, priority: score, score, time, cost });
                stats.pushed += 1;
            }
        }
    }

    debug!(
        algorithm = "dijkstra",
        %criteria,
        pushed = stats.pushed,
        expanded = stats.expanded,
        stale = stats.stale,
        "search finished"
    );
    Ok(labels.finish(network, end))
}
