//! Heuristic-guided search.
//!
//! Edge weight is the blend of the road's own time and cost; the path score
//! `g` accumulates edge weights and the frontier is keyed by `g + h(node)`.
//!
//! # Precondition
//!
//! The result matches [`dijkstra`](crate::dijkstra) only when the heuristic
//! is admissible (never above the true remaining blended cost).  Locations
//! are not closed after expansion: if a cheaper `g` turns up later the node
//! is pushed again, so admissible-but-inconsistent heuristics still return
//! the optimum.

use std::collections::BinaryHeap;

use tracing::{debug, trace};

use mcr_core::LocationId;
use mcr_network::RoadNetwork;

use crate::frontier::{Labels, SearchNode, SearchStats};
use crate::{Criteria, Heuristic, PathResult, SearchResult};

/// Cheapest path from `start` to `end` under `criteria`, guided by
/// `heuristic`.
pub fn astar<H: Heuristic + ?Sized>(
    network: &RoadNetwork,
    start: LocationId,
    end: LocationId,
    criteria: Criteria,
    heuristic: &H,
) -> SearchResult<Option<PathResult>> {
    network.check(start)?;
    network.check(end)?;

    let mut labels = Labels::new(network.location_count(), start);
    let mut stats  = SearchStats::default();

    let mut heap = BinaryHeap::new();
    heap.push(SearchNode::origin(start, heuristic.estimate(start)));
    stats.pushed += 1;

    while let Some(node) = heap.pop() {
        let u = node.location.index();
        if node.score > labels.best[u] {
            stats.stale += 1;
            continue;
        }
        stats.expanded += 1;

        if node.location == end {
            break;
        }

        for (road_id, next) in network.neighbors(node.location) {
            let road = network.road(road_id);
            let edge_time = road.current_travel_time();
            let edge_cost = road.total_monetary_cost();
            let g = labels.best[u] + criteria.blend(edge_time, edge_cost);

            if g < labels.best[next.index()] {
                let time = labels.time[u] + edge_time;
                let cost = labels.cost[u] + edge_cost;
                let priority = g + heuristic.estimate(next);
                trace!(from = %node.location, to = %next, g, priority, "relax");
                labels.improve(next, g, time, cost, (node.location, road_id));
                heap.push(SearchNode { location: next, priority, score: g, time, cost });
                stats.pushed += 1;
            }
        }
    }

    debug!(
        algorithm = "astar",
        %criteria,
        pushed = stats.pushed,
        expanded = stats.expanded,
        stale = stats.stale,
        "search finished"
    );
    Ok(labels.finish(network, end))
}
