//! Frontier entries and per-location search registers.

use std::cmp::Ordering;

use mcr_core::{LocationId, RoadId};
use mcr_network::RoadNetwork;

use crate::path::{PathResult, reconstruct};

// ── SearchNode ────────────────────────────────────────────────────────────────

/// A candidate frontier entry.
///
/// `score` is the accumulated blended cost of the path that produced this
/// entry; `priority` is the heap key (`score` for Dijkstra, `score + h` for
/// A*).  The `Ord` impl is reversed so `BinaryHeap` pops the smallest
/// priority first; ties go to the lower `LocationId` for deterministic runs.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub location: LocationId,
    pub priority: f64,
    pub score:    f64,
    pub time:     f64,
    pub cost:     f64,
}

impl SearchNode {
    pub(crate) fn origin(location: LocationId, priority: f64) -> Self {
        Self { location, priority, score: 0.0, time: 0.0, cost: 0.0 }
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.location.cmp(&self.location))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

// ── SearchStats ───────────────────────────────────────────────────────────────

/// Work counters for one search, logged at debug level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the frontier (including the start).
    pub pushed:   usize,
    /// Entries popped and expanded.
    pub expanded: usize,
    /// Entries popped but discarded because a better label already existed.
    pub stale:    usize,
}

// ── Labels ────────────────────────────────────────────────────────────────────

/// Best-known registers per location, indexed by `LocationId`.
pub(crate) struct Labels {
    pub best: Vec<f64>,
    pub time: Vec<f64>,
    pub cost: Vec<f64>,
    pub prev: Vec<Option<(LocationId, RoadId)>>,
}

impl Labels {
    pub fn new(location_count: usize, start: LocationId) -> Self {
        let mut labels = Self {
            best: vec![f64::INFINITY; location_count],
            time: vec![f64::INFINITY; location_count],
            cost: vec![f64::INFINITY; location_count],
            prev: vec![None; location_count],
        };
        labels.best[start.index()] = 0.0;
        labels.time[start.index()] = 0.0;
        labels.cost[start.index()] = 0.0;
        labels
    }

    #[inline]
    pub fn improve(
        &mut self,
        location: LocationId,
        score: f64,
        time: f64,
        cost: f64,
        via: (LocationId, RoadId),
    ) {
        let i = location.index();
        self.best[i] = score;
        self.time[i] = time;
        self.cost[i] = cost;
        self.prev[i] = Some(via);
    }

    /// Assemble the result for `end`, or `None` if it was never reached.
    pub fn finish(self, network: &RoadNetwork, end: LocationId) -> Option<PathResult> {
        let total_time = self.time[end.index()];
        if total_time.is_infinite() {
            return None;
        }
        let (path, total_distance) = reconstruct(network, &self.prev, end);
        Some(PathResult {
            path,
            total_time,
            total_cost: self.cost[end.index()],
            total_distance,
            generation: network.generation(),
        })
    }
}
