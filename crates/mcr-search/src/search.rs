//! Pluggable search strategies.
//!
//! Callers hold strategies behind [`PathSearch`] so the same query can be run
//! through Dijkstra and A* and the two results compared.  Strategies only
//! read the network; take a [`SharedNetwork`](mcr_network::SharedNetwork)
//! read guard for the duration of a run when the network is shared.

use mcr_core::LocationId;
use mcr_network::RoadNetwork;

use crate::{Criteria, Heuristic, PathResult, SearchResult, astar, dijkstra};

/// A shortest-path strategy over a frozen network.
pub trait PathSearch {
    /// Short label used in reports.
    fn name(&self) -> &'static str;

    /// Search from `start` to `end`.  `Ok(None)` means unreachable.
    fn search(
        &self,
        network: &RoadNetwork,
        start: LocationId,
        end: LocationId,
        criteria: Criteria,
    ) -> SearchResult<Option<PathResult>>;

    /// [`search`](Self::search) addressed by location name.
    fn search_by_name(
        &self,
        network: &RoadNetwork,
        start: &str,
        end: &str,
        criteria: Criteria,
    ) -> SearchResult<Option<PathResult>> {
        let start = network.require(start)?;
        let end = network.require(end)?;
        self.search(network, start, end, criteria)
    }
}

/// Uninformed search.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSearch;

impl PathSearch for DijkstraSearch {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn search(
        &self,
        network: &RoadNetwork,
        start: LocationId,
        end: LocationId,
        criteria: Criteria,
    ) -> SearchResult<Option<PathResult>> {
        dijkstra(network, start, end, criteria)
    }
}

/// Heuristic-guided search.  See [`astar`](crate::astar) for the
/// admissibility precondition.
#[derive(Debug, Clone, Default)]
pub struct AStarSearch<H> {
    pub heuristic: H,
}

impl<H: Heuristic> AStarSearch<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<H: Heuristic> PathSearch for AStarSearch<H> {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search(
        &self,
        network: &RoadNetwork,
        start: LocationId,
        end: LocationId,
        criteria: Criteria,
    ) -> SearchResult<Option<PathResult>> {
        astar(network, start, end, criteria, &self.heuristic)
    }
}

/// One strategy's answer within a [`compare`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub strategy: &'static str,
    pub criteria: Criteria,
    pub result:   Option<PathResult>,
}

impl Comparison {
    /// `true` if every entry found a path with the same totals (within
    /// `epsilon`), or none of them found one.
    pub fn all_agree(runs: &[Comparison], epsilon: f64) -> bool {
        let Some(first) = runs.first() else {
            return true;
        };
        runs.iter().all(|run| match (&first.result, &run.result) {
            (Some(a), Some(b)) => a.same_totals(b, epsilon),
            (None, None) => true,
            _ => false,
        })
    }
}

/// Run every strategy on the same network snapshot.
pub fn compare(
    network: &RoadNetwork,
    start: LocationId,
    end: LocationId,
    criteria: Criteria,
    strategies: &[&dyn PathSearch],
) -> SearchResult<Vec<Comparison>> {
    strategies
        .iter()
        .map(|s| {
            Ok(Comparison {
                strategy: s.name(),
                criteria,
                result: s.search(network, start, end, criteria)?,
            })
        })
        .collect()
}
