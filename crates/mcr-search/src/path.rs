//! Search output and path reconstruction.

use mcr_core::{LocationId, RoadId};
use mcr_network::RoadNetwork;

/// A found route: locations from start to end inclusive plus its totals.
///
/// `total_distance` is summed over the roads actually walked during
/// reconstruction, not tracked by the search, so it always equals the sum of
/// the hop distances.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub path:           Vec<LocationId>,
    /// Minutes under the congestion in force during the search.
    pub total_time:     f64,
    /// Tolls plus fuel.
    pub total_cost:     f64,
    /// Kilometres.
    pub total_distance: f64,
    /// [`RoadNetwork::generation`] the search ran against.
    pub generation:     u64,
}

impl PathResult {
    pub fn start(&self) -> Option<LocationId> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<LocationId> {
        self.path.last().copied()
    }

    /// Number of roads traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `true` for a single-location path.  When start and end differ this
    /// means no real route was found.
    pub fn is_trivial(&self) -> bool {
        self.path.len() <= 1
    }

    pub fn names<'n>(&self, network: &'n RoadNetwork) -> Vec<&'n str> {
        self.path.iter().map(|&id| network.name(id)).collect()
    }

    /// Time and cost both within `epsilon` of `other`'s.
    pub fn same_totals(&self, other: &PathResult, epsilon: f64) -> bool {
        (self.total_time - other.total_time).abs() <= epsilon
            && (self.total_cost - other.total_cost).abs() <= epsilon
    }
}

/// Walk predecessor links back from `end`.
///
/// Returns the locations in travel order and the summed distance of the
/// roads used.  If `end` has no predecessor the result is `([end], 0.0)`.
pub(crate) fn reconstruct(
    network: &RoadNetwork,
    prev: &[Option<(LocationId, RoadId)>],
    end: LocationId,
) -> (Vec<LocationId>, f64) {
    let mut path = vec![end];
    let mut distance = 0.0;
    let mut cur = end;
    while let Some((from, road)) = prev[cur.index()] {
        distance += network.road(road).distance_km();
        path.push(from);
        cur = from;
        debug_assert!(path.len() <= prev.len(), "predecessor cycle");
    }
    path.reverse();
    (path, distance)
}
