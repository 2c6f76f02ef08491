//! A* heuristics.
//!
//! A heuristic estimates the blended cost still to pay from a location to
//! the destination.  The engine does not check admissibility: if an estimate
//! overstates the true remaining cost, A* may return a worse path than
//! Dijkstra.  [`ZeroHeuristic`] is always admissible.

use rustc_hash::FxHashMap;

use mcr_core::LocationId;
use mcr_network::RoadNetwork;

use crate::{SearchError, SearchResult};

/// Estimate used for locations missing from a [`HeuristicTable`].
pub const DEFAULT_ESTIMATE: f64 = 300.0;

/// Remaining-cost estimate for a location.  Must be non-negative.
pub trait Heuristic {
    fn estimate(&self, location: LocationId) -> f64;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    #[inline]
    fn estimate(&self, location: LocationId) -> f64 {
        (**self).estimate(location)
    }
}

/// Always 0.  A* then expands in the same order as Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _location: LocationId) -> f64 {
        0.0
    }
}

/// Static per-location estimates with a fallback for absent locations.
#[derive(Debug, Clone)]
pub struct HeuristicTable {
    estimates: FxHashMap<LocationId, f64>,
    default:   f64,
}

impl Default for HeuristicTable {
    fn default() -> Self {
        Self { estimates: FxHashMap::default(), default: DEFAULT_ESTIMATE }
    }
}

impl HeuristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty table whose fallback estimate is `default` instead of
    /// [`DEFAULT_ESTIMATE`].
    pub fn with_default(default: f64) -> SearchResult<Self> {
        let mut table = Self::new();
        table.set_default_estimate(default)?;
        Ok(table)
    }

    pub fn insert(&mut self, location: LocationId, estimate: f64) -> SearchResult<()> {
        if !valid_estimate(estimate) {
            return Err(SearchError::InvalidHeuristic { location, value: estimate });
        }
        self.estimates.insert(location, estimate);
        Ok(())
    }

    /// Build from `(name, estimate)` pairs.  Every name must exist in
    /// `network`.
    pub fn from_names<'a>(
        network: &RoadNetwork,
        pairs: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> SearchResult<Self> {
        let mut table = Self::new();
        for (name, estimate) in pairs {
            table.insert(network.require(name)?, estimate)?;
        }
        Ok(table)
    }

    /// Straight-line style estimates towards Besut for the reference
    /// network.  Names the network does not contain are skipped.
    pub fn festive(network: &RoadNetwork) -> SearchResult<Self> {
        const ESTIMATES: [(&str, f64); 9] = [
            ("UPM",              400.0),
            ("KL",               390.0),
            ("Karak",            350.0),
            ("Kuantan",          250.0),
            ("Kuala Terengganu", 100.0),
            ("Besut",              0.0),
            ("Alternative1",     270.0),
            ("Alternative2",     200.0),
            ("CoastalRoute",      50.0),
        ];
        let mut table = Self::new();
        for (name, estimate) in ESTIMATES {
            if let Some(id) = network.location(name) {
                table.insert(id, estimate)?;
            }
        }
        Ok(table)
    }

    pub fn get(&self, location: LocationId) -> Option<f64> {
        self.estimates.get(&location).copied()
    }

    pub fn default_estimate(&self) -> f64 {
        self.default
    }

    pub fn set_default_estimate(&mut self, default: f64) -> SearchResult<()> {
        if !valid_estimate(default) {
            return Err(SearchError::InvalidDefaultHeuristic(default));
        }
        self.default = default;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

impl Heuristic for HeuristicTable {
    #[inline]
    fn estimate(&self, location: LocationId) -> f64 {
        self.get(location).unwrap_or(self.default)
    }
}

fn valid_estimate(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
