//! Deterministic congestion scripts.
//!
//! A script is an ordered list of road endpoints plus a factor range.  Each
//! pair draws one factor from the RNG in list order, whether or not the road
//! exists, so the factors for the remaining pairs do not shift when a network
//! variant lacks one of the roads.

use tracing::{debug, info};

use mcr_core::SimRng;

use crate::{NetworkResult, RoadNetwork};

/// Outcome of one scripted congestion update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedCongestion {
    pub source:      String,
    pub destination: String,
    pub factor:      f64,
    /// `false` when no road joined the pair and the update was a no-op.
    pub applied:     bool,
}

/// Ordered `(source, destination)` pairs perturbed by a factor drawn
/// uniformly from `[min, max)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CongestionScript {
    pairs: Vec<(String, String)>,
    min:   f64,
    max:   f64,
}

impl CongestionScript {
    pub fn new(min: f64, max: f64) -> Self {
        Self { pairs: Vec::new(), min, max }
    }

    pub fn with_pair(mut self, source: &str, destination: &str) -> Self {
        self.pairs.push((source.to_owned(), destination.to_owned()));
        self
    }

    /// Holiday-exodus congestion on the main east-coast corridor, factor in
    /// `[1.5, 3.5)`.
    pub fn festive() -> Self {
        Self::festive_with_range(1.5, 3.5)
    }

    /// The festive corridor with a caller-chosen factor range.
    pub fn festive_with_range(min: f64, max: f64) -> Self {
        Self::new(min, max)
            .with_pair("UPM", "KL")
            .with_pair("KL", "Karak")
            .with_pair("Karak", "Kuantan")
            .with_pair("Kuantan", "Kuala Terengganu")
            .with_pair("Kuala Terengganu", "Besut")
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Apply every pair in order.  Unknown location names abort the script
    /// with `UnknownLocation`; missing roads are recorded as not applied.
    pub fn apply(
        &self,
        network: &mut RoadNetwork,
        rng: &mut SimRng,
    ) -> NetworkResult<Vec<AppliedCongestion>> {
        let mut out = Vec::with_capacity(self.pairs.len());
        for (source, destination) in &self.pairs {
            let factor = rng.uniform(self.min, self.max);
            let applied = network.update_traffic_conditions(source, destination, factor)?;
            if applied {
                info!(%source, %destination, factor, "congestion applied");
            } else {
                debug!(%source, %destination, "congestion target has no road");
            }
            out.push(AppliedCongestion {
                source: source.clone(),
                destination: destination.clone(),
                factor,
                applied,
            });
        }
        Ok(out)
    }
}
