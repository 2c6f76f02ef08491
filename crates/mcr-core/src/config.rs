//! Scenario configuration.
//!
//! A scenario names the query endpoints, the seed and factor range used to
//! perturb traffic, and the presentation currency.  Typically loaded from a
//! JSON file by the application crate (feature `serde`) and otherwise built
//! from [`ScenarioConfig::default`], which reproduces the reference run.

use crate::{CoreError, CoreResult};

/// Top-level scenario configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    /// Master RNG seed.  The same seed always produces identical congestion.
    pub seed: u64,

    /// Lower bound (inclusive) of the congestion factor drawn per road.
    pub congestion_min: f64,

    /// Upper bound (exclusive) of the congestion factor drawn per road.
    pub congestion_max: f64,

    /// Name of the query start location.
    pub start: String,

    /// Name of the query destination.
    pub end: String,

    /// Prefix printed before monetary amounts.
    pub currency: String,

    /// A* estimate for locations missing from the heuristic table.
    pub default_heuristic: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed:              42,
            congestion_min:    1.5,
            congestion_max:    3.5,
            start:             "UPM".to_owned(),
            end:               "Besut".to_owned(),
            currency:          "RM".to_owned(),
            default_heuristic: 300.0,
        }
    }
}

impl ScenarioConfig {
    /// Check ranges and required fields.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.congestion_min.is_finite() || !self.congestion_max.is_finite() {
            return Err(CoreError::Config("congestion bounds must be finite".into()));
        }
        if self.congestion_min < 0.0 {
            return Err(CoreError::Config(format!(
                "congestion_min must be >= 0, got {}",
                self.congestion_min
            )));
        }
        if self.congestion_max < self.congestion_min {
            return Err(CoreError::Config(format!(
                "congestion_max ({}) is below congestion_min ({})",
                self.congestion_max, self.congestion_min
            )));
        }
        if self.start.is_empty() || self.end.is_empty() {
            return Err(CoreError::Config("start and end must be non-empty".into()));
        }
        if !self.default_heuristic.is_finite() || self.default_heuristic < 0.0 {
            return Err(CoreError::Config(format!(
                "default_heuristic must be a finite value >= 0, got {}",
                self.default_heuristic
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.  Missing fields take their
    /// default values.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    #[cfg(feature = "serde")]
    pub fn from_json_path(path: &std::path::Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
