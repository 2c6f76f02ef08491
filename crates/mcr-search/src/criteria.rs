//! Criteria blending.
//!
//! Turns a (time, cost) pair into the single scalar both searches order
//! their frontier by:
//!
//! | prioritize time | prioritize cost | result                      |
//! |-----------------|-----------------|-----------------------------|
//! | yes             | yes             | `0.5 * time + 0.5 * cost`   |
//! | yes             | no              | `time`                      |
//! | no              | yes             | `cost`                      |
//! | no              | no              | `cost` (the default)        |
//!
//! The balanced mode adds minutes to currency units.  The mix is kept as is:
//! reweighting it would change which route wins.

use std::fmt;
use std::str::FromStr;

use crate::SearchError;

/// Active prioritization mode.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Criteria {
    /// Minimize travel time under current congestion.
    Time,
    /// Minimize toll plus fuel.
    #[default]
    Cost,
    /// Equal-weight sum of time and cost.
    Balanced,
}

impl Criteria {
    pub const ALL: [Criteria; 3] = [Criteria::Time, Criteria::Cost, Criteria::Balanced];

    /// Map the two prioritization flags onto a mode.  Neither flag set falls
    /// through to [`Criteria::Cost`].
    pub fn from_flags(prioritize_time: bool, prioritize_cost: bool) -> Self {
        match (prioritize_time, prioritize_cost) {
            (true, true)  => Criteria::Balanced,
            (true, false) => Criteria::Time,
            (false, _)    => Criteria::Cost,
        }
    }

    /// `(prioritize_time, prioritize_cost)` for this mode.
    pub fn flags(self) -> (bool, bool) {
        match self {
            Criteria::Time     => (true, false),
            Criteria::Cost     => (false, true),
            Criteria::Balanced => (true, true),
        }
    }

    #[inline]
    pub fn blend(self, time: f64, cost: f64) -> f64 {
        match self {
            Criteria::Balanced => time * 0.5 + cost * 0.5,
            Criteria::Time     => time,
            Criteria::Cost     => cost,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Criteria::Time     => "time",
            Criteria::Cost     => "cost",
            Criteria::Balanced => "balanced",
        }
    }
}

/// Flag-based form of [`Criteria::blend`].
#[inline]
pub fn blend(time: f64, cost: f64, prioritize_time: bool, prioritize_cost: bool) -> f64 {
    Criteria::from_flags(prioritize_time, prioritize_cost).blend(time, cost)
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criteria {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "time"     => Ok(Criteria::Time),
            "cost"     => Ok(Criteria::Cost),
            "balanced" => Ok(Criteria::Balanced),
            _ => Err(SearchError::InvalidCriteria(s.to_owned())),
        }
    }
}
