//! Plain data row written by [`CsvReport`](crate::CsvReport).

use serde::Serialize;

use mcr_network::RoadNetwork;
use mcr_search::Comparison;

use crate::render::ARROW;

/// One strategy's answer for one criteria mode.
///
/// Unreachable queries keep the strategy and criteria but leave the path
/// empty and the totals blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub criteria:       String,
    pub strategy:       String,
    pub found:          bool,
    pub path:           String,
    pub hops:           usize,
    pub total_time:     Option<f64>,
    pub total_cost:     Option<f64>,
    pub total_distance: Option<f64>,
    pub generation:     Option<u64>,
}

impl ComparisonRow {
    pub fn from_comparison(network: &RoadNetwork, run: &Comparison) -> Self {
        let base = Self {
            criteria:       run.criteria.to_string(),
            strategy:       run.strategy.to_owned(),
            found:          false,
            path:           String::new(),
            hops:           0,
            total_time:     None,
            total_cost:     None,
            total_distance: None,
            generation:     None,
        };
        match &run.result {
            None => base,
            Some(r) => Self {
                found:          true,
                path:           r.names(network).join(ARROW),
                hops:           r.hop_count(),
                total_time:     Some(r.total_time),
                total_cost:     Some(r.total_cost),
                total_distance: Some(r.total_distance),
                generation:     Some(r.generation),
                ..base
            },
        }
    }
}
