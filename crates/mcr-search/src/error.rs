//! Search error type.

use thiserror::Error;

use mcr_core::LocationId;
use mcr_network::NetworkError;

/// Errors produced by `mcr-search`.
///
/// An unreachable destination is not an error; searches return `Ok(None)`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("invalid heuristic estimate {value} for {location} (must be finite and >= 0)")]
    InvalidHeuristic { location: LocationId, value: f64 },

    #[error("invalid default heuristic estimate {0} (must be finite and >= 0)")]
    InvalidDefaultHeuristic(f64),

    #[error("unknown criteria {0:?} (expected time, cost or balanced)")]
    InvalidCriteria(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
