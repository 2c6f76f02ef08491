//! Network error type.

use thiserror::Error;

use mcr_core::LocationId;

/// Errors produced by `mcr-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("location {0:?} not found in network")]
    UnknownLocation(String),

    #[error("location {0} not found in network")]
    UnknownLocationId(LocationId),

    #[error("invalid road attribute {field}: {value}")]
    InvalidAttribute { field: &'static str, value: f64 },

    #[error("invalid congestion factor {0} (must be finite and >= 0)")]
    InvalidCongestion(f64),

    #[error("too many {0} for a 32-bit id")]
    CapacityExceeded(&'static str),

    #[error("network lock poisoned by a panicking writer")]
    Poisoned,
}

pub type NetworkResult<T> = Result<T, NetworkError>;
