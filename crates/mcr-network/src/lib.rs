//! `mcr-network` — undirected road network with dynamic congestion.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`road`]    | `Road` (canonical edge record), fuel price constant         |
//! | [`network`] | `RoadNetwork` (interned names + incident lists)             |
//! | [`shared`]  | `SharedNetwork` (read/write lock around a network)          |
//! | [`traffic`] | `CongestionScript`, `AppliedCongestion`                     |
//! | [`preset`]  | The reference nine-location network                         |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod network;
pub mod preset;
pub mod road;
pub mod shared;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::RoadNetwork;
pub use preset::festive_network;
pub use road::{FUEL_PRICE_PER_10KM, Road};
pub use shared::SharedNetwork;
pub use traffic::{AppliedCongestion, CongestionScript};
