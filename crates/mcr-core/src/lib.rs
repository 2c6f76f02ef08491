//! `mcr-core` — foundational types for the multi-criteria routing engine.
//!
//! This crate is a dependency of every other `mcr-*` crate.  It has no
//! `mcr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`/`serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `RoadId`                                |
//! | [`config`]      | `ScenarioConfig`                                      |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public types and enables |
//! |         | JSON loading of `ScenarioConfig`.                          |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ScenarioConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{LocationId, RoadId};
pub use rng::SimRng;
