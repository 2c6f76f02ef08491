//! `mcr-search` — multi-criteria shortest paths over a [`RoadNetwork`].
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`criteria`]  | `Criteria`, `blend` (time/cost → one priority scalar)     |
//! | [`heuristic`] | `Heuristic` trait, `HeuristicTable`, `ZeroHeuristic`      |
//! | [`frontier`]  | `SearchNode` heap entry, `SearchStats`                    |
//! | [`dijkstra`]  | Uninformed search                                         |
//! | [`astar`]     | Heuristic-guided search                                   |
//! | [`path`]      | `PathResult`, predecessor walk                            |
//! | [`search`]    | `PathSearch` trait, `DijkstraSearch`, `AStarSearch`, `compare` |
//! | [`error`]     | `SearchError`, `SearchResult<T>`                          |
//!
//! Both algorithms blend with the same [`Criteria`], so with an admissible
//! heuristic they agree on the optimal totals and can be regression-tested
//! against each other.
//!
//! [`RoadNetwork`]: mcr_network::RoadNetwork

pub mod astar;
pub mod criteria;
pub mod dijkstra;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod path;
pub mod search;


pub use astar::astar;
pub use criteria::{Criteria, blend};
pub use dijkstra::dijkstra;
pub use error::{SearchError, SearchResult};
pub use frontier::{SearchNode, SearchStats};
pub use heuristic::{DEFAULT_ESTIMATE, Heuristic, HeuristicTable, ZeroHeuristic};
pub use path::PathResult;
pub use search::{AStarSearch, Comparison, DijkstraSearch, PathSearch, compare};
