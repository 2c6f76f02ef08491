//! Plain-text rendering.

use std::fmt::Write;

use mcr_network::RoadNetwork;
use mcr_search::PathResult;

/// Path separator between location names.
pub const ARROW: &str = " -> ";

/// Render one result, or `No path found!` when there is none.
///
/// ```text
/// Path: A -> B -> C
/// Total Time: 30.00 minutes
/// Total Cost: RM11.15
/// Total Distance: 30.00 km
/// ```
pub fn render_path(network: &RoadNetwork, result: Option<&PathResult>, currency: &str) -> String {
    let Some(result) = result else {
        return "No path found!\n".to_owned();
    };
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Path: {}", result.names(network).join(ARROW));
    let _ = writeln!(out, "Total Time: {:.2} minutes", result.total_time);
    let _ = writeln!(out, "Total Cost: {currency}{:.2}", result.total_cost);
    let _ = writeln!(out, "Total Distance: {:.2} km", result.total_distance);
    out
}

/// Dijkstra and A* answers one after the other.
pub fn render_comparison(
    network: &RoadNetwork,
    dijkstra: Option<&PathResult>,
    astar: Option<&PathResult>,
    currency: &str,
) -> String {
    format!(
        "Dijkstra's Algorithm:\n{}\nA* Algorithm:\n{}",
        render_path(network, dijkstra, currency),
        render_path(network, astar, currency),
    )
}
