//! Depth-first route search with a shared visited set.
//!
//! This is deliberately not Dijkstra. The traversal makes a single
//! depth-first sweep over the graph, marking stations visited in one
//! global set shared by every branch, so at most one candidate route is
//! ever extended past any given station. The destination is the one
//! station branches may always re-enter, which is how candidate routes of
//! different lengths still get compared.
//!
//! Candidates are ranked by station count alone; the accumulated fare is
//! carried along and reported, never compared. A longer route with fewer
//! line switches can therefore be cheaper than the winner and still lose.
//! Callers depend on this ranking, so it must not be "fixed" to rank by
//! fare.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::Path;
use crate::network::LineNetwork;

use super::costs::SearchCosts;

/// Find the route with the fewest stations from `from` to `to`.
///
/// Returns a vector holding the single best route, or an empty vector when
/// `from` is not a known station or `to` is unreachable. The vector shape
/// leaves room for returning tied routes later. Querying a station against
/// itself yields the one-station route with zero fare.
pub fn shortest_paths(
    network: &LineNetwork,
    from: &str,
    to: &str,
    costs: &SearchCosts,
) -> Vec<Path> {
    if network.station(from).is_none() {
        debug!(from, "origin station unknown, no routes");
        return Vec::new();
    }

    let mut visited = HashSet::new();
    let mut best = None;
    traverse(
        network,
        from,
        to,
        costs,
        &mut visited,
        Path::starting_at(from),
        &mut best,
    );

    debug!(
        from,
        to,
        expanded = visited.len(),
        found = best.is_some(),
        "route search complete"
    );
    best.into_iter().collect()
}

/// Expand one station. `path` already ends at `current` with its fare
/// accrued; `visited` is the set shared across all branches.
fn traverse(
    network: &LineNetwork,
    current: &str,
    destination: &str,
    costs: &SearchCosts,
    visited: &mut HashSet<String>,
    path: Path,
    best: &mut Option<Path>,
) {
    if current == destination {
        // Fewest stations wins; strictly shorter replaces, ties keep the
        // incumbent.
        if best.as_ref().is_none_or(|b| path.len() < b.len()) {
            trace!(stations = path.len(), cost = path.total_cost(), "new best route");
            *best = Some(path);
        }
        return;
    }

    visited.insert(current.to_string());

    let Some(station) = network.station(current) else {
        return;
    };

    for neighbor in station.neighbors() {
        if visited.contains(neighbor) && neighbor != destination {
            continue;
        }

        let mut step_cost = costs.per_station;
        // A line switch happened at `current` when the station we came
        // from shares no line with the station we are about to enter.
        if let Some(previous) = path.before_last() {
            if !shares_line(network, previous, neighbor) {
                step_cost += costs.per_line_switch;
            }
        }

        trace!(from = current, to = neighbor.as_str(), step_cost, "branching");
        traverse(
            network,
            neighbor,
            destination,
            costs,
            visited,
            path.extend_to(neighbor, step_cost),
            best,
        );
    }
}

fn shares_line(network: &LineNetwork, a: &str, b: &str) -> bool {
    match (network.station(a), network.station(b)) {
        (Some(a), Some(b)) => a.is_in_same_line_as(b),
        _ => false,
    }
}
