//! Candidate routes produced by the planner.

use serde::{Deserialize, Serialize};

/// One candidate route: the station names visited, in order, plus the
/// accumulated fare.
///
/// Paths have value semantics: branching the search clones the whole
/// visited sequence (see [`Path::extend_to`]) so that alternate branches
/// never share mutable history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    stations: Vec<String>,
    total_cost: f64,
}

impl Path {
    /// A one-station path with zero cost.
    pub fn starting_at(origin: impl Into<String>) -> Self {
        Self {
            stations: vec![origin.into()],
            total_cost: 0.0,
        }
    }

    /// A copy of this path extended by one station, with `step_cost`
    /// added to the accumulated total.
    #[must_use]
    pub fn extend_to(&self, station: &str, step_cost: f64) -> Self {
        let mut stations = self.stations.clone();
        stations.push(station.to_string());
        Self {
            stations,
            total_cost: self.total_cost + step_cost,
        }
    }

    /// Visited station names in order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Number of stations on the path. Always at least one.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// True if the path has no stations. Paths built through this module
    /// always have at least their origin, so this only matters for
    /// deserialized values.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The station currently at the tip of the path.
    pub fn last(&self) -> Option<&str> {
        self.stations.last().map(String::as_str)
    }

    /// The station immediately before the tip, if the path has advanced
    /// beyond its origin. This is the station the line-switch test
    /// compares against when the planner steps off the tip.
    pub fn before_last(&self) -> Option<&str> {
        let n = self.stations.len();
        if n >= 2 {
            Some(&self.stations[n - 2])
        } else {
            None
        }
    }

    /// Accumulated fare for the whole path.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}
