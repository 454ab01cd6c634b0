//! Cost schedule for route search.

use serde::{Deserialize, Serialize};

/// The two flat fares a route accrues.
///
/// Submitted by the consuming UI alongside a query; there is no sensible
/// default fare, so both values are always supplied explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchCosts {
    /// Fare added for every station entered after the origin.
    pub per_station: f64,

    /// Additional fare added when a step leaves the previous station's
    /// lines behind (see the search module for the exact test).
    pub per_line_switch: f64,
}

impl SearchCosts {
    /// Create a cost schedule with the given fares.
    pub fn new(per_station: f64, per_line_switch: f64) -> Self {
        Self {
            per_station,
            per_line_switch,
        }
    }
}
