//! The line network: every declared line plus the station graph they span.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Line, NetworkError, Path, Station};
use crate::planner::{self, SearchCosts};

/// A compiled network of metro lines.
///
/// Owns the declared lines in insertion order and a name-keyed registry of
/// stations. Stations are shared across lines by name: the second line to
/// declare "Central" augments the existing entry, which is how
/// interchanges get the combined neighbor sets of both lines.
///
/// Intended use is build-then-query: populate via [`LineNetwork::add_line`]
/// and [`LineNetwork::add_stations_to_line`] (typically through
/// [`crate::spec::parse_lines_spec`]), then treat the network as read-only
/// while querying. No internal synchronization is provided.
#[derive(Debug, Clone, Default)]
pub struct LineNetwork {
    lines: Vec<Line>,
    stations: HashMap<String, Station>,
}

impl LineNetwork {
    /// An empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new line and wire its stations into the graph.
    ///
    /// Each station is created on first sight, gains `line_name` in its
    /// membership, and is linked (symmetrically) to the station declared
    /// immediately before it on this line. The first station of a
    /// brand-new line has no predecessor and gets no link.
    pub fn add_line(&mut self, line_name: &str, station_names: Vec<String>) {
        self.register_stations(line_name, &station_names, None);
        self.lines.push(Line::new(line_name, station_names));
    }

    /// Append stations to an existing line, chaining them onto where the
    /// line left off.
    ///
    /// Unknown line names are tolerated as a silent no-op; callers that
    /// care should check [`LineNetwork::exist_line`] first.
    pub fn add_stations_to_line(&mut self, station_names: Vec<String>, line_name: &str) {
        let Some(line) = self.lines.iter_mut().find(|l| l.name() == line_name) else {
            trace!(line = line_name, "ignoring stations for unknown line");
            return;
        };

        // Chain the continuation onto the line's current last station.
        // Single-station lines do not chain: their continuation starts a
        // fresh, unlinked run.
        let previous = if line.station_names().len() > 1 {
            line.station_names().last().cloned()
        } else {
            None
        };

        line.append_stations(&station_names);
        self.register_stations(line_name, &station_names, previous);
    }

    /// Number of declared lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Name of the line at `index` (0-based, insertion order).
    pub fn line_name(&self, index: usize) -> Result<&str, NetworkError> {
        self.line_at(index).map(Line::name)
    }

    /// Declared station names of the line at `index`, as an owned copy so
    /// callers cannot mutate the network's record.
    pub fn line_station_names(&self, index: usize) -> Result<Vec<String>, NetworkError> {
        self.line_at(index).map(|line| line.station_names().to_vec())
    }

    /// Whether a line with exactly this name has been declared.
    pub fn exist_line(&self, line_name: &str) -> bool {
        self.lines.iter().any(|l| l.name() == line_name)
    }

    /// Look up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Cheapest routes from `from` to `to` under the given cost schedule.
    ///
    /// See [`planner::shortest_paths`] for the search semantics. Returns
    /// an empty vector when `from` is unknown or `to` is unreachable.
    pub fn shortest_paths(&self, from: &str, to: &str, costs: &SearchCosts) -> Vec<Path> {
        planner::shortest_paths(self, from, to, costs)
    }

    fn line_at(&self, index: usize) -> Result<&Line, NetworkError> {
        self.lines.get(index).ok_or(NetworkError::LineIndexOutOfRange {
            index,
            count: self.lines.len(),
        })
    }

    /// Register `station_names` in order under `line_name`, linking each
    /// to its predecessor. `previous` seeds the chain for continuations.
    fn register_stations(
        &mut self,
        line_name: &str,
        station_names: &[String],
        mut previous: Option<String>,
    ) {
        for name in station_names {
            self.stations
                .entry(name.clone())
                .or_insert_with(|| Station::new(name.clone()))
                .add_line(line_name);

            if let Some(prev) = &previous {
                self.link_neighbors(prev, name);
            }
            previous = Some(name.clone());
        }
    }

    /// Record the symmetric neighbor relation between two known stations.
    fn link_neighbors(&mut self, a: &str, b: &str) {
        if let Some(station) = self.stations.get_mut(a) {
            station.add_neighbor(b);
        }
        if let Some(station) = self.stations.get_mut(b) {
            station.add_neighbor(a);
        }
    }
}
