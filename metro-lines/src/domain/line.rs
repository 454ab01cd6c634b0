//! Named lines as declared in a specification.

/// A named, ordered sequence of station names.
///
/// The sequence is kept exactly as declared, duplicates included, so a
/// circular line may legitimately repeat its first station at the end.
/// Consecutive entries become neighbor pairs in the station graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    stations: Vec<String>,
}

impl Line {
    /// Create a line with its initially declared stations.
    pub fn new(name: impl Into<String>, stations: Vec<String>) -> Self {
        Self {
            name: name.into(),
            stations,
        }
    }

    /// The line's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared station names in order, duplicates included.
    pub fn station_names(&self) -> &[String] {
        &self.stations
    }

    /// Extend the declared sequence with a continuation's stations.
    pub fn append_stations(&mut self, names: &[String]) {
        self.stations.extend(names.iter().cloned());
    }
}
