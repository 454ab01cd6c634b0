//! Station nodes of the line network.

/// A uniquely named node in the station graph.
///
/// A station tracks which lines pass through it and which stations are one
/// hop away on any of those lines. Two lines declaring the same station
/// name share the single `Station` entry in the network's registry, which
/// is how interchanges arise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,

    /// Line names this station belongs to, in the order the lines were
    /// registered. Duplicates are legal: a circular line that revisits a
    /// station repeats the entry.
    lines: Vec<String>,

    /// Names of directly adjacent stations, in first-linked order.
    /// Kept as a `Vec` so traversal order is deterministic.
    neighbors: Vec<String>,
}

impl Station {
    /// Create a station with no line memberships and no neighbors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            neighbors: Vec::new(),
        }
    }

    /// The station's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line memberships in registration order, duplicates included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Adjacent station names in first-linked order.
    pub fn neighbors(&self) -> &[String] {
        &self.neighbors
    }

    /// Record membership of a line. No uniqueness check: registering the
    /// same line twice (a circular line closing on itself) repeats the
    /// entry, and membership comparisons treat the list as a set.
    pub fn add_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Register a directly adjacent station.
    ///
    /// Callers are responsible for the symmetric call on the other
    /// station. Repeat links (two lines connecting the same pair) are
    /// collapsed to a single entry.
    pub fn add_neighbor(&mut self, name: &str) {
        if !self.neighbors.iter().any(|n| n == name) {
            self.neighbors.push(name.to_string());
        }
    }

    /// True iff the two stations share at least one line, i.e. moving
    /// between them does not require a line change.
    pub fn is_in_same_line_as(&self, other: &Station) -> bool {
        self.lines.iter().any(|line| other.lines.contains(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_station_is_isolated() {
        let station = Station::new("Alpha");
        assert_eq!(station.name(), "Alpha");
        assert!(station.lines().is_empty());
        assert!(station.neighbors().is_empty());
    }

    #[test]
    fn add_line_keeps_duplicates() {
        let mut station = Station::new("Loop");
        station.add_line("Circle");
        station.add_line("Circle");
        assert_eq!(station.lines(), ["Circle", "Circle"]);
    }

    #[test]
    fn add_neighbor_deduplicates() {
        let mut station = Station::new("Hub");
        station.add_neighbor("East");
        station.add_neighbor("West");
        station.add_neighbor("East");
        assert_eq!(station.neighbors(), ["East", "West"]);
    }

    #[test]
    fn neighbors_keep_first_linked_order() {
        let mut station = Station::new("Hub");
        station.add_neighbor("C");
        station.add_neighbor("A");
        station.add_neighbor("B");
        assert_eq!(station.neighbors(), ["C", "A", "B"]);
    }

    #[test]
    fn same_line_when_memberships_intersect() {
        let mut a = Station::new("A");
        a.add_line("Red");
        a.add_line("Blue");

        let mut b = Station::new("B");
        b.add_line("Blue");

        let mut c = Station::new("C");
        c.add_line("Green");

        assert!(a.is_in_same_line_as(&b));
        assert!(b.is_in_same_line_as(&a));
        assert!(!a.is_in_same_line_as(&c));
    }

    #[test]
    fn same_line_ignores_duplicate_entries() {
        let mut a = Station::new("A");
        a.add_line("Red");
        a.add_line("Red");

        let mut b = Station::new("B");
        b.add_line("Red");

        assert!(a.is_in_same_line_as(&b));
    }

    #[test]
    fn no_shared_line_for_empty_membership() {
        let a = Station::new("A");
        let mut b = Station::new("B");
        b.add_line("Red");
        assert!(!a.is_in_same_line_as(&b));
        assert!(!b.is_in_same_line_as(&a));
    }
}
