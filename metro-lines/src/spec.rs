//! Parser for textual line-network specifications.
//!
//! The input format is one declaration per text line:
//!
//! ```text
//! Spec        := Line ("\n" Line)*
//! Line        := Name [":" StationList]
//! StationList := Station ("," Station)*
//! ```
//!
//! Whitespace around names and stations is insignificant and stripped.
//! Re-declaring a line name continues that line: its new stations are
//! appended and chained onto where the line left off.

use tracing::debug;

use crate::network::LineNetwork;

/// Parse a specification string into a compiled [`LineNetwork`].
///
/// Returns `None` for empty or all-whitespace input (including input that
/// is only blank lines). `None` is the designated empty marker; callers
/// must check it before treating the result as a network, and it is
/// distinct from a successfully parsed network that happens to hold zero
/// lines (which this parser never produces).
pub fn parse_lines_spec(text: &str) -> Option<LineNetwork> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut network = LineNetwork::new();

    for raw in trimmed.split('\n') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let (name, stations) = parse_declaration(raw);
        if network.exist_line(&name) {
            network.add_stations_to_line(stations, &name);
        } else {
            network.add_line(&name, stations);
        }
    }

    debug!(lines = network.line_count(), "parsed line specification");
    Some(network)
}

/// Split one declaration into its line name and station names.
///
/// Text before the first colon is the name; without a colon the whole
/// declaration is the name and the station list is empty. Station names
/// are comma-separated, trimmed, with empty pieces dropped.
fn parse_declaration(raw: &str) -> (String, Vec<String>) {
    match raw.split_once(':') {
        Some((name, rest)) => {
            let stations = rest
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            (name.trim().to_string(), stations)
        }
        None => (raw.to_string(), Vec::new()),
    }
}
