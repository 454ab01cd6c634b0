//! Domain types for the metro line network.
//!
//! These are the core model types the network and planner are built from.
//! Cross-references between stations are always expressed as names looked
//! up in the owning network's registry, never as shared references, so the
//! types here are plain owned data.

mod error;
mod line;
mod path;
mod station;

pub use error::NetworkError;
pub use line::Line;
pub use path::Path;
pub use station::Station;
