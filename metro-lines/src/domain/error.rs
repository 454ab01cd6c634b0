//! Domain error types.
//!
//! Ordinary "not found" conditions are not errors in this crate: an
//! unknown origin station yields an empty result, appending to an unknown
//! line is a tolerated no-op, and blank parser input yields `None`. Only
//! genuine caller mistakes surface here.

/// Errors for invalid use of the network's lookup API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// An indexed line lookup was past the end of the line list.
    #[error("line index {index} out of range (network has {count} lines)")]
    LineIndexOutOfRange { index: usize, count: usize },
}
