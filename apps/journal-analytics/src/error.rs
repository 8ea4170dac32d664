//! Error types for loading trade snapshots.
//!
//! The calculators themselves are total: they degrade to zeroed results on
//! empty or degenerate input and never return an error. Errors only arise at
//! the boundary, when a snapshot is read and decoded.

use thiserror::Error;

/// Errors raised while obtaining a trade snapshot.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The snapshot document was not a JSON array.
    #[error("Trade snapshot must be a JSON array, found {found}")]
    NotAnArray {
        /// JSON type found at the top level.
        found: &'static str,
    },

    /// A record could not be decoded as a trade.
    #[error("Malformed trade record at index {index}: {source}")]
    InvalidRecord {
        /// Position of the record in the snapshot array.
        index: usize,
        /// The underlying decode error.
        source: serde_json::Error,
    },

    /// Failed to read the snapshot file.
    #[error("Failed to read trade file '{path}': {source}")]
    Read {
        /// Path to the snapshot file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The snapshot was not valid JSON.
    #[error("Failed to parse trade JSON: {0}")]
    Json(#[from] serde_json::Error),
}
