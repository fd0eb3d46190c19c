//! Error types for u-tsp.
//!
//! Input errors and configuration errors are surfaced to the caller as
//! distinct variants. Degenerate fitness (zero-length tours) is not an
//! error; see [`crate::ga::fitness`].

use thiserror::Error;

/// Main error type for u-tsp operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Fewer than two cities were supplied.
    #[error("at least 2 cities are required, found {found}")]
    InsufficientCities { found: usize },

    /// A city has a non-finite or out-of-range coordinate.
    #[error("city {index} has an invalid coordinate (lat {lat}, lon {lon})")]
    InvalidCoordinate { index: usize, lat: f64, lon: f64 },

    /// The distance oracle returned a negative or non-finite value.
    #[error("distance from city {from} to city {to} is invalid: {value}")]
    InvalidDistance { from: usize, to: usize, value: f64 },

    /// A caller-supplied matrix violates the distance matrix invariants.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),

    /// The requested start city does not exist.
    #[error("start city {start} is out of range for {len} cities")]
    InvalidStart { start: usize, len: usize },

    /// Invalid solver configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for u-tsp operations.
pub type Result<T> = std::result::Result<T, TspError>;
