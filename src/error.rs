//! Error types for grid, pattern and universe operations.

use std::io;

use crate::schema::ConfigError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AntError>;

/// Errors reported by the simulation core.
///
/// Every operation that returns one of these leaves the simulation exactly as
/// it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum AntError {
    #[error("Grid size must be positive, got {size}")]
    InvalidDimension { size: i64 },
    #[error("Cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("Pattern of {rows}x{cols} cells does not fit the {size}x{size} grid")]
    PatternOutOfBounds {
        rows: usize,
        cols: usize,
        size: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed pattern: {0}")]
    MalformedPattern(String),
    #[error("Corrupt universe data: {0}")]
    CorruptUniverse(String),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
