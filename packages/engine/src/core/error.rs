//! Engine errors.
//!
//! Only construction/resize and coordinate-taking commands can fail.
//! Everything else on a valid universe is total.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Zero width/height, or a cell count that does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside `[0, height) x [0, width)`. The grid is untouched.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds { row: u32, col: u32, width: u32, height: u32 },
}

/// Failure to build a universe from a JSON config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] GridError),
}
