//! Error types for roikit-stats

use thiserror::Error;

/// Errors that can occur during a statistics pass
#[derive(Debug, Error)]
pub enum StatsError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] roikit_core::Error),

    /// A sample was requested outside the pixel source
    #[error("sample out of range: ({x}, {y}, {z}, {t}, {c})")]
    SampleOutOfRange {
        x: i32,
        y: i32,
        z: i32,
        t: i32,
        c: i32,
    },

    /// Pixel buffer length does not match the declared dimensions
    #[error("data size mismatch: expected {expected} samples, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },

    /// Physical pixel sizes must be positive and finite
    #[error("invalid pixel size: {0}")]
    InvalidPixelSize(String),
}

/// Result type for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;
