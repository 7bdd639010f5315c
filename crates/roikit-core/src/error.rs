//! Error types for roikit-core
//!
//! Provides a unified error type for the bounds, mask and iterator
//! primitives. Each variant captures enough context for diagnostics without
//! exposing internal implementation details.

use thiserror::Error;

/// roikit-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cursor accessor or advance was called after the iterator finished
    #[error("iteration past end")]
    IterationPastEnd,

    /// Mask length does not match its bounding rectangle
    #[error("mask size mismatch: bounds hold {expected} cells, mask has {actual}")]
    MaskSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for roikit-core operations
pub type Result<T> = std::result::Result<T, Error>;
