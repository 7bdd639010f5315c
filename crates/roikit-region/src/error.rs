//! Error types for roikit-region

use thiserror::Error;

/// Errors that can occur while building regions
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] roikit_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A mask stack needs at least one slice
    #[error("empty mask stack: no slices to build a region from")]
    EmptyStack,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
