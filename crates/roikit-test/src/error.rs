//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture raster did not match its declared shape
    #[error("fixture '{name}' has {actual} cells, expected {expected}")]
    FixtureShape {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Core library error while building a fixture
    #[error("core error: {0}")]
    Core(#[from] roikit_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
