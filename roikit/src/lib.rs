//! roikit - Region-of-interest point iteration for 5D images
//!
//! Regions of interest over X, Y, Z (depth), T (time) and C (channel) are
//! enumerated pixel by pixel, restartably and in a fixed `(t, z, c, y, x)`
//! order, including regions that do not bound Z, T or C. The point stream
//! feeds descriptors and single-pass intensity statistics.
//!
//! # Overview
//!
//! - Bounds, masks and the 2D mask cursor ([`roikit_core`])
//! - The region capability, shapes and the 5D iterator ([`region`])
//! - Streaming statistics ([`stats`])
//!
//! # Example
//!
//! ```
//! use roikit::region::{EllipseRoi, Region, SlicePosition};
//!
//! let roi = EllipseRoi::new(8.0, 8.0, 4.0, 3.0, SlicePosition::at(0, 0, 0)).unwrap();
//! let inclusive = roi.number_of_points(true);
//! let exclusive = roi.number_of_points(false);
//! assert!(exclusive <= inclusive);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use roikit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use roikit_region as region;
pub use roikit_stats as stats;
