//! roikit-region - Regions of interest and their point enumeration
//!
//! This crate provides:
//!
//! - **The region capability** - [`Region`]: a 5D bounding box plus a 2D
//!   mask per (Z, T, C) slice
//! - **Shapes** - rectangles, ellipses, raw masks and volumetric mask stacks
//! - **5D iteration** - [`RegionIterator`], a restartable cursor over every
//!   contained pixel in `(t, z, c, y, x)` order
//! - **Descriptors** - point count, mass center, tight bounds
//!
//! # Examples
//!
//! ```
//! use roikit_region::{Region, RectangleRoi, SlicePosition};
//! use roikit_region::roikit_core::{Point5D, Rect2D};
//!
//! // A 2x2 square on every Z / T / C slice
//! let roi = RectangleRoi::new(Rect2D::new(0, 0, 2, 2), SlicePosition::all());
//!
//! // Infinite axes are visited once, as the synthetic slice -1
//! let points: Vec<Point5D> = roi.iter_points(true).collect();
//! assert_eq!(points.len(), 4);
//! assert_eq!(points[0], Point5D::new(0, 0, -1, -1, -1));
//! ```

pub mod descriptors;
pub mod error;
pub mod iter;
pub mod region;
pub mod shapes;

// Re-export core types
pub use roikit_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use descriptors::{MassCenter, count_points, mass_center, point_set_bounds};
pub use iter::RegionIterator;
pub use region::{Region, RoiDimension};
pub use shapes::{EllipseRoi, MaskRoi, MaskStackRoi, RectangleRoi, SlicePosition};
