//! roikit Core - Basic data structures for region iteration
//!
//! This crate provides the value types every other roikit crate builds on:
//!
//! - [`IntegerBounds5D`] / [`Rect2D`] - Integer bounding regions, with
//!   infinite Z/T/C axes
//! - [`Point5D`] - One pixel position over X, Y, Z, T, C
//! - [`BooleanMask2D`] - Row-major membership raster of a 2D slice
//! - [`Mask2DIterator`] - Cursor over the set cells of a mask
//!
//! # Example
//!
//! ```
//! use roikit_core::{BooleanMask2D, Rect2D};
//!
//! let mask = BooleanMask2D::from_fn(Rect2D::new(0, 0, 4, 4), |x, y| x == y);
//! let points: Vec<(i32, i32)> = mask.iter().collect();
//! assert_eq!(points, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
//! ```

pub mod bounds;
pub mod error;
pub mod mask;
pub mod point;

pub use bounds::{Axis, IntegerBounds5D, Rect2D};
pub use error::{Error, Result};
pub use mask::{BooleanMask2D, Mask2DIterator};
pub use point::Point5D;
