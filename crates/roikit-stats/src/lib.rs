//! roikit-stats - Region statistics over 5D images
//!
//! This crate computes pixel count, intensity minimum / maximum / mean /
//! standard deviation and the physical area (or volume) of a region in a
//! single streaming pass over its points.
//!
//! # Example
//!
//! ```
//! use roikit_stats::{ImageStack, PixelSize, StatsOptions, compute_infos};
//! use roikit_region::{RectangleRoi, SlicePosition};
//! use roikit_core::Rect2D;
//!
//! let image = ImageStack::from_data([3, 3, 1, 1, 1], (1..=9).map(f64::from).collect()).unwrap();
//! let roi = RectangleRoi::new(Rect2D::new(0, 0, 3, 3), SlicePosition::all());
//! let options = StatsOptions::default().with_pixel_size(PixelSize::new(2.0, 2.0, 1.0).unwrap());
//!
//! let infos = compute_infos(&roi, &image, &options).unwrap();
//! assert_eq!(infos.num_pixels, 9);
//! assert_eq!(infos.mean_intensity, 5.0);
//! assert_eq!(infos.area, 36.0);
//! ```

pub mod aggregate;
pub mod error;
pub mod infos;
pub mod options;
pub mod source;

pub use error::{StatsError, StatsResult};

pub use aggregate::{compute_infos, compute_infos_per_channel, try_compute_infos};
pub use infos::{RoiInfos, StatisticsAggregator};
pub use options::{PixelSize, StatsOptions};
pub use source::{ImageStack, PixelSource};
