//! Statistics configuration

use roikit_core::IntegerBounds5D;
use roikit_region::RoiDimension;

use crate::error::{StatsError, StatsResult};

/// Physical size of one pixel along X, Y and Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSize {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for PixelSize {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
}

impl PixelSize {
    /// Create pixel sizes.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidPixelSize`] unless every size is
    /// positive and finite.
    pub fn new(x: f64, y: f64, z: f64) -> StatsResult<Self> {
        if [x, y, z].iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(StatsError::InvalidPixelSize(format!(
                "sizes must be positive and finite: x={}, y={}, z={}",
                x, y, z
            )));
        }
        Ok(Self { x, y, z })
    }

    /// Physical measure of one pixel: area for planar regions, volume for
    /// volumetric ones.
    pub fn unit(&self, dimension: RoiDimension) -> f64 {
        match dimension {
            RoiDimension::Planar => self.x * self.y,
            RoiDimension::Volumetric => self.x * self.y * self.z,
        }
    }
}

/// Options for a statistics pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsOptions {
    /// Physical pixel sizes used for the area / volume
    pub pixel_size: PixelSize,
    /// Count partially covered boundary pixels
    pub inclusive: bool,
    /// Restrict the pass to this part of the image
    pub sub_region: Option<IntegerBounds5D>,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            pixel_size: PixelSize::default(),
            inclusive: true,
            sub_region: None,
        }
    }
}

impl StatsOptions {
    pub fn with_pixel_size(mut self, pixel_size: PixelSize) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    pub fn with_inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    pub fn with_sub_region(mut self, sub_region: IntegerBounds5D) -> Self {
        self.sub_region = Some(sub_region);
        self
    }
}
