//! Pixel sources
//!
//! A [`PixelSource`] answers sample lookups by 5D position and reports the
//! extent it covers. [`ImageStack`] is the dense in-memory implementation.

use roikit_core::IntegerBounds5D;

use crate::error::{StatsError, StatsResult};

/// Sample lookup over X, Y, Z, T, C
pub trait PixelSource {
    /// The positions this source can answer, all axes finite
    fn bounds_5d(&self) -> IntegerBounds5D;

    /// Raw sample value at a position.
    ///
    /// # Errors
    ///
    /// Implementations return [`StatsError::SampleOutOfRange`] for a
    /// position outside their data.
    fn sample(&self, x: i32, y: i32, z: i32, t: i32, c: i32) -> StatsResult<f64>;
}

/// A dense 5D image of `f64` samples.
///
/// # Storage layout
///
/// X varies fastest, then Y, Z, T and C.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStack {
    /// Sizes in `[x, y, z, t, c]` order
    dims: [usize; 5],
    data: Vec<f64>,
}

impl ImageStack {
    /// Create a zero-filled image
    pub fn new(dims: [usize; 5]) -> Self {
        Self {
            dims,
            data: vec![0.0; dims.iter().product()],
        }
    }

    /// Create an image from existing samples.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::DataSizeMismatch`] if `data` does not hold
    /// exactly one sample per position.
    pub fn from_data(dims: [usize; 5], data: Vec<f64>) -> StatsResult<Self> {
        let expected: usize = dims.iter().product();
        if data.len() != expected {
            return Err(StatsError::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    pub fn dims(&self) -> [usize; 5] {
        self.dims
    }

    /// Set one sample.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::SampleOutOfRange`] outside the image.
    pub fn set(&mut self, x: i32, y: i32, z: i32, t: i32, c: i32, value: f64) -> StatsResult<()> {
        let index = self
            .index(x, y, z, t, c)
            .ok_or(StatsError::SampleOutOfRange { x, y, z, t, c })?;
        self.data[index] = value;
        Ok(())
    }

    fn index(&self, x: i32, y: i32, z: i32, t: i32, c: i32) -> Option<usize> {
        let coords = [x, y, z, t, c];
        let mut index = 0usize;
        let mut stride = 1usize;
        for (&v, &dim) in coords.iter().zip(&self.dims) {
            let v = usize::try_from(v).ok().filter(|&v| v < dim)?;
            index += v * stride;
            stride *= dim;
        }
        Some(index)
    }
}

impl PixelSource for ImageStack {
    fn bounds_5d(&self) -> IntegerBounds5D {
        let [sx, sy, sz, st, sc] = self.dims.map(|d| i32::try_from(d).unwrap_or(i32::MAX));
        IntegerBounds5D::new([0; 5], [sx, sy, sz, st, sc])
    }

    fn sample(&self, x: i32, y: i32, z: i32, t: i32, c: i32) -> StatsResult<f64> {
        self.index(x, y, z, t, c)
            .map(|i| self.data[i])
            .ok_or(StatsError::SampleOutOfRange { x, y, z, t, c })
    }
}
