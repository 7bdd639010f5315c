//! BooleanMask2D - Rasterized membership of one 2D slice
//!
//! A mask is a rectangle plus a row-major boolean raster telling which
//! pixels of the rectangle belong to a region. Regions build one fresh mask
//! per requested (Z, T, C) slice.
//!
//! # Storage layout
//!
//! Cell `(col, row)` lives at index `row * width + col`. Coordinates passed
//! to the query methods are absolute; the rectangle origin is subtracted
//! internally.

mod iter;

pub use iter::Mask2DIterator;

use crate::bounds::Rect2D;
use crate::error::{Error, Result};

/// A rectangular boolean raster
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BooleanMask2D {
    bounds: Rect2D,
    mask: Vec<bool>,
}

impl BooleanMask2D {
    /// Create a mask from its bounding rectangle and row-major raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MaskSizeMismatch`] if `mask.len()` differs from the
    /// number of cells of `bounds`.
    pub fn new(bounds: Rect2D, mask: Vec<bool>) -> Result<Self> {
        let expected = bounds.area();
        if mask.len() != expected {
            return Err(Error::MaskSizeMismatch {
                expected,
                actual: mask.len(),
            });
        }
        Ok(Self { bounds, mask })
    }

    /// A mask over an empty rectangle
    pub fn empty() -> Self {
        Self::default()
    }

    /// A mask with every cell of `bounds` set
    pub fn full(bounds: Rect2D) -> Self {
        Self {
            bounds,
            mask: vec![true; bounds.area()],
        }
    }

    /// Build a mask by evaluating `f(x, y)` at every absolute position of
    /// `bounds`, in row-major order.
    pub fn from_fn<F>(bounds: Rect2D, mut f: F) -> Self
    where
        F: FnMut(i32, i32) -> bool,
    {
        let mut mask = Vec::with_capacity(bounds.area());
        if !bounds.is_empty() {
            for y in bounds.y..bounds.bottom() {
                for x in bounds.x..bounds.right() {
                    mask.push(f(x, y));
                }
            }
        }
        Self { bounds, mask }
    }

    /// Bounding rectangle
    #[inline]
    pub fn bounds(&self) -> Rect2D {
        self.bounds
    }

    /// Row-major raster
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.mask
    }

    /// Check if no cell is set
    pub fn is_empty(&self) -> bool {
        !self.mask.iter().any(|&v| v)
    }

    /// Check if the absolute position `(x, y)` is set
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if !self.bounds.contains_point(x, y) {
            return false;
        }
        let col = (x - self.bounds.x) as usize;
        let row = (y - self.bounds.y) as usize;
        self.mask[row * self.bounds.width as usize + col]
    }

    /// Number of set cells
    pub fn number_of_points(&self) -> usize {
        self.mask.iter().filter(|&&v| v).count()
    }

    /// Absolute positions of the set cells, in row-major order
    pub fn points(&self) -> Vec<(i32, i32)> {
        self.iter().collect()
    }

    /// Cursor over the set cells
    pub fn iter(&self) -> Mask2DIterator<'_> {
        Mask2DIterator::new(self)
    }

    /// Cells set in either mask, over the union of both rectangles
    pub fn union(&self, other: &BooleanMask2D) -> BooleanMask2D {
        let bounds = self.bounds.union(&other.bounds);
        Self::from_fn(bounds, |x, y| self.contains(x, y) || other.contains(x, y))
    }

    /// Cells set in both masks, over the intersection of both rectangles
    pub fn intersection(&self, other: &BooleanMask2D) -> BooleanMask2D {
        match self.bounds.intersect(&other.bounds) {
            Some(bounds) => {
                Self::from_fn(bounds, |x, y| self.contains(x, y) && other.contains(x, y))
            }
            None => Self::empty(),
        }
    }

    /// Cells set in `self` but not in `other`, over `self`'s rectangle
    pub fn subtract(&self, other: &BooleanMask2D) -> BooleanMask2D {
        Self::from_fn(self.bounds, |x, y| {
            self.contains(x, y) && !other.contains(x, y)
        })
    }

    /// The same set cells over the tightest enclosing rectangle.
    ///
    /// Returns [`BooleanMask2D::empty`] when no cell is set.
    pub fn optimized(&self) -> BooleanMask2D {
        let mut tight: Option<Rect2D> = None;
        for (x, y) in self.iter() {
            let cell = Rect2D::new(x, y, 1, 1);
            tight = Some(match tight {
                Some(r) => r.union(&cell),
                None => cell,
            });
        }
        match tight {
            Some(bounds) => Self::from_fn(bounds, |x, y| self.contains(x, y)),
            None => Self::empty(),
        }
    }
}
