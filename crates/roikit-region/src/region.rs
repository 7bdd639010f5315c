//! The region capability
//!
//! Anything that can rasterize itself into a [`BooleanMask2D`] for a given
//! (Z, T, C) slice and report its integer 5D bounds is a [`Region`]. Every
//! other operation (iteration, counting, statistics) is derived from those
//! two capabilities.

use roikit_core::{BooleanMask2D, IntegerBounds5D, Point5D};

use crate::iter::RegionIterator;

/// How a region's point count converts to a physical measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoiDimension {
    /// Area: pixel size X times pixel size Y
    #[default]
    Planar,
    /// Volume: additionally times pixel size Z
    Volumetric,
}

/// A geometric region of interest over X, Y, Z, T and C.
///
/// Implementations must keep the two required methods consistent: every set
/// cell of any slice mask lies inside [`Region::bounds_5d`]. Masks for slices
/// outside the region may be empty.
pub trait Region {
    /// The region's integer bounding box, with the axes it does not bound
    /// flagged infinite.
    fn bounds_5d(&self) -> IntegerBounds5D;

    /// Rasterize the region for slice `(z, t, c)`.
    ///
    /// With `inclusive` set, pixels partially overlapping the shape count as
    /// contained; otherwise only pixels the shape fully covers do.
    fn boolean_mask_2d(&self, z: i32, t: i32, c: i32, inclusive: bool) -> BooleanMask2D;

    /// Whether physical measures of this region are areas or volumes
    fn dimension(&self) -> RoiDimension {
        RoiDimension::Planar
    }

    /// Iterate every contained pixel
    fn iter_points(&self, inclusive: bool) -> RegionIterator<'_, Self>
    where
        Self: Sized,
    {
        RegionIterator::new(self, inclusive)
    }

    /// Iterate every contained pixel inside `sub_region`
    fn iter_points_within(
        &self,
        sub_region: IntegerBounds5D,
        inclusive: bool,
    ) -> RegionIterator<'_, Self>
    where
        Self: Sized,
    {
        RegionIterator::with_sub_region(self, Some(sub_region), inclusive)
    }

    /// Number of pixels the iterator enumerates
    fn number_of_points(&self, inclusive: bool) -> u64 {
        RegionIterator::new(self, inclusive).count() as u64
    }

    /// Check whether `p` is contained, by rasterizing its slice
    fn contains_point(&self, p: &Point5D, inclusive: bool) -> bool {
        self.bounds_5d().contains(p)
            && self
                .boolean_mask_2d(p.z, p.t, p.c, inclusive)
                .contains(p.x, p.y)
    }
}
