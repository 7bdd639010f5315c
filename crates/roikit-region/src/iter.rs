//! 5D point iteration over a region
//!
//! [`RegionIterator`] stitches one [`Mask2DIterator`] per visited (Z, T, C)
//! slice into a single stream. Slices advance C fastest, then Z, then T, and
//! each mask is walked Y then X, so points come out in `(t, z, c, y, x)`
//! lexicographic order.
//!
//! Infinite Z, T or C axes are not iterated to infinity: each one collapses
//! to a single synthetic slice at index -1 before iteration starts, so the
//! region is visited exactly once on that axis.

use log::trace;
use roikit_core::{
    Axis, BooleanMask2D, Error, IntegerBounds5D, Mask2DIterator, Point5D, Rect2D, Result,
};

use crate::region::Region;

/// Restartable cursor over every pixel a region contains.
///
/// The region is borrowed for the iterator's lifetime and asked for a fresh
/// mask each time the cursor enters a new slice.
pub struct RegionIterator<'r, R: Region + ?Sized> {
    region: &'r R,
    inclusive: bool,
    /// Iteration bounds, with infinite slice axes already collapsed
    bounds: IntegerBounds5D,
    z: i32,
    t: i32,
    c: i32,
    slice_iter: Mask2DIterator<'static>,
    done: bool,
}

impl<'r, R: Region + ?Sized> RegionIterator<'r, R> {
    /// Iterate the whole region
    pub fn new(region: &'r R, inclusive: bool) -> Self {
        Self::with_sub_region(region, None, inclusive)
    }

    /// Iterate the part of the region inside `sub_region`, if given
    pub fn with_sub_region(
        region: &'r R,
        sub_region: Option<IntegerBounds5D>,
        inclusive: bool,
    ) -> Self {
        let mut bounds = region.bounds_5d();
        if let Some(sub) = sub_region {
            bounds = bounds.intersect(&sub);
        }
        let bounds = bounds.collapse_infinite(&Axis::SLICE);
        trace!(
            "region iterator over {:?} (inclusive={}, empty={})",
            bounds,
            inclusive,
            bounds.is_empty()
        );

        let mut it = Self {
            region,
            inclusive,
            bounds,
            z: 0,
            t: 0,
            c: 0,
            slice_iter: Mask2DIterator::from_owned(BooleanMask2D::empty()),
            done: true,
        };
        it.reset();
        it
    }

    /// Effective iteration bounds
    pub fn bounds(&self) -> IntegerBounds5D {
        self.bounds
    }

    /// Restart from the first slice.
    ///
    /// Draining again yields the same sequence, provided the region did not
    /// change in between.
    pub fn reset(&mut self) {
        self.done = self.bounds.is_empty();
        if self.done {
            return;
        }
        self.z = self.bounds.origin(Axis::Z);
        self.t = self.bounds.origin(Axis::T);
        self.c = self.bounds.origin(Axis::C);
        self.slice_iter = self.build_slice_iter();
        self.skip_exhausted_slices();
    }

    /// Move to the next contained pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IterationPastEnd`] if the iterator is already done.
    pub fn advance(&mut self) -> Result<()> {
        if self.done {
            return Err(Error::IterationPastEnd);
        }
        self.slice_iter.advance()?;
        self.skip_exhausted_slices();
        Ok(())
    }

    /// Check whether every pixel has been visited
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Current x
    pub fn x(&self) -> Result<i32> {
        self.check_not_done()?;
        self.slice_iter.x()
    }

    /// Current y
    pub fn y(&self) -> Result<i32> {
        self.check_not_done()?;
        self.slice_iter.y()
    }

    /// Current z (-1 on a collapsed infinite axis)
    pub fn z(&self) -> Result<i32> {
        self.check_not_done()?;
        Ok(self.z)
    }

    /// Current t (-1 on a collapsed infinite axis)
    pub fn t(&self) -> Result<i32> {
        self.check_not_done()?;
        Ok(self.t)
    }

    /// Current c (-1 on a collapsed infinite axis)
    pub fn c(&self) -> Result<i32> {
        self.check_not_done()?;
        Ok(self.c)
    }

    /// Current position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IterationPastEnd`] if the iterator is done.
    pub fn get(&self) -> Result<Point5D> {
        self.check_not_done()?;
        let (x, y) = self.slice_iter.get()?;
        Ok(Point5D::new(x, y, self.z, self.t, self.c))
    }

    #[inline]
    fn check_not_done(&self) -> Result<()> {
        if self.done {
            Err(Error::IterationPastEnd)
        } else {
            Ok(())
        }
    }

    fn build_slice_iter(&self) -> Mask2DIterator<'static> {
        let mask = self
            .region
            .boolean_mask_2d(self.z, self.t, self.c, self.inclusive);
        Mask2DIterator::from_owned(self.clip_to_bounds(mask))
    }

    /// Restrict a slice mask to the finite X and Y extents of the bounds.
    fn clip_to_bounds(&self, mask: BooleanMask2D) -> BooleanMask2D {
        let own = mask.bounds();
        if own.is_empty() {
            return mask;
        }
        let (x0, x1) = if self.bounds.is_infinite(Axis::X) {
            (own.x, own.right())
        } else {
            (self.bounds.origin(Axis::X), self.bounds.end(Axis::X))
        };
        let (y0, y1) = if self.bounds.is_infinite(Axis::Y) {
            (own.y, own.bottom())
        } else {
            (self.bounds.origin(Axis::Y), self.bounds.end(Axis::Y))
        };
        let clip = Rect2D::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0));
        match own.intersect(&clip) {
            Some(r) if r == own => mask,
            Some(r) => BooleanMask2D::from_fn(r, |x, y| mask.contains(x, y)),
            None => BooleanMask2D::empty(),
        }
    }

    /// Step through slices (C, then Z, then T) until one holds a pixel or
    /// the bounds are exhausted.
    fn skip_exhausted_slices(&mut self) {
        while self.slice_iter.is_done() && !self.done {
            self.c += 1;
            if self.c > self.bounds.max(Axis::C) {
                self.c = self.bounds.origin(Axis::C);
                self.z += 1;
                if self.z > self.bounds.max(Axis::Z) {
                    self.z = self.bounds.origin(Axis::Z);
                    self.t += 1;
                    if self.t > self.bounds.max(Axis::T) {
                        self.done = true;
                        break;
                    }
                }
            }
            trace!("entering slice z={} t={} c={}", self.z, self.t, self.c);
            self.slice_iter = self.build_slice_iter();
        }
    }
}

impl<R: Region + ?Sized> Iterator for RegionIterator<'_, R> {
    type Item = Point5D;

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.get().ok()?;
        self.advance().ok()?;
        Some(point)
    }
}
