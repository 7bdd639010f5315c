//! Point-based region descriptors
//!
//! Measures that only need the point stream, not pixel values.

use roikit_core::{Axis, IntegerBounds5D};

use crate::iter::RegionIterator;
use crate::region::Region;

/// Mean position of a region's pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassCenter {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub t: f64,
    pub c: f64,
}

/// Count the pixels a region contains, optionally inside `sub_region`
pub fn count_points<R: Region + ?Sized>(
    region: &R,
    sub_region: Option<IntegerBounds5D>,
    inclusive: bool,
) -> u64 {
    RegionIterator::with_sub_region(region, sub_region, inclusive).count() as u64
}

/// Mean position of the contained pixels.
///
/// Returns `None` for a region that contains no pixel.
pub fn mass_center<R: Region + ?Sized>(
    region: &R,
    sub_region: Option<IntegerBounds5D>,
    inclusive: bool,
) -> Option<MassCenter> {
    let mut sum = [0.0f64; 5];
    let mut count = 0u64;
    for p in RegionIterator::with_sub_region(region, sub_region, inclusive) {
        sum[0] += p.x as f64;
        sum[1] += p.y as f64;
        sum[2] += p.z as f64;
        sum[3] += p.t as f64;
        sum[4] += p.c as f64;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let n = count as f64;
    Some(MassCenter {
        x: sum[0] / n,
        y: sum[1] / n,
        z: sum[2] / n,
        t: sum[3] / n,
        c: sum[4] / n,
    })
}

/// Tight finite bounds of the enumerated pixels.
///
/// Collapsed infinite axes report the synthetic slice -1. Returns `None`
/// when the region contains no pixel.
pub fn point_set_bounds<R: Region + ?Sized>(region: &R, inclusive: bool) -> Option<IntegerBounds5D> {
    let mut lo = [i32::MAX; 5];
    let mut hi = [i32::MIN; 5];
    for p in RegionIterator::new(region, inclusive) {
        for (i, v) in [p.x, p.y, p.z, p.t, p.c].into_iter().enumerate() {
            lo[i] = lo[i].min(v);
            hi[i] = hi[i].max(v);
        }
    }
    if lo[0] > hi[0] {
        return None;
    }
    let bounds = Axis::ALL
        .iter()
        .enumerate()
        .fold(IntegerBounds5D::default(), |b, (i, &axis)| {
            b.with_axis(axis, lo[i], hi[i] - lo[i] + 1)
        });
    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{MaskRoi, RectangleRoi, SlicePosition};
    use roikit_core::{BooleanMask2D, Rect2D};

    #[test]
    fn test_count_points() {
        let roi = RectangleRoi::new(Rect2D::new(0, 0, 3, 4), SlicePosition::at(0, 0, 0));
        assert_eq!(count_points(&roi, None, true), 12);
        let sub = IntegerBounds5D::infinite().with_axis(Axis::X, 0, 1);
        assert_eq!(count_points(&roi, Some(sub), true), 4);
    }

    #[test]
    fn test_mass_center() {
        let roi = RectangleRoi::new(Rect2D::new(2, 4, 3, 3), SlicePosition::at(1, 2, 0));
        let center = mass_center(&roi, None, true).unwrap();
        assert_eq!(center.x, 3.0);
        assert_eq!(center.y, 5.0);
        assert_eq!((center.z, center.t, center.c), (1.0, 2.0, 0.0));

        let blank = MaskRoi::new(BooleanMask2D::empty(), SlicePosition::all());
        assert!(mass_center(&blank, None, true).is_none());
    }

    #[test]
    fn test_point_set_bounds() {
        let mask = BooleanMask2D::from_fn(Rect2D::new(0, 0, 10, 10), |x, y| x == 3 && y > 6);
        let roi = MaskRoi::new(mask, SlicePosition::all().with_z(5));
        let b = point_set_bounds(&roi, true).unwrap();
        assert_eq!(b.to_rect_2d(), Rect2D::new(3, 7, 1, 3));
        assert_eq!((b.origin(Axis::Z), b.size(Axis::Z)), (5, 1));
        assert_eq!((b.origin(Axis::T), b.size(Axis::T)), (-1, 1));
    }
}
