//! Concrete region shapes
//!
//! Each shape owns its rasterization rule. Planar shapes sit on a
//! [`SlicePosition`]; an unset Z, T or C there means the shape applies to
//! every slice on that axis, which its bounds report as an infinite axis.

use roikit_core::{Axis, BooleanMask2D, IntegerBounds5D, Rect2D};

use crate::error::{RegionError, RegionResult};
use crate::region::{Region, RoiDimension};

/// Which Z / T / C slice a planar shape lives on (`None` = all of them)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlicePosition {
    pub z: Option<i32>,
    pub t: Option<i32>,
    pub c: Option<i32>,
}

impl SlicePosition {
    /// Every slice on every axis
    pub const fn all() -> Self {
        Self {
            z: None,
            t: None,
            c: None,
        }
    }

    /// One fixed slice
    pub const fn at(z: i32, t: i32, c: i32) -> Self {
        Self {
            z: Some(z),
            t: Some(t),
            c: Some(c),
        }
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = Some(z);
        self
    }

    pub fn with_t(mut self, t: i32) -> Self {
        self.t = Some(t);
        self
    }

    pub fn with_c(mut self, c: i32) -> Self {
        self.c = Some(c);
        self
    }

    /// Check whether the position covers slice `(z, t, c)`
    pub fn matches(&self, z: i32, t: i32, c: i32) -> bool {
        self.z.is_none_or(|v| v == z) && self.t.is_none_or(|v| v == t) && self.c.is_none_or(|v| v == c)
    }

    /// Bounds covering `rect` on the slices of this position
    pub fn bounds_for(&self, rect: Rect2D) -> IntegerBounds5D {
        [(Axis::Z, self.z), (Axis::T, self.t), (Axis::C, self.c)]
            .into_iter()
            .fold(IntegerBounds5D::from_rect_2d(rect), |b, (axis, pos)| match pos {
                Some(v) => b.with_axis(axis, v, 1),
                None => b,
            })
    }
}

/// An axis-aligned rectangle.
///
/// Integer rectangles cover whole pixels, so inclusive and exclusive masks
/// are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleRoi {
    rect: Rect2D,
    position: SlicePosition,
}

impl RectangleRoi {
    pub fn new(rect: Rect2D, position: SlicePosition) -> Self {
        Self { rect, position }
    }

    pub fn rect(&self) -> Rect2D {
        self.rect
    }
}

impl Region for RectangleRoi {
    fn bounds_5d(&self) -> IntegerBounds5D {
        self.position.bounds_for(self.rect)
    }

    fn boolean_mask_2d(&self, z: i32, t: i32, c: i32, _inclusive: bool) -> BooleanMask2D {
        if self.position.matches(z, t, c) {
            BooleanMask2D::full(self.rect)
        } else {
            BooleanMask2D::empty()
        }
    }
}

/// An axis-aligned ellipse in continuous pixel coordinates.
///
/// Pixel `(x, y)` is the unit square `[x, x+1] x [y, y+1]`. Exclusive masks
/// keep pixels whose square lies entirely inside the ellipse; inclusive masks
/// keep pixels whose square touches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseRoi {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    position: SlicePosition,
}

impl EllipseRoi {
    /// Create an ellipse centered on `(cx, cy)` with radii `rx`, `ry`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] unless both radii are
    /// positive and every value is finite.
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64, position: SlicePosition) -> RegionResult<Self> {
        if !(cx.is_finite() && cy.is_finite() && rx.is_finite() && ry.is_finite()) {
            return Err(RegionError::InvalidParameters(format!(
                "ellipse values must be finite: center=({}, {}), radii=({}, {})",
                cx, cy, rx, ry
            )));
        }
        if rx <= 0.0 || ry <= 0.0 {
            return Err(RegionError::InvalidParameters(format!(
                "ellipse radii must be positive: rx={}, ry={}",
                rx, ry
            )));
        }
        Ok(Self {
            cx,
            cy,
            rx,
            ry,
            position,
        })
    }

    #[inline]
    fn inside(&self, px: f64, py: f64) -> bool {
        let dx = (px - self.cx) / self.rx;
        let dy = (py - self.cy) / self.ry;
        dx * dx + dy * dy <= 1.0
    }

    fn pixel_contained(&self, x: i32, y: i32, inclusive: bool) -> bool {
        let (x0, y0) = (x as f64, y as f64);
        let (x1, y1) = (x0 + 1.0, y0 + 1.0);
        if inclusive {
            // closest point of the pixel square to the center
            self.inside(self.cx.clamp(x0, x1), self.cy.clamp(y0, y1))
        } else {
            self.inside(x0, y0) && self.inside(x1, y0) && self.inside(x0, y1) && self.inside(x1, y1)
        }
    }

    fn rect(&self) -> Rect2D {
        let x0 = (self.cx - self.rx).floor() as i32;
        let y0 = (self.cy - self.ry).floor() as i32;
        let x1 = (self.cx + self.rx).ceil() as i32;
        let y1 = (self.cy + self.ry).ceil() as i32;
        Rect2D::new(x0, y0, x1 - x0, y1 - y0)
    }
}

impl Region for EllipseRoi {
    fn bounds_5d(&self) -> IntegerBounds5D {
        self.position.bounds_for(self.rect())
    }

    fn boolean_mask_2d(&self, z: i32, t: i32, c: i32, inclusive: bool) -> BooleanMask2D {
        if !self.position.matches(z, t, c) {
            return BooleanMask2D::empty();
        }
        BooleanMask2D::from_fn(self.rect(), |x, y| self.pixel_contained(x, y, inclusive))
    }
}

/// A region given directly by a raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskRoi {
    mask: BooleanMask2D,
    position: SlicePosition,
}

impl MaskRoi {
    pub fn new(mask: BooleanMask2D, position: SlicePosition) -> Self {
        Self { mask, position }
    }

    pub fn mask(&self) -> &BooleanMask2D {
        &self.mask
    }
}

impl Region for MaskRoi {
    fn bounds_5d(&self) -> IntegerBounds5D {
        self.position.bounds_for(self.mask.bounds())
    }

    fn boolean_mask_2d(&self, z: i32, t: i32, c: i32, _inclusive: bool) -> BooleanMask2D {
        if self.position.matches(z, t, c) {
            self.mask.clone()
        } else {
            BooleanMask2D::empty()
        }
    }
}

/// A volumetric region: one mask per Z slice, starting at `z0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskStackRoi {
    z0: i32,
    slices: Vec<BooleanMask2D>,
    t: Option<i32>,
    c: Option<i32>,
}

impl MaskStackRoi {
    /// Create a stack whose first slice sits at depth `z0`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::EmptyStack`] if `slices` is empty, and
    /// [`RegionError::InvalidParameters`] if the last slice would lie past
    /// `i32::MAX`.
    pub fn new(z0: i32, slices: Vec<BooleanMask2D>) -> RegionResult<Self> {
        if slices.is_empty() {
            return Err(RegionError::EmptyStack);
        }
        let fits = i32::try_from(slices.len())
            .is_ok_and(|depth| z0.checked_add(depth).is_some());
        if !fits {
            return Err(RegionError::InvalidParameters(format!(
                "{} slices starting at z={} overflow the z axis",
                slices.len(),
                z0
            )));
        }
        Ok(Self {
            z0,
            slices,
            t: None,
            c: None,
        })
    }

    /// Restrict the stack to one time point
    pub fn with_t(mut self, t: i32) -> Self {
        self.t = Some(t);
        self
    }

    /// Restrict the stack to one channel
    pub fn with_c(mut self, c: i32) -> Self {
        self.c = Some(c);
        self
    }

    pub fn depth(&self) -> usize {
        self.slices.len()
    }

    fn slice(&self, z: i32) -> Option<&BooleanMask2D> {
        let index = usize::try_from(z.checked_sub(self.z0)?).ok()?;
        self.slices.get(index)
    }
}

impl Region for MaskStackRoi {
    fn bounds_5d(&self) -> IntegerBounds5D {
        let rect = self
            .slices
            .iter()
            .fold(Rect2D::default(), |acc, m| acc.union(&m.bounds()));
        SlicePosition {
            z: None,
            t: self.t,
            c: self.c,
        }
        .bounds_for(rect)
        .with_axis(
            Axis::Z,
            self.z0,
            i32::try_from(self.slices.len()).unwrap_or(i32::MAX),
        )
    }

    fn boolean_mask_2d(&self, z: i32, t: i32, c: i32, _inclusive: bool) -> BooleanMask2D {
        let on_slice = self.t.is_none_or(|v| v == t) && self.c.is_none_or(|v| v == c);
        match self.slice(z) {
            Some(mask) if on_slice => mask.clone(),
            _ => BooleanMask2D::empty(),
        }
    }

    fn dimension(&self) -> RoiDimension {
        RoiDimension::Volumetric
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roikit_core::Point5D;

    #[test]
    fn test_slice_position_bounds() {
        let rect = Rect2D::new(0, 0, 4, 3);
        let all = SlicePosition::all().bounds_for(rect);
        assert!(all.is_infinite(Axis::Z) && all.is_infinite(Axis::T) && all.is_infinite(Axis::C));

        let fixed = SlicePosition::all().with_z(2).bounds_for(rect);
        assert_eq!((fixed.origin(Axis::Z), fixed.size(Axis::Z)), (2, 1));
        assert!(fixed.is_infinite(Axis::T));
        assert!(SlicePosition::all().with_z(2).matches(2, 7, 9));
        assert!(!SlicePosition::at(2, 0, 0).matches(2, 1, 0));
    }

    #[test]
    fn test_rectangle_mask() {
        let roi = RectangleRoi::new(Rect2D::new(1, 2, 3, 4), SlicePosition::all().with_c(1));
        assert_eq!(roi.boolean_mask_2d(0, 0, 1, false).number_of_points(), 12);
        assert!(roi.boolean_mask_2d(0, 0, 0, true).is_empty());
        assert!(roi.contains_point(&Point5D::new(3, 5, 10, 10, 1), false));
        assert!(!roi.contains_point(&Point5D::new(4, 5, 10, 10, 1), false));
    }

    #[test]
    fn test_ellipse_rejects_bad_radii() {
        assert!(EllipseRoi::new(0.0, 0.0, 0.0, 1.0, SlicePosition::all()).is_err());
        assert!(EllipseRoi::new(0.0, 0.0, 1.0, -1.0, SlicePosition::all()).is_err());
        assert!(EllipseRoi::new(f64::NAN, 0.0, 1.0, 1.0, SlicePosition::all()).is_err());
    }

    #[test]
    fn test_ellipse_inclusive_superset() {
        let roi = EllipseRoi::new(5.0, 5.0, 3.5, 2.5, SlicePosition::all()).unwrap();
        let incl = roi.boolean_mask_2d(0, 0, 0, true);
        let excl = roi.boolean_mask_2d(0, 0, 0, false);
        assert!(excl.number_of_points() < incl.number_of_points());
        for (x, y) in excl.iter() {
            assert!(incl.contains(x, y));
        }
        // the pixels touching the center are always fully covered
        assert!(excl.contains(4, 4) && excl.contains(5, 5));
    }

    #[test]
    fn test_ellipse_unit_circle() {
        // circle of radius 1 centered on a pixel corner
        let roi = EllipseRoi::new(2.0, 2.0, 1.0, 1.0, SlicePosition::all()).unwrap();
        assert_eq!(roi.boolean_mask_2d(0, 0, 0, true).number_of_points(), 4);
        assert_eq!(roi.boolean_mask_2d(0, 0, 0, false).number_of_points(), 0);
    }

    #[test]
    fn test_mask_stack() {
        let slices = vec![
            BooleanMask2D::full(Rect2D::new(0, 0, 2, 2)),
            BooleanMask2D::full(Rect2D::new(1, 1, 3, 1)),
        ];
        let roi = MaskStackRoi::new(4, slices).unwrap().with_t(0);
        let b = roi.bounds_5d();
        assert_eq!(b.to_rect_2d(), Rect2D::new(0, 0, 4, 2));
        assert_eq!((b.origin(Axis::Z), b.size(Axis::Z)), (4, 2));
        assert_eq!((b.origin(Axis::T), b.size(Axis::T)), (0, 1));
        assert!(b.is_infinite(Axis::C));
        assert_eq!(roi.boolean_mask_2d(5, 0, 3, true).number_of_points(), 3);
        assert!(roi.boolean_mask_2d(3, 0, 0, true).is_empty());
        assert!(roi.boolean_mask_2d(6, 0, 0, true).is_empty());
        assert!(roi.boolean_mask_2d(4, 1, 0, true).is_empty());
        assert_eq!(roi.dimension(), RoiDimension::Volumetric);

        assert!(matches!(
            MaskStackRoi::new(0, Vec::new()),
            Err(RegionError::EmptyStack)
        ));
    }

    #[test]
    fn test_mask_stack_at_z_limit() {
        let slice = BooleanMask2D::full(Rect2D::new(0, 0, 1, 1));
        let top = MaskStackRoi::new(i32::MAX - 2, vec![slice.clone(); 2]).unwrap();
        let b = top.bounds_5d();
        assert_eq!((b.origin(Axis::Z), b.end(Axis::Z)), (i32::MAX - 2, i32::MAX));
        assert_eq!(top.boolean_mask_2d(i32::MAX - 1, 0, 0, true).number_of_points(), 1);
        assert!(top.boolean_mask_2d(i32::MIN, 0, 0, true).is_empty());

        assert!(matches!(
            MaskStackRoi::new(i32::MAX - 1, vec![slice; 2]),
            Err(RegionError::InvalidParameters(_))
        ));
    }
}
