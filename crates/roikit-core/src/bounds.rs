//! Rect2D, IntegerBounds5D - Integer bounding regions
//!
//! [`Rect2D`] is the planar rectangle a [`BooleanMask2D`](crate::BooleanMask2D)
//! is laid over. [`IntegerBounds5D`] extends it to the five image axes, with
//! a per-axis infinite marker for regions that do not bound Z, T or C.
//!
//! Both are small `Copy` values. Nothing mutates a bounds in place; every
//! operation returns a new value.

use crate::point::Point5D;

/// One of the five logical image axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    T,
    C,
}

impl Axis {
    /// All axes, in storage order
    pub const ALL: [Axis; 5] = [Axis::X, Axis::Y, Axis::Z, Axis::T, Axis::C];

    /// The three slice axes
    pub const SLICE: [Axis; 3] = [Axis::Z, Axis::T, Axis::C];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            Axis::T => 3,
            Axis::C => 4,
        }
    }
}

/// An integer rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect2D {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Rect2D {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle covers no cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of cells covered, zero when empty
    #[inline]
    pub fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection of two rectangles
    pub fn intersect(&self, other: &Rect2D) -> Option<Rect2D> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect2D::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Compute the union (bounding rectangle) of two rectangles
    ///
    /// An empty operand does not contribute.
    pub fn union(&self, other: &Rect2D) -> Rect2D {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect2D::new(x, y, right - x, bottom - y)
    }
}

/// An integer bounding box over X, Y, Z, T and C.
///
/// Each axis has an origin and a size, or is flagged infinite. The origin and
/// size of an infinite axis carry no meaning. A bounds is empty iff some
/// finite axis has a size <= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerBounds5D {
    origin: [i32; 5],
    size: [i32; 5],
    infinite: [bool; 5],
}

impl Default for IntegerBounds5D {
    fn default() -> Self {
        Self::new([0; 5], [0; 5])
    }
}

impl IntegerBounds5D {
    /// Origin / size of the synthetic slice an infinite axis collapses to
    pub const COLLAPSED_ORIGIN: i32 = -1;
    pub const COLLAPSED_SIZE: i32 = 1;

    /// Create finite bounds from per-axis origins and sizes, in
    /// `[x, y, z, t, c]` order.
    pub const fn new(origin: [i32; 5], size: [i32; 5]) -> Self {
        Self {
            origin,
            size,
            infinite: [false; 5],
        }
    }

    /// Bounds that do not constrain any axis
    pub const fn infinite() -> Self {
        Self {
            origin: [0; 5],
            size: [0; 5],
            infinite: [true; 5],
        }
    }

    /// Bounds covering `rect` on X/Y and infinite on Z, T and C
    pub fn from_rect_2d(rect: Rect2D) -> Self {
        Self::infinite()
            .with_axis(Axis::X, rect.x, rect.width)
            .with_axis(Axis::Y, rect.y, rect.height)
    }

    /// Copy of these bounds with `axis` set to a finite range
    pub fn with_axis(mut self, axis: Axis, origin: i32, size: i32) -> Self {
        let i = axis.index();
        self.origin[i] = origin;
        self.size[i] = size;
        self.infinite[i] = false;
        self
    }

    /// Copy of these bounds with `axis` flagged infinite
    pub fn with_infinite(mut self, axis: Axis) -> Self {
        let i = axis.index();
        self.origin[i] = 0;
        self.size[i] = 0;
        self.infinite[i] = true;
        self
    }

    /// Check whether `axis` is unbounded
    #[inline]
    pub fn is_infinite(&self, axis: Axis) -> bool {
        self.infinite[axis.index()]
    }

    /// Origin of `axis`
    #[inline]
    pub fn origin(&self, axis: Axis) -> i32 {
        self.origin[axis.index()]
    }

    /// Extent of `axis`
    #[inline]
    pub fn size(&self, axis: Axis) -> i32 {
        self.size[axis.index()]
    }

    /// Exclusive end of `axis`
    #[inline]
    pub fn end(&self, axis: Axis) -> i32 {
        self.origin(axis).saturating_add(self.size(axis))
    }

    /// Inclusive maximum of `axis`
    #[inline]
    pub fn max(&self, axis: Axis) -> i32 {
        self.end(axis) - 1
    }

    /// Check whether any finite axis has a non-positive size
    pub fn is_empty(&self) -> bool {
        Axis::ALL
            .iter()
            .any(|&axis| !self.is_infinite(axis) && self.size(axis) <= 0)
    }

    /// Axis-wise intersection.
    ///
    /// An infinite operand leaves the axis to the other operand; the result
    /// is infinite only where both are.
    pub fn intersect(&self, other: &IntegerBounds5D) -> IntegerBounds5D {
        let mut result = *self;
        for axis in Axis::ALL {
            result = match (self.is_infinite(axis), other.is_infinite(axis)) {
                (true, true) => result.with_infinite(axis),
                (true, false) => result.with_axis(axis, other.origin(axis), other.size(axis)),
                (false, true) => result,
                (false, false) => {
                    let origin = self.origin(axis).max(other.origin(axis));
                    let end = self.end(axis).min(other.end(axis));
                    result.with_axis(axis, origin, (end - origin).max(0))
                }
            };
        }
        result
    }

    /// Axis-wise union; infinite where either operand is.
    pub fn union(&self, other: &IntegerBounds5D) -> IntegerBounds5D {
        let mut result = *self;
        for axis in Axis::ALL {
            result = if self.is_infinite(axis) || other.is_infinite(axis) {
                result.with_infinite(axis)
            } else {
                let origin = self.origin(axis).min(other.origin(axis));
                let end = self.end(axis).max(other.end(axis));
                result.with_axis(axis, origin, end - origin)
            };
        }
        result
    }

    /// Replace each infinite axis in `axes` with the single synthetic slice
    /// at index -1.
    pub fn collapse_infinite(&self, axes: &[Axis]) -> IntegerBounds5D {
        axes.iter().fold(*self, |bounds, &axis| {
            if bounds.is_infinite(axis) {
                bounds.with_axis(axis, Self::COLLAPSED_ORIGIN, Self::COLLAPSED_SIZE)
            } else {
                bounds
            }
        })
    }

    /// Check whether every finite axis contains the point's coordinate
    pub fn contains(&self, p: &Point5D) -> bool {
        let coords = [p.x, p.y, p.z, p.t, p.c];
        Axis::ALL.iter().all(|&axis| {
            self.is_infinite(axis)
                || (coords[axis.index()] >= self.origin(axis) && coords[axis.index()] < self.end(axis))
        })
    }

    /// Planar part of the bounds
    pub fn to_rect_2d(&self) -> Rect2D {
        Rect2D::new(
            self.origin(Axis::X),
            self.origin(Axis::Y),
            self.size(Axis::X),
            self.size(Axis::Y),
        )
    }
}
