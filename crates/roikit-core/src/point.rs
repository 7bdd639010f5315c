//! Point5D - A single pixel position over the five image axes

use std::cmp::Ordering;
use std::fmt;

/// An integer pixel position `(x, y, z, t, c)`.
///
/// Points order the way region iterators emit them: lexicographically on
/// `(t, z, c, y, x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point5D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub t: i32,
    pub c: i32,
}

impl Point5D {
    /// Create a new point
    pub const fn new(x: i32, y: i32, z: i32, t: i32, c: i32) -> Self {
        Self { x, y, z, t, c }
    }

    /// Key used for emission ordering.
    #[inline]
    fn order_key(&self) -> (i32, i32, i32, i32, i32) {
        (self.t, self.z, self.c, self.y, self.x)
    }
}

impl Ord for Point5D {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl PartialOrd for Point5D {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point5D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x={}, y={}, z={}, t={}, c={}]",
            self.x, self.y, self.z, self.t, self.c
        )
    }
}
