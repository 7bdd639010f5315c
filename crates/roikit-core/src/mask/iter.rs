//! Row-major cursor over the set cells of a [`BooleanMask2D`]

use std::borrow::Cow;

use super::BooleanMask2D;
use crate::error::{Error, Result};

/// Enumerates the set cells of a mask, Y outer and X inner.
///
/// The cursor walks a linear offset through the raster and skips unset
/// cells inline, so memory stays proportional to the mask rather than to the
/// number of points. The mask is only read.
///
/// Besides the explicit cursor API (`reset` / `advance` / `is_done` / `get`)
/// the type is an [`Iterator`] over absolute `(x, y)` positions.
#[derive(Debug, Clone)]
pub struct Mask2DIterator<'a> {
    mask: Cow<'a, BooleanMask2D>,
    /// Mask-local column
    col: i32,
    /// Mask-local row
    row: i32,
    offset: usize,
    done: bool,
}

impl<'a> Mask2DIterator<'a> {
    /// Iterate a borrowed mask
    pub fn new(mask: &'a BooleanMask2D) -> Self {
        Self::from_cow(Cow::Borrowed(mask))
    }

    fn from_cow(mask: Cow<'a, BooleanMask2D>) -> Self {
        let mut it = Self {
            mask,
            col: 0,
            row: 0,
            offset: 0,
            done: true,
        };
        it.reset();
        it
    }

    /// The mask being iterated
    pub fn mask(&self) -> &BooleanMask2D {
        &self.mask
    }

    /// Reposition before the first cell and prime onto the first set cell.
    pub fn reset(&mut self) {
        self.col = 0;
        self.row = 0;
        self.offset = 0;
        self.done = self.mask.bounds().is_empty();
        self.seek_set_cell();
    }

    /// Move to the next set cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IterationPastEnd`] if the iterator is already done.
    pub fn advance(&mut self) -> Result<()> {
        if self.done {
            return Err(Error::IterationPastEnd);
        }
        self.step();
        self.seek_set_cell();
        Ok(())
    }

    /// Check whether no further set cell exists
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Current absolute position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IterationPastEnd`] if the iterator is done.
    pub fn get(&self) -> Result<(i32, i32)> {
        Ok((self.x()?, self.y()?))
    }

    /// Current absolute x.
    pub fn x(&self) -> Result<i32> {
        if self.done {
            return Err(Error::IterationPastEnd);
        }
        Ok(self.mask.bounds().x + self.col)
    }

    /// Current absolute y.
    pub fn y(&self) -> Result<i32> {
        if self.done {
            return Err(Error::IterationPastEnd);
        }
        Ok(self.mask.bounds().y + self.row)
    }

    /// One cell forward; wraps the column and marks done past the last row.
    fn step(&mut self) {
        let bounds = self.mask.bounds();
        self.offset += 1;
        self.col += 1;
        if self.col >= bounds.width {
            self.col = 0;
            self.row += 1;
            if self.row >= bounds.height {
                self.done = true;
            }
        }
    }

    fn seek_set_cell(&mut self) {
        while !self.done && !self.mask.as_slice()[self.offset] {
            self.step();
        }
    }
}

impl Mask2DIterator<'static> {
    /// Iterate a mask the cursor takes ownership of
    pub fn from_owned(mask: BooleanMask2D) -> Self {
        Self::from_cow(Cow::Owned(mask))
    }
}

impl Iterator for Mask2DIterator<'_> {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.get().ok()?;
        self.step();
        self.seek_set_cell();
        Some(point)
    }
}
