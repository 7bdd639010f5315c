//! roikit-test - Regression test framework for roikit
//!
//! Every crate's `tests/*_reg.rs` drives its checks through [`RegParams`],
//! which numbers each comparison, reports failures to stderr and returns
//! the overall verdict from [`RegParams::cleanup`].
//!
//! # Usage
//!
//! ```
//! use roikit_test::RegParams;
//!
//! let mut rp = RegParams::new("mask_iter");
//! rp.compare_values(9.0, 9.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use roikit_core::{BooleanMask2D, Rect2D};

/// Build a mask fixture from text rows, `X` (or `1`) for a set cell and
/// anything else for an unset one.
///
/// # Errors
///
/// Returns [`TestError::FixtureShape`] if the rows have unequal lengths.
pub fn mask_from_rows(x: i32, y: i32, rows: &[&str]) -> TestResult<BooleanMask2D> {
    let width = rows.first().map_or(0, |r| r.chars().count());
    if let Some((i, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.chars().count() != width)
    {
        return Err(TestError::FixtureShape {
            name: format!("row {}", i),
            expected: width,
            actual: row.chars().count(),
        });
    }
    let cells: Vec<bool> = rows
        .iter()
        .flat_map(|r| r.chars().map(|ch| ch == 'X' || ch == '1'))
        .collect();
    let rect = Rect2D::new(
        x,
        y,
        i32::try_from(width).unwrap_or(i32::MAX),
        i32::try_from(rows.len()).unwrap_or(i32::MAX),
    );
    Ok(BooleanMask2D::new(rect, cells)?)
}
