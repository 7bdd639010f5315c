//! Mask iterator regression test
//!
//! Walks random masks with `Mask2DIterator` and checks the emitted points
//! against the raster they came from.
//!
//! Run with:
//! ```
//! cargo test -p roikit-core --test mask_iter_reg
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roikit_core::{BooleanMask2D, Error, Mask2DIterator, Rect2D};
use roikit_test::{RegParams, mask_from_rows};

fn random_mask(rng: &mut StdRng) -> BooleanMask2D {
    let rect = Rect2D::new(
        rng.random_range(-20..20),
        rng.random_range(-20..20),
        rng.random_range(0..17),
        rng.random_range(0..13),
    );
    let density = rng.random_range(0.0..1.0);
    BooleanMask2D::from_fn(rect, |_, _| rng.random_bool(density))
}

#[test]
fn mask_iter_reg() {
    let mut rp = RegParams::new("mask_iter");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let mask = random_mask(&mut rng);
        let rect = mask.bounds();
        let points: Vec<(i32, i32)> = mask.iter().collect();

        // Point count equals the number of set cells
        let set_cells = mask.as_slice().iter().filter(|&&v| v).count();
        rp.compare_values(set_cells as f64, points.len() as f64, 0.0);

        // Every point maps back to a set cell
        let all_set = points.iter().all(|&(x, y)| {
            let index = ((y - rect.y) * rect.width + (x - rect.x)) as usize;
            mask.as_slice()[index]
        });
        rp.compare_bool(all_set, "emitted point maps to a set cell");

        // Strict row-major order
        let row_major = points
            .windows(2)
            .all(|w| w[0].1 < w[1].1 || (w[0].1 == w[1].1 && w[0].0 < w[1].0));
        rp.compare_bool(row_major, "row-major order");

        // Reset replays the identical sequence
        let mut it = mask.iter();
        let first: Vec<(i32, i32)> = it.by_ref().collect();
        it.reset();
        let second: Vec<(i32, i32)> = it.collect();
        rp.compare_bool(first == second && first == points, "reset replays");
    }

    assert!(rp.cleanup(), "mask_iter regression test failed");
}

#[test]
fn mask_iter_cursor_reg() {
    let mut rp = RegParams::new("mask_iter_cursor");

    let mask = mask_from_rows(3, -2, &["..X.", "....", "X..X"]).unwrap();
    let mut it = Mask2DIterator::new(&mask);

    let mut walked = Vec::new();
    while !it.is_done() {
        walked.push(it.get().unwrap());
        it.advance().unwrap();
    }
    rp.compare_bool(walked == vec![(5, -2), (3, 0), (6, 0)], "cursor walk");
    rp.compare_bool(it.get() == Err(Error::IterationPastEnd), "get past end");
    rp.compare_bool(it.advance() == Err(Error::IterationPastEnd), "advance past end");

    let empty = BooleanMask2D::empty();
    rp.compare_bool(Mask2DIterator::new(&empty).is_done(), "empty mask done");

    assert!(rp.cleanup(), "mask_iter_cursor regression test failed");
}
