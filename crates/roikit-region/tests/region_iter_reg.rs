//! 5D region iterator regression test
//!
//! Run with:
//! ```
//! cargo test -p roikit-region --test region_iter_reg
//! ```

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roikit_core::{Axis, BooleanMask2D, IntegerBounds5D, Point5D, Rect2D};
use roikit_region::{
    EllipseRoi, MaskRoi, MaskStackRoi, Region, RegionIterator, SlicePosition, count_points,
};
use roikit_test::RegParams;

/// Volumetric region with random slices, over several time points and
/// channels
struct RandomHyperstack {
    slices: Vec<BooleanMask2D>,
    depth: i32,
    times: i32,
    channels: i32,
}

impl RandomHyperstack {
    fn new(rng: &mut StdRng, depth: i32, times: i32, channels: i32) -> Self {
        let rect = Rect2D::new(0, 0, 6, 5);
        let slices = (0..depth * times * channels)
            .map(|_| BooleanMask2D::from_fn(rect, |_, _| rng.random_bool(0.4)))
            .collect();
        Self {
            slices,
            depth,
            times,
            channels,
        }
    }
}

impl Region for RandomHyperstack {
    fn bounds_5d(&self) -> IntegerBounds5D {
        IntegerBounds5D::new([0; 5], [6, 5, self.depth, self.times, self.channels])
    }

    fn boolean_mask_2d(&self, z: i32, t: i32, c: i32, _inclusive: bool) -> BooleanMask2D {
        let index = (t * self.depth + z) * self.channels + c;
        self.slices[index as usize].clone()
    }
}

#[test]
fn region_iter_order_reg() {
    let mut rp = RegParams::new("region_iter_order");
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let roi = RandomHyperstack::new(&mut rng, 3, 2, 4);
        let points: Vec<Point5D> = RegionIterator::new(&roi, true).collect();

        // Lexicographic (t, z, c, y, x)
        rp.compare_bool(points.windows(2).all(|w| w[0] < w[1]), "t-z-c-y-x order");

        // Same multiset as a brute-force scan of every slice
        let expected: usize = roi.slices.iter().map(|m| m.number_of_points()).sum();
        rp.compare_values(expected as f64, points.len() as f64, 0.0);
        rp.compare_bool(
            points.iter().all(|p| roi.contains_point(p, true)),
            "every point contained",
        );

        // Reset replays the identical sequence
        let mut it = RegionIterator::new(&roi, true);
        let _ = it.by_ref().take(5).count();
        it.reset();
        let replay: Vec<Point5D> = it.collect();
        rp.compare_points(&points, &replay);
    }

    assert!(rp.cleanup(), "region_iter_order regression test failed");
}

#[test]
fn region_iter_infinite_reg() {
    let mut rp = RegParams::new("region_iter_infinite");

    let mask = BooleanMask2D::from_fn(Rect2D::new(2, 2, 7, 5), |x, y| (x ^ y) & 1 == 0);
    for (position, pinned) in [
        (SlicePosition::all(), SlicePosition::at(-1, -1, -1)),
        (
            SlicePosition::all().with_t(3),
            SlicePosition::at(-1, 3, -1),
        ),
        (
            SlicePosition::all().with_z(0).with_c(1),
            SlicePosition::at(0, -1, 1),
        ),
    ] {
        let infinite = MaskRoi::new(mask.clone(), position);
        let single = MaskRoi::new(mask.clone(), pinned);
        let a: Vec<Point5D> = RegionIterator::new(&infinite, true).collect();
        let b: Vec<Point5D> = RegionIterator::new(&single, true).collect();
        rp.compare_points(&b, &a);
        rp.compare_values(mask.number_of_points() as f64, a.len() as f64, 0.0);
    }

    // Infinite Z on a region that is finite on T and C
    let stack = MaskStackRoi::new(0, vec![mask.clone(); 3]).unwrap().with_c(2);
    let it = RegionIterator::new(&stack, true);
    rp.compare_bool(it.bounds().origin(Axis::T) == -1, "t collapsed");
    rp.compare_values(
        (3 * mask.number_of_points()) as f64,
        it.count() as f64,
        0.0,
    );

    assert!(rp.cleanup(), "region_iter_infinite regression test failed");
}

#[test]
fn region_iter_empty_reg() {
    let mut rp = RegParams::new("region_iter_empty");

    let empty_rect = MaskRoi::new(BooleanMask2D::empty(), SlicePosition::all());
    let it = RegionIterator::new(&empty_rect, true);
    rp.compare_bool(it.is_done(), "empty rect done at construction");

    let roi = MaskRoi::new(
        BooleanMask2D::full(Rect2D::new(0, 0, 4, 4)),
        SlicePosition::at(0, 0, 0),
    );
    let disjoint = IntegerBounds5D::infinite().with_axis(Axis::Z, 5, 2);
    let it = RegionIterator::with_sub_region(&roi, Some(disjoint), true);
    rp.compare_bool(it.is_done(), "disjoint sub-region done at construction");
    rp.compare_values(0.0, count_points(&roi, Some(disjoint), true) as f64, 0.0);

    assert!(rp.cleanup(), "region_iter_empty regression test failed");
}

#[test]
fn region_iter_inclusive_reg() {
    let mut rp = RegParams::new("region_iter_inclusive");
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let roi = EllipseRoi::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(0.2..9.0),
            rng.random_range(0.2..9.0),
            SlicePosition::all().with_t(1),
        )
        .unwrap();
        let inclusive: BTreeSet<Point5D> = roi.iter_points(true).collect();
        let exclusive: BTreeSet<Point5D> = roi.iter_points(false).collect();
        rp.compare_bool(exclusive.is_subset(&inclusive), "exclusive within inclusive");
        rp.compare_bool(!inclusive.is_empty(), "inclusive ellipse never empty");
    }

    assert!(rp.cleanup(), "region_iter_inclusive regression test failed");
}

#[test]
fn region_iter_sub_region_reg() {
    let mut rp = RegParams::new("region_iter_sub_region");
    let mut rng = StdRng::seed_from_u64(31);

    // Column of a 4x4 rectangle: only x == 0 survives
    let square = MaskRoi::new(
        BooleanMask2D::full(Rect2D::new(0, 0, 4, 4)),
        SlicePosition::at(0, 0, 0),
    );
    let column = IntegerBounds5D::infinite().with_axis(Axis::X, 0, 1);
    let points: Vec<Point5D> = square.iter_points_within(column, true).collect();
    rp.compare_values(4.0, points.len() as f64, 0.0);
    rp.compare_bool(points.iter().all(|p| column.contains(p)), "column contains all");

    for _ in 0..40 {
        let roi = RandomHyperstack::new(&mut rng, 2, 2, 3);
        let mut sub = IntegerBounds5D::infinite()
            .with_axis(Axis::X, rng.random_range(-2..6), rng.random_range(0..5))
            .with_axis(Axis::Y, rng.random_range(-2..5), rng.random_range(0..5));
        if rng.random_bool(0.5) {
            sub = sub.with_axis(Axis::C, rng.random_range(0..3), 1);
        }

        let within: Vec<Point5D> = roi.iter_points_within(sub, true).collect();
        let filtered: Vec<Point5D> = RegionIterator::new(&roi, true)
            .filter(|p| sub.contains(p))
            .collect();
        rp.compare_bool(within.iter().all(|p| sub.contains(p)), "points inside sub-region");
        rp.compare_points(&filtered, &within);
        rp.compare_values(
            filtered.len() as f64,
            count_points(&roi, Some(sub), true) as f64,
            0.0,
        );
    }

    assert!(rp.cleanup(), "region_iter_sub_region regression test failed");
}
