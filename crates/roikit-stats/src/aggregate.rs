//! Streaming statistics over a region
//!
//! One pass over the region's points, looking each one up in a
//! [`PixelSource`]. The pass runs over the region bounds intersected with the
//! source bounds (and the optional sub-region), so a region that does not
//! bound Z, T or C covers every plane the source holds on that axis.
//!
//! A pass can run long enough for the data underneath to change. Any
//! failure while traversing makes the whole result unavailable rather than
//! partial: [`compute_infos`] returns `None` and logs the cause.

use log::{debug, warn};
use roikit_core::{Axis, IntegerBounds5D};
use roikit_region::{Region, RegionIterator};

use crate::error::StatsResult;
use crate::infos::{RoiInfos, StatisticsAggregator};
use crate::options::StatsOptions;
use crate::source::PixelSource;

/// Compute the statistics of `region` over `source`.
///
/// Returns `None` when the pass fails; the failure is logged at `warn`
/// level.
pub fn compute_infos<R, S>(region: &R, source: &S, options: &StatsOptions) -> Option<RoiInfos>
where
    R: Region + ?Sized,
    S: PixelSource + ?Sized,
{
    match try_compute_infos(region, source, options) {
        Ok(infos) => Some(infos),
        Err(e) => {
            warn!("region statistics unavailable: {}", e);
            None
        }
    }
}

/// Compute the statistics of `region` over `source`, surfacing the first
/// failure.
///
/// # Errors
///
/// Propagates sample lookup errors and iterator contract errors.
pub fn try_compute_infos<R, S>(region: &R, source: &S, options: &StatsOptions) -> StatsResult<RoiInfos>
where
    R: Region + ?Sized,
    S: PixelSource + ?Sized,
{
    let mut bounds = source.bounds_5d();
    if let Some(sub) = options.sub_region {
        bounds = bounds.intersect(&sub);
    }

    let unit = options.pixel_size.unit(region.dimension());
    let mut aggregator = StatisticsAggregator::new(unit);
    let mut it = RegionIterator::with_sub_region(region, Some(bounds), options.inclusive);
    while !it.is_done() {
        let p = it.get()?;
        aggregator.accept(source.sample(p.x, p.y, p.z, p.t, p.c)?);
        it.advance()?;
    }

    let infos = aggregator.finish();
    debug!(
        "region statistics: {} pixels, min={}, max={}, mean={}, area={}",
        infos.num_pixels, infos.min_intensity, infos.max_intensity, infos.mean_intensity, infos.area
    );
    Ok(infos)
}

/// Compute one [`RoiInfos`] per channel of `source`.
///
/// Each channel is its own pass restricted to that channel. Returns `None`
/// if any pass fails.
pub fn compute_infos_per_channel<R, S>(
    region: &R,
    source: &S,
    options: &StatsOptions,
) -> Option<Vec<RoiInfos>>
where
    R: Region + ?Sized,
    S: PixelSource + ?Sized,
{
    let source_bounds = source.bounds_5d();
    let base = options.sub_region.unwrap_or_else(IntegerBounds5D::infinite);
    (source_bounds.origin(Axis::C)..source_bounds.end(Axis::C))
        .map(|c| {
            let channel = base.intersect(&IntegerBounds5D::infinite().with_axis(Axis::C, c, 1));
            compute_infos(region, source, &StatsOptions {
                sub_region: Some(channel),
                ..*options
            })
        })
        .collect()
}
