//! Aggregate statistics of a region

/// Intensity and size measures of one region.
///
/// Intensities are raw sample units; `area` is physical (an area for planar
/// regions, a volume for volumetric ones). All fields are zero for a region
/// that contains no pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoiInfos {
    pub area: f64,
    pub num_pixels: u64,
    pub min_intensity: f64,
    pub max_intensity: f64,
    pub mean_intensity: f64,
    pub sum_intensity: f64,
    /// Population standard deviation
    pub std_deviation: f64,
}

/// Single-pass accumulator behind [`RoiInfos`]
#[derive(Debug, Clone, Copy)]
pub struct StatisticsAggregator {
    unit: f64,
    min: f64,
    max: f64,
    sum: f64,
    /// Running mean and squared-deviation sum (Welford)
    running_mean: f64,
    m2: f64,
    count: u64,
}

impl StatisticsAggregator {
    /// Start an empty pass; `unit` is the physical measure of one pixel
    pub fn new(unit: f64) -> Self {
        Self {
            unit,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            running_mean: 0.0,
            m2: 0.0,
            count: 0,
        }
    }

    /// Fold one sample in
    #[inline]
    pub fn accept(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
        let delta = value - self.running_mean;
        self.running_mean += delta / self.count as f64;
        self.m2 += delta * (value - self.running_mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Derive the final measures
    pub fn finish(&self) -> RoiInfos {
        if self.count == 0 {
            return RoiInfos::default();
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = (self.m2 / n).max(0.0);
        RoiInfos {
            area: n * self.unit,
            num_pixels: self.count,
            min_intensity: self.min,
            max_intensity: self.max,
            mean_intensity: mean,
            sum_intensity: self.sum,
            std_deviation: variance.sqrt(),
        }
    }
}
