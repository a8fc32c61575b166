//! Population moments of a value series.
//!
//! Computes mean first, then central moments around it in input order.
//! Deviations are scaled by the largest absolute deviation before raising
//! powers, so finite input always yields finite moments.

/// Summary statistics of a slice of values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
    /// Number of observations.
    pub count: usize,
    /// Sum of values.
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance (divisor N).
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Third standardized moment (divisor N).
    pub standardized_m3: f64,
    /// Fourth standardized moment (divisor N).
    pub standardized_m4: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Moments {
    /// Compute moments over `values`. An empty slice yields all zeros.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let sum: f64 = values.iter().sum();
        let mean = sum / n;

        let mut scale = 0.0_f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in values {
            scale = scale.max((x - mean).abs());
            min = min.min(x);
            max = max.max(x);
        }

        let mut moments = Self {
            count: values.len(),
            sum,
            mean,
            min,
            max,
            ..Self::default()
        };
        if scale == 0.0 {
            return moments;
        }

        // Scaled deviations lie in [-1, 1] and at least one has magnitude 1
        let mut s2 = 0.0;
        let mut s3 = 0.0;
        let mut s4 = 0.0;
        for &x in values {
            let u = (x - mean) / scale;
            let u2 = u * u;
            s2 += u2;
            s3 += u2 * u;
            s4 += u2 * u2;
        }
        let r2 = s2 / n;

        moments.std_dev = scale * r2.sqrt();
        moments.variance = moments.std_dev * moments.std_dev;
        moments.standardized_m3 = (s3 / n) / (r2 * r2.sqrt());
        moments.standardized_m4 = (s4 / n) / (r2 * r2);
        moments
    }

    /// Max minus min (0 when empty).
    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the spread is small enough to count as zero variance.
    #[inline]
    pub fn is_degenerate(&self, threshold: f64) -> bool {
        self.std_dev <= threshold
    }

    /// Z-score of `x` against this series, 0 under zero variance.
    pub fn zscore(&self, x: f64, threshold: f64) -> f64 {
        if self.is_degenerate(threshold) {
            0.0
        } else {
            (x - self.mean) / self.std_dev
        }
    }

    /// Standardized third moment, 0 under zero variance.
    pub fn skewness(&self, threshold: f64) -> f64 {
        if self.is_degenerate(threshold) {
            0.0
        } else {
            self.standardized_m3
        }
    }

    /// Fourth standardized moment minus 3.
    ///
    /// Returns exactly 0 (without the -3 offset) under zero variance.
    pub fn excess_kurtosis(&self, threshold: f64) -> f64 {
        if self.is_degenerate(threshold) {
            0.0
        } else {
            self.standardized_m4 - 3.0
        }
    }
}
