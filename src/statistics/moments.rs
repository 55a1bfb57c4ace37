//! Running statistics (mean, variance, standard deviation)
//!
//! Computes streaming statistics using Welford's numerically stable online algorithm.

use crate::error::StatsError;
use crate::math;

/// Variance and standard deviation snapshot returned by [`RunningStats::report`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Report {
    /// Sample variance (Bessel-corrected)
    pub variance: f64,
    /// Sample standard deviation
    pub std_dev: f64,
}

impl From<Report> for (f64, f64) {
    fn from(report: Report) -> Self {
        (report.variance, report.std_dev)
    }
}

/// Running statistics calculator using Welford's algorithm
///
/// Tracks the count, the running mean and the sum of squared deviations
/// (M2) in O(1) memory. Observations themselves are never stored.
///
/// Variance is the sample (n - 1) estimator. Below two observations
/// [`report`](Self::report) returns zeros; use [`try_report`](Self::try_report)
/// to get an error instead.
///
/// # Example
///
/// ```
/// use runstats::statistics::RunningStats;
///
/// let mut stats = RunningStats::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     stats.update(value);
/// }
///
/// let report = stats.report();
/// assert_eq!(stats.observation_count(), 8);
/// assert!((stats.current_mean() - 5.0).abs() < 0.001);
/// assert!((report.variance - 4.571).abs() < 0.001);
/// assert!((report.std_dev - 2.138).abs() < 0.001);
/// ```
///
/// # From an Iterator
///
/// ```
/// use runstats::statistics::RunningStats;
///
/// let stats: RunningStats = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].into_iter().collect();
/// assert_eq!(stats.observation_count(), 6);
/// assert!((stats.current_mean() - 3.5).abs() < 0.001);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunningStats {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    /// Create a new empty statistics accumulator
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Absorb one observation
    ///
    /// Every value is accepted. NaN and infinities are not filtered: they
    /// propagate into the mean and M2 and every later report. Start a fresh
    /// accumulator with [`new`](Self::new) to recover.
    ///
    /// # Overflow
    ///
    /// The recurrence works on raw deviations, so finite inputs can overflow:
    /// `value - mean` overflows once it exceeds `f64::MAX` (e.g. `1e308`
    /// followed by `-1e308`), and M2 overflows once a squared deviation does,
    /// around deviations of `1e154`. The state is then non-finite, possibly
    /// with a negative infinite variance. See [`is_finite`](Self::is_finite).
    pub fn update(&mut self, value: f64) {
        #[cfg(feature = "log")]
        let was_finite = self.is_finite();

        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        #[cfg(feature = "log")]
        if was_finite && !self.is_finite() {
            log::warn!(
                "observation {} (#{}) left running statistics non-finite",
                value,
                self.count
            );
        }
    }

    /// Check that the mean and M2 are both finite
    ///
    /// Turns false once a non-finite or overflowing observation has been
    /// absorbed, and stays false.
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.m2.is_finite()
    }

    /// Sample variance and standard deviation of everything seen so far
    ///
    /// Returns zeros until at least two observations have been absorbed.
    pub fn report(&self) -> Report {
        if self.count < 2 {
            return Report::default();
        }

        let variance = self.m2 / (self.count - 1) as f64;
        Report {
            variance,
            std_dev: math::sqrt(variance),
        }
    }

    /// Like [`report`](Self::report), but fails below two observations
    pub fn try_report(&self) -> Result<Report, StatsError> {
        if self.count < 2 {
            return Err(StatsError::InsufficientData {
                count: self.count,
                required: 2,
            });
        }
        Ok(self.report())
    }

    /// Current mean, 0 when empty
    pub fn current_mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Number of observations absorbed
    pub fn observation_count(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Raw sum of squared deviations from the mean (M2)
    pub fn sum_sq_dev(&self) -> f64 {
        self.m2
    }

    /// Get the sample variance, same as `report().variance`
    pub fn sample_variance(&self) -> f64 {
        self.report().variance
    }

    /// Get the sample standard deviation, same as `report().std_dev`
    pub fn sample_std_dev(&self) -> f64 {
        self.report().std_dev
    }

    /// Get the population variance
    ///
    /// Divides by `n` instead of `n - 1`. Use this when the stream is the
    /// whole population rather than a sample of it.
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Get the population standard deviation
    pub fn population_std_dev(&self) -> f64 {
        math::sqrt(self.population_variance())
    }

    /// Get the sum of all values
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}

impl<'a> Extend<&'a f64> for RunningStats {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
