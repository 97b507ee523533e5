//! Streaming descriptive statistics over a sorted sample set.

use std::cell::Cell;

use crate::types::StatsError;

/// Memoised derived quantities, invalidated whenever a sample arrives.
///
/// `Cell` keeps the accessors `&self` while still caching: a cleared cell
/// is recomputed on the next read.
#[derive(Debug, Default, Clone)]
struct MomentCache {
    mean: Cell<Option<f64>>,
    geometric_mean: Cell<Option<f64>>,
    variance: Cell<Option<f64>>,
    population_variance: Cell<Option<f64>>,
    skewness: Cell<Option<f64>>,
    kurtosis: Cell<Option<f64>>,
}

impl MomentCache {
    fn clear(&self) {
        self.mean.set(None);
        self.geometric_mean.set(None);
        self.variance.set(None);
        self.population_variance.set(None);
        self.skewness.set(None);
        self.kurtosis.set(None);
    }
}

/// Incremental summary of a univariate sample.
///
/// Samples are held sorted, so order statistics are direct lookups and new
/// observations cost one binary search plus an insert. Moment-based
/// quantities are memoised until the next insertion.
///
/// # Examples
///
/// ```rust
/// use randstat_stats::descriptive::DescriptiveStatistics;
///
/// let mut stats = DescriptiveStatistics::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(stats.mean().unwrap(), 5.0);
/// assert_eq!(stats.population_std_dev().unwrap(), 2.0);
///
/// stats.add_sample(3.0).unwrap();
/// assert_eq!(stats.len(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DescriptiveStatistics {
    /// Samples in ascending order.
    samples: Vec<f64>,
    cache: MomentCache,
}

impl DescriptiveStatistics {
    /// Builds a summary from an initial batch of samples.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] for an empty batch and
    /// [`StatsError::NonFiniteSample`] if any value is NaN or infinite.
    pub fn new(samples: &[f64]) -> Result<Self, StatsError> {
        if samples.is_empty() {
            return Err(StatsError::EmptySample);
        }
        for &value in samples {
            if !value.is_finite() {
                return Err(StatsError::NonFiniteSample { value });
            }
        }
        // One sort beats n ordered inserts for batch construction.
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        Ok(Self {
            samples: sorted,
            cache: MomentCache::default(),
        })
    }

    /// Creates an empty summary that can be filled incrementally.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Inserts one observation, keeping the sample set sorted and
    /// invalidating every memoised quantity.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NonFiniteSample`] for NaN or infinite values.
    pub fn add_sample(&mut self, value: f64) -> Result<(), StatsError> {
        if !value.is_finite() {
            return Err(StatsError::NonFiniteSample { value });
        }
        let at = match self.samples.binary_search_by(|x| x.total_cmp(&value)) {
            Ok(i) | Err(i) => i,
        };
        self.samples.insert(at, value);
        self.cache.clear();
        Ok(())
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` when no samples have been added.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the samples in ascending order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn require_samples(&self) -> Result<(), StatsError> {
        if self.samples.is_empty() {
            return Err(StatsError::EmptySample);
        }
        Ok(())
    }

    fn memoised(&self, cell: &Cell<Option<f64>>, compute: impl FnOnce() -> f64) -> f64 {
        match cell.get() {
            Some(value) => value,
            None => {
                let value = compute();
                cell.set(Some(value));
                value
            }
        }
    }

    /// Arithmetic mean.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn mean(&self) -> Result<f64, StatsError> {
        self.require_samples()?;
        Ok(self.memoised(&self.cache.mean, || {
            self.samples.iter().sum::<f64>() / self.samples.len() as f64
        }))
    }

    /// Geometric mean, `exp(mean(ln x))`.
    ///
    /// Zero samples drive the result to 0; negative samples make it NaN,
    /// matching the logarithmic definition.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn geometric_mean(&self) -> Result<f64, StatsError> {
        self.require_samples()?;
        Ok(self.memoised(&self.cache.geometric_mean, || {
            let log_mean =
                self.samples.iter().map(|x| x.ln()).sum::<f64>() / self.samples.len() as f64;
            log_mean.exp()
        }))
    }

    /// Sample variance with Bessel's correction (n - 1 denominator).
    ///
    /// A single sample yields NaN, since no dispersion estimate exists.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn variance(&self) -> Result<f64, StatsError> {
        let mean = self.mean()?;
        Ok(self.memoised(&self.cache.variance, || {
            let ss = self.samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
            ss / (self.samples.len() - 1) as f64
        }))
    }

    /// Population variance (n denominator).
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn population_variance(&self) -> Result<f64, StatsError> {
        let mean = self.mean()?;
        Ok(self.memoised(&self.cache.population_variance, || {
            let ss = self.samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
            ss / self.samples.len() as f64
        }))
    }

    /// Sample standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn std_dev(&self) -> Result<f64, StatsError> {
        Ok(self.variance()?.sqrt())
    }

    /// Population standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn population_std_dev(&self) -> Result<f64, StatsError> {
        Ok(self.population_variance()?.sqrt())
    }

    /// Smallest sample.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn min(&self) -> Result<f64, StatsError> {
        self.require_samples()?;
        Ok(self.samples[0])
    }

    /// Largest sample.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn max(&self) -> Result<f64, StatsError> {
        self.require_samples()?;
        Ok(self.samples[self.samples.len() - 1])
    }

    /// `max - min`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn range(&self) -> Result<f64, StatsError> {
        Ok(self.max()? - self.min()?)
    }

    /// Median, the 1/2 quantile.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn median(&self) -> Result<f64, StatsError> {
        self.quantile(1, 2)
    }

    /// First quartile.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn q1(&self) -> Result<f64, StatsError> {
        self.quantile(1, 4)
    }

    /// Third quartile.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn q3(&self) -> Result<f64, StatsError> {
        self.quantile(3, 4)
    }

    /// Interquartile range, `q3 - q1`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn iqr(&self) -> Result<f64, StatsError> {
        Ok(self.q3()? - self.q1()?)
    }

    /// The k-th q-quantile with linear interpolation between order
    /// statistics: the value at fractional rank `k (n - 1) / q`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidQuantile`] when `q = 0` or `k > q`, and
    /// [`StatsError::EmptySample`] when no samples exist.
    pub fn quantile(&self, k: u32, q: u32) -> Result<f64, StatsError> {
        if q == 0 || k > q {
            return Err(StatsError::InvalidQuantile { k, q });
        }
        self.require_samples()?;
        Ok(self.value_at_rank(f64::from(k) * (self.samples.len() - 1) as f64 / f64::from(q)))
    }

    /// The p-th percentile for `p` in [0, 100], with linear interpolation.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidPercentile`] outside [0, 100] and
    /// [`StatsError::EmptySample`] when no samples exist.
    pub fn percentile(&self, p: f64) -> Result<f64, StatsError> {
        if !(0.0..=100.0).contains(&p) {
            return Err(StatsError::InvalidPercentile { p });
        }
        self.require_samples()?;
        Ok(self.value_at_rank(p / 100.0 * (self.samples.len() - 1) as f64))
    }

    /// Linear interpolation at a fractional rank in `[0, n - 1]`.
    fn value_at_rank(&self, rank: f64) -> f64 {
        let lo = rank.floor() as usize;
        let frac = rank - rank.floor();
        if frac == 0.0 {
            return self.samples[lo];
        }
        self.samples[lo] + frac * (self.samples[lo + 1] - self.samples[lo])
    }

    /// The n-th central moment, `mean((x - mean)^order)`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidMomentOrder`] for order 0 and
    /// [`StatsError::EmptySample`] when no samples exist.
    pub fn nth_moment_about_mean(&self, order: u32) -> Result<f64, StatsError> {
        if order == 0 {
            return Err(StatsError::InvalidMomentOrder { n: order });
        }
        let mean = self.mean()?;
        let sum = self
            .samples
            .iter()
            .map(|x| (x - mean).powi(order as i32))
            .sum::<f64>();
        Ok(sum / self.samples.len() as f64)
    }

    /// Skewness, the third central moment over the population variance to
    /// the power 3/2.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn skewness(&self) -> Result<f64, StatsError> {
        self.require_samples()?;
        if let Some(value) = self.cache.skewness.get() {
            return Ok(value);
        }
        let m3 = self.nth_moment_about_mean(3)?;
        let pv = self.population_variance()?;
        let value = m3 / pv.powf(1.5);
        self.cache.skewness.set(Some(value));
        Ok(value)
    }

    /// Excess kurtosis, `m4 / m2^2 - 3`; the normal law scores 0.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] when no samples exist.
    pub fn kurtosis(&self) -> Result<f64, StatsError> {
        self.require_samples()?;
        if let Some(value) = self.cache.kurtosis.get() {
            return Ok(value);
        }
        let m4 = self.nth_moment_about_mean(4)?;
        let m2 = self.nth_moment_about_mean(2)?;
        let value = m4 / (m2 * m2) - 3.0;
        self.cache.kurtosis.set(Some(value));
        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
