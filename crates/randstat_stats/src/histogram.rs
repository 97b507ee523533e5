//! Equal-width frequency histogram over a sample summary.

use crate::descriptive::DescriptiveStatistics;
use crate::types::StatsError;

/// Scale factor consumers can apply when rendering bar lengths.
pub const PRINT_SCALE: f64 = 0.04;

/// Equal-width binning of a [`DescriptiveStatistics`] snapshot.
///
/// The bin count is either given explicitly or derived from the
/// Freedman-Diaconis rule `ceil(range / (2 * IQR * n^(-1/3)))`. Samples
/// equal to the maximum land in the last bin, keeping every bin interval
/// half-open except the final one.
///
/// # Examples
///
/// ```rust
/// use randstat_stats::descriptive::DescriptiveStatistics;
/// use randstat_stats::histogram::Histogram;
///
/// let stats = DescriptiveStatistics::new(&[0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
/// let hist = Histogram::with_bins(&stats, 2).unwrap();
/// assert_eq!(hist.frequencies(), &[2, 3]);
/// assert_eq!(hist.max_frequency(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    frequencies: Vec<u64>,
    max_frequency: u64,
    min: f64,
    bin_width: f64,
}

impl Histogram {
    /// Bins a summary with a bin count from the Freedman-Diaconis rule.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] for an empty summary and
    /// [`StatsError::InvalidBinCount`] when the rule degenerates (zero
    /// range or zero interquartile range).
    pub fn new(stats: &DescriptiveStatistics) -> Result<Self, StatsError> {
        let width = 2.0 * stats.iqr()? * (stats.len() as f64).powf(-1.0 / 3.0);
        if width <= 0.0 || stats.range()? <= 0.0 {
            return Err(StatsError::InvalidBinCount { n: 0 });
        }
        let bins = (stats.range()? / width).ceil() as usize;
        Self::with_bins(stats, bins)
    }

    /// Bins a summary into an explicit number of equal-width bins.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySample`] for an empty summary and
    /// [`StatsError::InvalidBinCount`] for zero bins or zero range.
    pub fn with_bins(stats: &DescriptiveStatistics, bins: usize) -> Result<Self, StatsError> {
        if bins == 0 {
            return Err(StatsError::InvalidBinCount { n: 0 });
        }
        let range = stats.range()?;
        if range <= 0.0 {
            return Err(StatsError::InvalidBinCount { n: bins });
        }
        let min = stats.min()?;
        let max = stats.max()?;
        let bin_width = range / bins as f64;

        let mut frequencies = vec![0u64; bins];
        let mut max_frequency = 0u64;
        for &sample in stats.samples() {
            let bin = if sample == max {
                bins - 1
            } else {
                ((sample - min) / bin_width).floor() as usize
            };
            frequencies[bin] += 1;
            max_frequency = max_frequency.max(frequencies[bin]);
        }

        Ok(Self {
            frequencies,
            max_frequency,
            min,
            bin_width,
        })
    }

    /// Convenience constructor binning raw samples directly.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Histogram::new`], plus sample validation from
    /// [`DescriptiveStatistics::new`].
    pub fn from_samples(samples: &[f64]) -> Result<Self, StatsError> {
        Self::new(&DescriptiveStatistics::new(samples)?)
    }

    /// Returns the per-bin occurrence counts.
    pub fn frequencies(&self) -> &[u64] {
        &self.frequencies
    }

    /// Returns the number of bins.
    pub fn bins(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns the largest single-bin count.
    pub fn max_frequency(&self) -> u64 {
        self.max_frequency
    }

    /// Returns the inclusive lower edge of the first bin.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the width of each bin.
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_explicit_bins() {
        let stats = DescriptiveStatistics::new(&[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]).unwrap();
        let hist = Histogram::with_bins(&stats, 3).unwrap();
        assert_eq!(hist.bins(), 3);
        assert_eq!(hist.frequencies(), &[2, 2, 3]);
        assert_eq!(hist.max_frequency(), 3);
        assert_relative_eq!(hist.bin_width(), 1.0);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let stats = DescriptiveStatistics::new(&[0.0, 1.0, 2.0, 4.0, 4.0, 4.0]).unwrap();
        let hist = Histogram::with_bins(&stats, 4).unwrap();
        assert_eq!(hist.frequencies()[3], 3);
        let total: u64 = hist.frequencies().iter().sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_freedman_diaconis_bin_count() {
        // range = 9, IQR = 4.5, n = 10: h = 9 / 10^(1/3), bins = ceil(10^(1/3)) = 3.
        let stats =
            DescriptiveStatistics::new(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
                .unwrap();
        let hist = Histogram::new(&stats).unwrap();
        assert_eq!(hist.bins(), 3);
        let total: u64 = hist.frequencies().iter().sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let constant = DescriptiveStatistics::new(&[5.0, 5.0, 5.0]).unwrap();
        assert!(matches!(
            Histogram::new(&constant),
            Err(StatsError::InvalidBinCount { .. })
        ));
        assert!(matches!(
            Histogram::with_bins(&constant, 4),
            Err(StatsError::InvalidBinCount { .. })
        ));

        let spread = DescriptiveStatistics::new(&[1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            Histogram::with_bins(&spread, 0),
            Err(StatsError::InvalidBinCount { n: 0 })
        ));
    }

    #[test]
    fn test_from_samples_counts_everything() {
        let hist = Histogram::from_samples(&[1.0, 2.0, 2.5, 3.0, 10.0, 11.0]).unwrap();
        let total: u64 = hist.frequencies().iter().sum();
        assert_eq!(total, 6);
        assert!(hist.max_frequency() >= 1);
    }

    #[test]
    fn test_print_scale_constant() {
        assert_relative_eq!(PRINT_SCALE, 0.04);
    }
}
