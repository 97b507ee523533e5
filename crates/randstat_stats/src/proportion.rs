//! Normal-approximation confidence intervals for sample proportions.

use randstat_distributions::distribution::{Distribution, Gaussian};

use crate::types::StatsError;

/// Point estimate and margin for a proportion: the interval is
/// `p_hat - margin ..= p_hat + margin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Sample proportion of successes.
    pub p_hat: f64,
    /// Half-width of the interval at the requested level.
    pub margin: f64,
}

/// Wald confidence interval for the success probability behind 0/1
/// observations: `margin = z * sqrt(p_hat (1 - p_hat) / n)` with `z` the
/// standard normal quantile at `(1 + level) / 2`.
///
/// # Errors
///
/// Returns [`StatsError::EmptySample`] for no observations,
/// [`StatsError::NonBinaryCount`] for any value other than 0 or 1, and
/// [`StatsError::InvalidConfidenceLevel`] unless `level` lies in (0, 1).
///
/// # Examples
///
/// ```rust
/// use randstat_stats::proportion::confidence_interval;
///
/// let mut counts = vec![1.0; 220];
/// counts.extend(vec![0.0; 180]);
/// let ci = confidence_interval(&counts, 0.95).unwrap();
/// assert!((ci.p_hat - 0.55).abs() < 1e-12);
/// assert!((ci.margin - 0.04875).abs() < 1e-3);
/// ```
pub fn confidence_interval(counts: &[f64], level: f64) -> Result<ConfidenceInterval, StatsError> {
    if counts.is_empty() {
        return Err(StatsError::EmptySample);
    }
    if !(level > 0.0 && level < 1.0) {
        return Err(StatsError::InvalidConfidenceLevel { level });
    }
    let mut successes = 0.0;
    for &count in counts {
        if count != 0.0 && count != 1.0 {
            return Err(StatsError::NonBinaryCount { value: count });
        }
        successes += count;
    }
    let n = counts.len() as f64;
    let p_hat = successes / n;

    let normal = Gaussian::standard()?;
    let z = normal.inverse_cdf((1.0 + level) / 2.0)?;
    let margin = z * (p_hat * (1.0 - p_hat) / n).sqrt();
    Ok(ConfidenceInterval { p_hat, margin })
}

/// The 95% Wald interval.
///
/// # Errors
///
/// Same conditions as [`confidence_interval`].
pub fn ci95(counts: &[f64]) -> Result<ConfidenceInterval, StatsError> {
    confidence_interval(counts, 0.95)
}

/// The 99% Wald interval.
///
/// # Errors
///
/// Same conditions as [`confidence_interval`].
pub fn ci99(counts: &[f64]) -> Result<ConfidenceInterval, StatsError> {
    confidence_interval(counts, 0.99)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn binary_counts(successes: usize, total: usize) -> Vec<f64> {
        let mut counts = vec![1.0; successes];
        counts.extend(vec![0.0; total - successes]);
        counts
    }

    #[test]
    fn test_reference_interval() {
        // 220 successes in 400 trials at 95%: z = 1.95996...,
        // margin = z * sqrt(0.55 * 0.45 / 400) = 0.048754.
        let ci = ci95(&binary_counts(220, 400)).unwrap();
        assert_relative_eq!(ci.p_hat, 0.55);
        assert_relative_eq!(ci.margin, 0.048_754, epsilon = 1e-5);
    }

    #[test]
    fn test_higher_level_widens_interval() {
        let counts = binary_counts(50, 100);
        let narrow = ci95(&counts).unwrap();
        let wide = ci99(&counts).unwrap();
        assert_eq!(narrow.p_hat, wide.p_hat);
        assert!(wide.margin > narrow.margin);
    }

    #[test]
    fn test_degenerate_proportions_have_zero_margin() {
        let all = confidence_interval(&binary_counts(10, 10), 0.95).unwrap();
        assert_eq!(all.p_hat, 1.0);
        assert_eq!(all.margin, 0.0);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            confidence_interval(&[], 0.95),
            Err(StatsError::EmptySample)
        ));
        assert!(matches!(
            confidence_interval(&[1.0, 0.0], 1.0),
            Err(StatsError::InvalidConfidenceLevel { .. })
        ));
        assert!(matches!(
            confidence_interval(&[1.0, 0.0], 0.0),
            Err(StatsError::InvalidConfidenceLevel { .. })
        ));
        assert!(matches!(
            confidence_interval(&[1.0, 0.5], 0.95),
            Err(StatsError::NonBinaryCount { .. })
        ));
    }

    #[test]
    fn test_margin_shrinks_with_sample_size() {
        let small = ci95(&binary_counts(30, 60)).unwrap();
        let large = ci95(&binary_counts(300, 600)).unwrap();
        assert!(large.margin < small.margin);
    }
}
