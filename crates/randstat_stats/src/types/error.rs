//! Error types for the statistics layer.

use randstat_distributions::DistributionError;
use thiserror::Error;

/// Errors raised by descriptive statistics, histogram binning and
/// confidence interval helpers.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatsError {
    /// An operation needs at least one sample.
    #[error("Sample set is empty")]
    EmptySample,

    /// A sample value was NaN or infinite.
    #[error("Sample value {value} is not finite")]
    NonFiniteSample {
        /// The offending value.
        value: f64,
    },

    /// A quantile request with `k > q` or `q = 0`.
    #[error("Quantile {k}/{q} is not a valid order")]
    InvalidQuantile {
        /// Requested quantile index.
        k: u32,
        /// Number of quantile divisions.
        q: u32,
    },

    /// A percentile outside [0, 100].
    #[error("Percentile {p} outside [0, 100]")]
    InvalidPercentile {
        /// The rejected percentile.
        p: f64,
    },

    /// A moment order of zero has no meaning.
    #[error("Central moment order must be at least 1, got {n}")]
    InvalidMomentOrder {
        /// The rejected order.
        n: u32,
    },

    /// A histogram cannot be built with the given bin count, or the data
    /// admits no automatic bin width (zero range or zero IQR).
    #[error("Cannot bin data into {n} bins")]
    InvalidBinCount {
        /// The rejected or derived bin count.
        n: usize,
    },

    /// A confidence level outside the open interval (0, 1).
    #[error("Confidence level {level} outside (0, 1)")]
    InvalidConfidenceLevel {
        /// The rejected level.
        level: f64,
    },

    /// A proportion count that is neither 0 nor 1.
    #[error("Count {value} is not a 0/1 observation")]
    NonBinaryCount {
        /// The rejected observation.
        value: f64,
    },

    /// A distribution evaluation failed underneath a statistics helper.
    #[error(transparent)]
    Distribution(#[from] DistributionError),
}

// ============================================================================
// TESTS
// ============================================================================
