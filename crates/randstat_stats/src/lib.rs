//! # Randstat Stats (Layer 3: Descriptive Statistics)
//!
//! ## Layer 3 Role
//!
//! randstat_stats summarises observed data:
//! - [`DescriptiveStatistics`](descriptive::DescriptiveStatistics): streaming
//!   sample summary with memoised moments and order-statistic quantiles
//! - [`Histogram`](histogram::Histogram): frequency binning with
//!   Freedman-Diaconis automatic bin width
//! - [`proportion`]: normal-approximation confidence intervals for 0/1 data
//!
//! The only upward dependency is the standard normal quantile from
//! `randstat_distributions`, used for confidence levels.
//!
//! ## Usage Example
//!
//! ```rust
//! use randstat_stats::descriptive::DescriptiveStatistics;
//!
//! let stats = DescriptiveStatistics::new(&[3.0, 5.0, 7.0, 8.0, 9.0]).unwrap();
//! assert_eq!(stats.median().unwrap(), 7.0);
//! assert_eq!(stats.min().unwrap(), 3.0);
//! ```

#![deny(missing_docs)]

pub mod descriptive;
pub mod histogram;
pub mod proportion;
pub mod types;

pub use descriptive::DescriptiveStatistics;
pub use histogram::Histogram;
pub use types::StatsError;
