//! Error types for distribution construction and evaluation.

use randstat_core::types::{FunctionError, QuadratureError, SolverError};
use thiserror::Error;

/// Errors raised by distribution constructors, moment queries and quantile
/// evaluation.
///
/// Parameter and probability validation happens eagerly, so downstream
/// draw loops never have to re-check their inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionError {
    /// A distribution parameter lies outside its valid domain.
    #[error("Parameter {name} = {value} outside valid domain")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A probability argument lies outside [0, 1].
    #[error("Probability {p} outside [0, 1]")]
    ProbabilityOutOfRange {
        /// The rejected probability.
        p: f64,
    },

    /// The requested quantity does not exist for this distribution.
    ///
    /// The Cauchy distribution has no mean or variance, and Student's t
    /// has no variance for one degree of freedom or fewer.
    #[error("{what} is undefined for this distribution")]
    Undefined {
        /// Description of the undefined quantity.
        what: &'static str,
    },

    /// A numerical kernel failed while evaluating the distribution.
    #[error(transparent)]
    Function(#[from] FunctionError),

    /// Construction of a quadrature rule failed.
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}

impl From<SolverError> for DistributionError {
    fn from(err: SolverError) -> Self {
        Self::Function(err.into())
    }
}

// ============================================================================
// TESTS
// ============================================================================
