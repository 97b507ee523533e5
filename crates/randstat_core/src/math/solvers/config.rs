//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Provides common settings shared across solver implementations,
/// including convergence tolerance and iteration limits.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use randstat_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    ///
    /// For bracketing solvers this bounds the final bracket width.
    /// Smaller values provide more precision but may require more iterations.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// If the solver doesn't converge within this limit,
    /// it returns `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration with sensible values.
    ///
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use randstat_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses a 1e-15 bracket-width tolerance and 200 iterations; with an
    /// initial bracket of unit width, bisection reaches the tolerance in
    /// roughly 50 halvings, so the budget is generous.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-15).unwrap(),
            max_iterations: 200,
        }
    }
}
