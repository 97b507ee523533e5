//! Bisection root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Interval-halving root finder for bracketed continuous functions.
///
/// At each step the bracket `[a, b]` with `f(a)·f(b) < 0` is halved by
/// evaluating the midpoint and keeping the half that still brackets the
/// root. Convergence is linear (one bit per iteration) but unconditional:
/// for any continuous function with a sign change the method cannot
/// diverge, which makes it the right tool for inverting monotone CDFs.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use randstat_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// // Solve x³ - x - 2 = 0 on [1, 2]
/// let solver = BisectionSolver::new(SolverConfig::high_precision());
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(f(root).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Solver configuration with tolerance and max iterations
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` inside the bracket `[a, b]`.
    ///
    /// The bracket endpoints must produce function values of opposite sign
    /// (an endpoint that is exactly zero is returned immediately). Iteration
    /// stops once the bracket width drops below `config.tolerance`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `a` - Left bracket endpoint
    /// * `b` - Right bracket endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Bracket midpoint once the width is below tolerance
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have the same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    ///
    /// # Example
    ///
    /// ```
    /// use randstat_core::math::solvers::{BisectionSolver, SolverConfig};
    ///
    /// let solver = BisectionSolver::new(SolverConfig::default());
    /// let root = solver.find_root(|x: f64| x.cos(), 0.0, 3.0).unwrap();
    /// assert!((root - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let two = T::from(2.0).unwrap();
        let (mut lo, mut hi) = if a < b { (a, b) } else { (b, a) };

        let f_lo = f(lo);
        let f_hi = f(hi);
        if f_lo == T::zero() {
            return Ok(lo);
        }
        if f_hi == T::zero() {
            return Ok(hi);
        }
        if (f_lo > T::zero()) == (f_hi > T::zero()) {
            return Err(SolverError::NoBracket {
                a: lo.to_f64().unwrap_or(f64::NAN),
                b: hi.to_f64().unwrap_or(f64::NAN),
            });
        }

        let lo_is_negative = f_lo < T::zero();
        for _iteration in 0..self.config.max_iterations {
            let mid = (lo + hi) / two;
            if hi - lo < self.config.tolerance {
                return Ok(mid);
            }

            let f_mid = f(mid);
            if !f_mid.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Bisection midpoint produced non-finite value".to_string(),
                ));
            }

            // Keep the half whose endpoints still differ in sign.
            if (f_mid < T::zero()) == lo_is_negative {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sqrt_2() {
        let solver = BisectionSolver::new(SolverConfig::high_precision());
        let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!(
            (root - std::f64::consts::SQRT_2).abs() < 1e-12,
            "Expected √2 ≈ {}, got {}",
            std::f64::consts::SQRT_2,
            root
        );
    }

    #[test]
    fn test_find_sin_root() {
        let solver = BisectionSolver::with_defaults();
        let root = solver.find_root(|x: f64| x.sin(), 2.0, 4.0).unwrap();
        assert!((root - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_decreasing_function() {
        // Works regardless of which endpoint is negative.
        let solver = BisectionSolver::with_defaults();
        let root = solver.find_root(|x: f64| 1.0 - x, 0.0, 3.0).unwrap();
        assert!((root - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_swapped_bracket_endpoints() {
        let solver = BisectionSolver::with_defaults();
        let root = solver.find_root(|x: f64| x * x - 2.0, 2.0, 0.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_exact_zero_at_endpoint() {
        let solver = BisectionSolver::with_defaults();
        let root = solver.find_root(|x: f64| x, 0.0, 1.0).unwrap();
        assert_eq!(root, 0.0);
    }

    #[test]
    fn test_no_bracket() {
        let solver = BisectionSolver::with_defaults();
        let result = solver.find_root(|x: f64| x * x + 1.0, -1.0, 1.0);
        match result.unwrap_err() {
            SolverError::NoBracket { .. } => {}
            other => panic!("Expected NoBracket error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_iterations_exceeded() {
        // Three iterations cannot shrink [0, 2] below 1e-15.
        let solver = BisectionSolver::new(SolverConfig::new(1e-15, 3));
        let result = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0);
        match result.unwrap_err() {
            SolverError::MaxIterationsExceeded { iterations } => {
                assert_eq!(iterations, 3);
            }
            other => panic!("Expected MaxIterationsExceeded error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_accessor() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-8, 50));
        assert!((solver.config().tolerance - 1e-8).abs() < 1e-15);
        assert_eq!(solver.config().max_iterations, 50);
    }

    #[test]
    fn test_with_f32() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-6_f32, 60));
        let root = solver.find_root(|x: f32| x * x - 2.0, 0.0, 2.0).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-5);
    }
}
