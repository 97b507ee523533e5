//! Composite fixed-step integration rules.
//!
//! These rules trade the spectral accuracy of the Gaussian rule for
//! predictable polynomial convergence orders, which makes them useful as
//! independent cross-checks.

use crate::types::QuadratureError;

/// Composite trapezoid rule over `n` subintervals.
///
/// Error falls as `O(h²)` for twice-differentiable integrands.
///
/// # Errors
/// `QuadratureError::InvalidSubdivision` when `n < 1`.
///
/// # Examples
/// ```
/// use randstat_core::math::quadrature::trapezoid;
///
/// let v = trapezoid(|x| x, 0.0, 2.0, 100).unwrap();
/// assert!((v - 2.0).abs() < 1e-12);
/// ```
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if n < 1 {
        return Err(QuadratureError::InvalidSubdivision { n });
    }
    let h = (b - a) / n as f64;
    let endpoints = f(a) + f(b);
    let mut interior = 0.0;
    for i in 1..n {
        interior += f(a + i as f64 * h);
    }
    Ok(h * (endpoints + 2.0 * interior) / 2.0)
}

/// Composite midpoint rule with `n + 2` steps and even-offset evaluation
/// points.
///
/// This is the open Newton–Cotes variant that never evaluates the
/// integrand at `a` or `b`, useful when the endpoints are singular.
///
/// # Errors
/// `QuadratureError::InvalidSubdivision` when `n < 1`.
pub fn midpoint<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if n < 1 {
        return Err(QuadratureError::InvalidSubdivision { n });
    }
    let h = (b - a) / (n + 2) as f64;
    let mut sum = 0.0;
    let mut i = 0;
    while i <= n {
        sum += f(a + (i + 1) as f64 * h);
        i += 2;
    }
    Ok(2.0 * h * sum)
}

/// Composite Simpson rule over `n` subintervals.
///
/// Interior points alternate weights 4 (odd index) and 2 (even index);
/// `n` should be even for the classical `O(h⁴)` error bound.
///
/// # Errors
/// `QuadratureError::InvalidSubdivision` when `n < 1`.
///
/// # Examples
/// ```
/// use randstat_core::math::quadrature::simpson;
///
/// // Simpson is exact for cubics
/// let v = simpson(|x| x * x * x, 0.0, 1.0, 2).unwrap();
/// assert!((v - 0.25).abs() < 1e-12);
/// ```
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if n < 1 {
        return Err(QuadratureError::InvalidSubdivision { n });
    }
    let h = (b - a) / n as f64;
    let endpoints = f(a) + f(b);
    let mut odd = 0.0;
    let mut even = 0.0;
    for i in 1..n {
        let x = a + i as f64 * h;
        if i % 2 == 0 {
            even += f(x);
        } else {
            odd += f(x);
        }
    }
    Ok(h * (endpoints + 2.0 * even + 4.0 * odd) / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trapezoid_linear_exact() {
        let v = trapezoid(|x| 3.0 * x + 1.0, 0.0, 4.0, 7).unwrap();
        assert_relative_eq!(v, 28.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_quadratic_converges() {
        let v = trapezoid(|x| x * x, 0.0, 1.0, 1000).unwrap();
        assert_relative_eq!(v, 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_midpoint_linear_exact() {
        let v = midpoint(|x| 2.0 * x, 0.0, 1.0, 100).unwrap();
        assert_relative_eq!(v, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_midpoint_avoids_endpoints() {
        // 1/√x is singular at 0 but the open rule never touches it.
        let v = midpoint(|x| 1.0 / x.sqrt(), 0.0, 1.0, 100_000).unwrap();
        assert!((v - 2.0).abs() < 0.05);
    }

    #[test]
    fn test_simpson_cubic_exact() {
        let v = simpson(|x| x * x * x - x, 0.0, 2.0, 2).unwrap();
        assert_relative_eq!(v, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_sin() {
        let v = simpson(|x| x.sin(), 0.0, std::f64::consts::PI, 100).unwrap();
        assert_relative_eq!(v, 2.0, epsilon = 1e-7);
    }

    #[test]
    fn test_invalid_subdivision() {
        assert!(trapezoid(|x| x, 0.0, 1.0, 0).is_err());
        assert!(midpoint(|x| x, 0.0, 1.0, 0).is_err());
        assert!(simpson(|x| x, 0.0, 1.0, 0).is_err());
    }

    #[test]
    fn test_rules_agree_on_smooth_integrand() {
        let f = |x: f64| (x * x / 2.0).exp().recip();
        let t = trapezoid(f, -3.0, 3.0, 10_000).unwrap();
        let s = simpson(f, -3.0, 3.0, 10_000).unwrap();
        let m = midpoint(f, -3.0, 3.0, 10_000).unwrap();
        assert_relative_eq!(t, s, epsilon = 1e-6);
        assert_relative_eq!(m, s, epsilon = 1e-3);
    }
}
