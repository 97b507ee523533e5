//! Numerical integration: Gauss–Legendre and composite rules.
//!
//! ## Available Integrators
//!
//! - [`GaussLegendre`]: n-point Gauss–Legendre node/weight table, built from
//!   the Legendre recurrence and Newton root-finding, cached per order
//! - [`gauss_legendre`]: fixed-order Gaussian quadrature over `[a, b]`
//! - [`trapezoid`], [`midpoint`], [`simpson`]: composite fixed-step rules for
//!   callers needing non-Gaussian convergence behaviour or a cross-check of
//!   the Gaussian rule
//!
//! ## Examples
//!
//! ```
//! use randstat_core::math::quadrature::{gauss_legendre, simpson};
//!
//! // ∫₀¹ x² dx = 1/3
//! let gauss = gauss_legendre(|x| x * x, 0.0, 1.0, 10).unwrap();
//! let comp = simpson(|x| x * x, 0.0, 1.0, 100).unwrap();
//! assert!((gauss - 1.0 / 3.0).abs() < 1e-12);
//! assert!((comp - 1.0 / 3.0).abs() < 1e-9);
//! ```

mod composite;
mod legendre;

// Re-export public types at module level
pub use composite::{midpoint, simpson, trapezoid};
pub use legendre::{gauss_legendre, GaussLegendre};
