//! Gauss–Legendre node and weight construction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::types::QuadratureError;

/// Newton iteration cap per root.
///
/// Legendre roots are well separated and the iteration almost always
/// converges in fewer than 10 steps; on cap the current iterate is kept as
/// the best available estimate.
const MAX_NEWTON_ITERATIONS: usize = 20;

/// Absolute Newton step tolerance.
const NEWTON_TOLERANCE: f64 = 1e-14;

/// Per-order node/weight cache.
///
/// Tables are immutable once built, so the cache never invalidates; the
/// mutex only serialises first-time construction per order.
static TABLE_CACHE: OnceLock<Mutex<HashMap<usize, Arc<GaussLegendre>>>> = OnceLock::new();

/// An n-point Gauss–Legendre quadrature table on `[-1, 1]`.
///
/// Construction builds the coefficient table of the Legendre polynomials
/// `P_0..P_n` by the three-term recurrence
/// `i·P_i = (2i − 1)·x·P_{i−1} − (i − 1)·P_{i−2}`, locates the `n` real
/// roots of `P_n` by Newton iteration with pairwise deflation (roots come in
/// `±` pairs and are removed from the working polynomial by synthetic
/// division as they are found), re-polishes each root by Newton against the
/// recurrence-evaluated `P_n`, and derives the weights from
/// `w_j = −2 / ((n + 1)·P_n′(r_j)·P_{n+1}(r_j))` with `P_n′` and `P_{n+1}`
/// also evaluated by recurrence.
///
/// Invariants: the weights sum to 2 and the roots are symmetric about 0.
///
/// # Examples
///
/// ```
/// use randstat_core::math::quadrature::GaussLegendre;
///
/// let table = GaussLegendre::new(5).unwrap();
/// let weight_sum: f64 = table.nodes().iter().map(|&(_, w)| w).sum();
/// assert!((weight_sum - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    /// Quadrature order (number of nodes).
    order: usize,
    /// `(root, weight)` pairs ordered by ascending root.
    nodes: Vec<(f64, f64)>,
}

impl GaussLegendre {
    /// Build the n-point table.
    ///
    /// # Errors
    /// `QuadratureError::InvalidOrder` when `n < 1`.
    pub fn new(n: usize) -> Result<Self, QuadratureError> {
        if n < 1 {
            return Err(QuadratureError::InvalidOrder { n });
        }

        let polys = generate_polynomials(n);
        let mut roots = find_roots(&polys[n]);
        roots.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));

        let nodes = roots
            .into_iter()
            .map(|r| {
                let (_, slope) = legendre_value_derivative(n, r);
                let (next_value, _) = legendre_value_derivative(n + 1, r);
                let weight = -2.0 / ((n as f64 + 1.0) * slope * next_value);
                (r, weight)
            })
            .collect();

        Ok(Self { order: n, nodes })
    }

    /// Fetch (building on first use) the shared table for order `n`.
    ///
    /// Tables are immutable per order, so a process-wide map keyed by order
    /// needs no invalidation; construction is serialised behind a mutex so
    /// concurrent first readers observe a fully built table.
    ///
    /// # Errors
    /// `QuadratureError::InvalidOrder` when `n < 1`.
    pub fn cached(n: usize) -> Result<Arc<Self>, QuadratureError> {
        let cache = TABLE_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
        let mut map = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(table) = map.get(&n) {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(Self::new(n)?);
        map.insert(n, Arc::clone(&table));
        Ok(table)
    }

    /// The quadrature order `n`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The `(root, weight)` pairs ordered by ascending root.
    pub fn nodes(&self) -> &[(f64, f64)] {
        &self.nodes
    }

    /// Integrate `f` over `[a, b]` with this table.
    ///
    /// Maps each node from `[-1, 1]` via `x = (a + b + r·(b − a)) / 2` and
    /// scales the weighted sum by `(b − a) / 2`.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mut approx = 0.0;
        for &(root, weight) in &self.nodes {
            let x = (a + b + root * (b - a)) / 2.0;
            approx += weight * f(x);
        }
        approx * (b - a) / 2.0
    }
}

/// Fixed-order Gauss–Legendre quadrature of `f` over `[a, b]`.
///
/// Uses the process-wide cached table for order `n`.
///
/// # Errors
/// `QuadratureError::InvalidOrder` when `n < 1`.
///
/// # Examples
///
/// ```
/// use randstat_core::math::quadrature::gauss_legendre;
///
/// // Constants integrate exactly at any order
/// let area = gauss_legendre(|_| 1.0, 0.0, 5.0, 20).unwrap();
/// assert!((area - 5.0).abs() < 1e-9);
/// ```
pub fn gauss_legendre<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    Ok(GaussLegendre::cached(n)?.integrate(f, a, b))
}

/// Coefficient rows of `P_0..P_{max}` in ascending powers of `x`.
///
/// Row `i` holds the coefficients of `P_i`, padded with zeros to a uniform
/// width of `max + 1`.
fn generate_polynomials(max: usize) -> Vec<Vec<f64>> {
    let width = max + 1;
    let mut p = vec![vec![0.0; width]; width];
    p[0][0] = 1.0;
    if max >= 1 {
        p[1][1] = 1.0;
    }
    for i in 2..=max {
        for j in 0..=i {
            let mut c = 0.0;
            if j < i - 1 {
                c -= ((i - 1) as f64 / i as f64) * p[i - 2][j];
            }
            if j > 0 {
                c += ((2 * i - 1) as f64 / i as f64) * p[i - 1][j - 1];
            }
            p[i][j] = c;
        }
    }
    p
}

/// Derivative coefficients of a polynomial in ascending powers.
fn differentiate(poly: &[f64]) -> Vec<f64> {
    let mut d = vec![0.0; poly.len().saturating_sub(1)];
    for (j, slot) in d.iter_mut().enumerate() {
        *slot = (j + 1) as f64 * poly[j + 1];
    }
    d
}

/// Horner evaluation of a polynomial in ascending powers.
fn evaluate(poly: &[f64], x: f64) -> f64 {
    let mut value = 0.0;
    for &c in poly.iter().rev() {
        value = value * x + c;
    }
    value
}

/// Degree of a coefficient row (highest non-zero power).
fn degree(poly: &[f64]) -> usize {
    poly.iter().rposition(|&c| c != 0.0).unwrap_or(0)
}

/// All real roots of a Legendre polynomial from its coefficient row.
///
/// Exploits the `±` pairing: for odd degree the zero root is recorded and
/// divided out first, then each Newton-located root `r` and its mirror `−r`
/// are deflated together by synthetic division, halving the remaining work.
fn find_roots(poly: &[f64]) -> Vec<f64> {
    let n = degree(poly);
    let mut working: Vec<f64> = poly[..=n].to_vec();
    let mut roots = Vec::with_capacity(n);

    // Odd degrees have a root at the origin; divide it out up front.
    if working[0] == 0.0 {
        roots.push(0.0);
        working.remove(0);
    }

    while roots.len() < n {
        let derivative = differentiate(&working);

        // Newton from the right edge of the interval; the largest remaining
        // root is always attracted from r = 1.
        let mut r = 1.0;
        let mut r_old = 0.0;
        for _ in 0..MAX_NEWTON_ITERATIONS {
            r -= evaluate(&working, r) / evaluate(&derivative, r);
            if (r - r_old).abs() < NEWTON_TOLERANCE {
                break;
            }
            r_old = r;
        }

        deflate(&mut working, r);
        roots.push(r);
        if roots.len() == n {
            break;
        }
        deflate(&mut working, -r);
        roots.push(-r);
    }

    // Rounding from earlier synthetic divisions drifts the later roots, and
    // the coefficient rows themselves lose precision past degree ~20; a
    // short Newton pass against the recurrence-evaluated `P_n` restores
    // each estimate to machine precision.
    for r in &mut roots {
        *r = polish(n, *r);
    }
    roots
}

/// Newton correction of a near-converged root estimate of `P_n`.
fn polish(n: usize, mut r: f64) -> f64 {
    for _ in 0..2 {
        let (value, slope) = legendre_value_derivative(n, r);
        let step = value / slope;
        r -= step;
        if step.abs() < NEWTON_TOLERANCE {
            break;
        }
    }
    r
}

/// Value and derivative of `P_n` at `x` by the three-term recurrence.
///
/// Stable where the monomial coefficient rows are not: the coefficients of
/// `P_n` exceed 1e7 by `n = 24`, so Horner evaluation near a root cancels
/// away most significant digits, while the recurrence keeps them all. The
/// derivative uses `P_n′ = n·(x·P_n − P_{n−1}) / (x² − 1)`, so `x` must lie
/// strictly inside `(−1, 1)` for `n ≥ 1`; every Legendre root does.
fn legendre_value_derivative(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let mut previous = 1.0;
    let mut current = x;
    for i in 2..=n {
        let next =
            ((2 * i - 1) as f64 * x * current - (i - 1) as f64 * previous) / i as f64;
        previous = current;
        current = next;
    }
    let slope = n as f64 * (x * current - previous) / (x * x - 1.0);
    (current, slope)
}

/// Synthetic division of an ascending-coefficient polynomial by `(x − r)`.
fn deflate(working: &mut Vec<f64>, r: f64) {
    let d = working.len() - 1;
    for j in (1..=d).rev() {
        working[j - 1] += r * working[j];
    }
    working.remove(0);
}
