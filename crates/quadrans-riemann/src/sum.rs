//! Sequential Riemann summation.
//!
//! The kernel walks an index range, sampling the integrand at one point per
//! sub-interval and accumulating the raw samples; the caller scales the
//! accumulated sum by the step exactly once. Keeping the scaling out of the
//! loop means the sequential and chunked paths round the same way on the
//! same sample points.

use std::ops::Range;

use crate::error::QuadratureError;
use crate::rule::QuadratureRule;

/// Accumulates `Σ f(a + (i + offset) * step)` over `indices`.
///
/// The sum is not scaled by the step.
pub(crate) fn sample_sum<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    step: f64,
    indices: Range<usize>,
    rule: QuadratureRule,
) -> f64 {
    let offset = rule.offset();
    let mut acc = 0.0;
    for i in indices {
        acc += f(a + (i as f64 + offset) * step);
    }
    acc
}

/// Approximates ∫ₐᵇ f(x) dx on `n` equal sub-intervals with the default
/// midpoint rule.
///
/// With `a > b` the step is negative and the result is signed, matching
/// ∫ₐᵇ = −∫ᵦₐ.
///
/// # Errors
///
/// Returns [`QuadratureError::ZeroSubintervals`] when `n` is zero.
///
/// # Examples
///
/// ```
/// use quadrans_riemann::integrate;
///
/// // ∫₀^π cos(x) dx = 0
/// let value = integrate(&|x: f64| x.cos(), 0.0, std::f64::consts::PI, 10_000).unwrap();
/// assert!(value.abs() < 1e-3);
///
/// // ∫₀¹ x² dx = 1/3
/// let value = integrate(&|x: f64| x * x, 0.0, 1.0, 10_000).unwrap();
/// assert!((value - 1.0 / 3.0).abs() < 1e-3);
/// ```
pub fn integrate<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
) -> Result<f64, QuadratureError> {
    integrate_with_rule(f, a, b, n, QuadratureRule::default())
}

/// Approximates ∫ₐᵇ f(x) dx on `n` equal sub-intervals with an explicit
/// sampling rule.
///
/// `QuadratureRule::LeftEdge` reproduces the classic left-rectangle
/// estimator; `QuadratureRule::Midpoint` halves a step's worth of bias for
/// one extra addition per sample.
///
/// # Errors
///
/// Returns [`QuadratureError::ZeroSubintervals`] when `n` is zero.
pub fn integrate_with_rule<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    rule: QuadratureRule,
) -> Result<f64, QuadratureError> {
    if n == 0 {
        return Err(QuadratureError::ZeroSubintervals);
    }
    let step = (b - a) / n as f64;
    Ok(sample_sum(f, a, step, 0..n, rule) * step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sin_integral() {
        // ∫₀^π sin(x) dx = 2
        let value = integrate(&|x: f64| x.sin(), 0.0, PI, 100_000).unwrap();
        assert!((value - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_polynomial() {
        // ∫₀¹ x² dx = 1/3
        let value = integrate(&|x: f64| x * x, 0.0, 1.0, 1_000_000).unwrap();
        assert!((value - 1.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_reversed_bounds() {
        // ∫π⁰ sin(x) dx = -2
        let value = integrate(&|x: f64| x.sin(), PI, 0.0, 1_000).unwrap();
        assert!((value + 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_orientation_antisymmetry() {
        let forward = integrate(&|x: f64| x * x, 0.25, 2.0, 1_000).unwrap();
        let backward = integrate(&|x: f64| x * x, 2.0, 0.25, 1_000).unwrap();
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn test_constant_is_exact_for_any_partition() {
        // ∫ c dx = c * (b - a) regardless of n
        for n in [1, 2, 7, 100, 999] {
            let value = integrate(&|_| 2.5, -1.5, 4.0, n).unwrap();
            assert!((value - 2.5 * 5.5).abs() < 1e-12 * 2.5 * 5.5);
        }
    }

    #[test]
    fn test_single_subinterval_is_one_sample() {
        let f = |x: f64| x.exp();
        let (a, b) = (0.25, 1.75);

        let mid = integrate_with_rule(&f, a, b, 1, QuadratureRule::Midpoint).unwrap();
        assert_eq!(mid, f(a + 0.5 * (b - a)) * (b - a));

        let left = integrate_with_rule(&f, a, b, 1, QuadratureRule::LeftEdge).unwrap();
        assert_eq!(left, f(a) * (b - a));
    }

    #[test]
    fn test_iterations_stability() {
        // Refining the partition must not move a converged result much.
        let coarse = integrate(&|x: f64| x.sin(), 0.0, PI, 1_000).unwrap();
        let fine = integrate(&|x: f64| x.sin(), 0.0, PI, 10_000).unwrap();
        assert!((coarse - fine).abs() < 1e-2);
    }

    #[test]
    fn test_convergence_improves_with_n() {
        // ∫₀¹ x³ dx = 1/4
        let err = |n| (integrate(&|x: f64| x * x * x, 0.0, 1.0, n).unwrap() - 0.25).abs();
        assert!(err(1_024) < err(16));
    }

    #[test]
    fn test_rules_differ_and_midpoint_wins() {
        // Left sampling underestimates an increasing integrand; the
        // midpoint rule lands much closer at the same n.
        let exact = 1.0 / 3.0;
        let left =
            integrate_with_rule(&|x: f64| x * x, 0.0, 1.0, 100, QuadratureRule::LeftEdge).unwrap();
        let mid =
            integrate_with_rule(&|x: f64| x * x, 0.0, 1.0, 100, QuadratureRule::Midpoint).unwrap();
        assert!(left < exact);
        assert!((mid - exact).abs() < (left - exact).abs());
    }

    #[test]
    fn test_left_edge_matches_hand_computed_sum() {
        // n = 4 on [0, 1]: (f(0) + f(0.25) + f(0.5) + f(0.75)) / 4
        let f = |x: f64| x + 1.0;
        let value = integrate_with_rule(&f, 0.0, 1.0, 4, QuadratureRule::LeftEdge).unwrap();
        let expected = (f(0.0) + f(0.25) + f(0.5) + f(0.75)) * 0.25;
        assert!((value - expected).abs() < 1e-15);
    }

    #[test]
    fn test_zero_subintervals_rejected() {
        let result = integrate(&|x: f64| x, 0.0, 1.0, 0);
        assert_eq!(result, Err(QuadratureError::ZeroSubintervals));
    }
}
