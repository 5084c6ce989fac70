//! Chunked Riemann summation.
//!
//! The index range of a partition is split into contiguous chunks, one
//! partial sum per chunk. Chunks share the integrand, the origin, and the
//! global step read-only, and each writes its partial sum into its own slot
//! of an order-preserving buffer. Every chunk is joined before the slots
//! are reduced, and the reduction always runs in index order, so a given
//! chunk layout rounds the same way on every run.

use std::ops::Range;

use rayon::prelude::*;

use crate::error::QuadratureError;
use crate::rule::QuadratureRule;
use crate::sum::sample_sum;

/// Options for [`integrate_with_options`].
#[derive(Clone, Debug)]
pub struct QuadratureOptions {
    /// Sampling rule applied to every sub-interval.
    pub rule: QuadratureRule,
    /// Number of contiguous chunks whose partial sums are computed in
    /// parallel. `1` keeps the whole computation on the calling thread.
    pub jobs: usize,
}

impl Default for QuadratureOptions {
    fn default() -> Self {
        Self {
            rule: QuadratureRule::default(),
            jobs: 1,
        }
    }
}

/// Splits `0..n` into `jobs` contiguous blocks of `n / jobs` indices each,
/// with the remainder assigned to the last block.
fn chunk_ranges(n: usize, jobs: usize) -> Vec<Range<usize>> {
    let per_chunk = n / jobs;
    (0..jobs)
        .map(|job| {
            let start = job * per_chunk;
            let end = if job + 1 == jobs {
                n
            } else {
                start + per_chunk
            };
            start..end
        })
        .collect()
}

fn check_partition(n: usize, jobs: usize) -> Result<(), QuadratureError> {
    if n == 0 {
        return Err(QuadratureError::ZeroSubintervals);
    }
    if jobs == 0 {
        return Err(QuadratureError::ZeroJobs);
    }
    if jobs > n {
        return Err(QuadratureError::JobsExceedSubintervals {
            jobs,
            subintervals: n,
        });
    }
    Ok(())
}

/// Approximates ∫ₐᵇ f(x) dx on `n` sub-intervals summed across `jobs`
/// chunks, with the default midpoint rule.
///
/// # Errors
///
/// Returns [`QuadratureError::ZeroSubintervals`] when `n` is zero,
/// [`QuadratureError::ZeroJobs`] when `jobs` is zero, and
/// [`QuadratureError::JobsExceedSubintervals`] when `jobs > n`.
///
/// # Examples
///
/// ```
/// use quadrans_riemann::integrate_chunked;
///
/// // ∫₀^π sin(x) dx = 2, split across four chunks
/// let value = integrate_chunked(&|x: f64| x.sin(), 0.0, std::f64::consts::PI, 100_000, 4).unwrap();
/// assert!((value - 2.0).abs() < 1e-4);
/// ```
pub fn integrate_chunked<F>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    jobs: usize,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64 + Sync,
{
    integrate_chunked_with_rule(f, a, b, n, jobs, QuadratureRule::default())
}

/// Approximates ∫ₐᵇ f(x) dx on `n` sub-intervals summed across `jobs`
/// chunks, with an explicit sampling rule.
///
/// Every chunk samples exactly the points the sequential pass samples, at
/// the same global step; only the order in which partial sums are rounded
/// together differs, so the result matches the sequential one within
/// floating-point tolerance.
///
/// # Errors
///
/// Same conditions as [`integrate_chunked`].
///
/// # Panics
///
/// A panic raised by `f` resumes in the caller only after every chunk has
/// stopped; no worker is left running and no partial result is read.
pub fn integrate_chunked_with_rule<F>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    jobs: usize,
    rule: QuadratureRule,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64 + Sync,
{
    check_partition(n, jobs)?;
    let step = (b - a) / n as f64;
    if jobs == 1 {
        return Ok(sample_sum(f, a, step, 0..n, rule) * step);
    }

    let partials: Vec<f64> = chunk_ranges(n, jobs)
        .into_par_iter()
        .map(|indices| sample_sum(f, a, step, indices, rule))
        .collect();

    Ok(partials.iter().sum::<f64>() * step)
}

/// Dispatch entry point combining the sampling rule and the chunk count.
///
/// # Errors
///
/// Same conditions as [`integrate_chunked`].
///
/// # Examples
///
/// ```
/// use quadrans_riemann::{integrate_with_options, QuadratureOptions, QuadratureRule};
///
/// let options = QuadratureOptions {
///     rule: QuadratureRule::LeftEdge,
///     jobs: 2,
/// };
/// let value = integrate_with_options(&|x: f64| x * x, 0.0, 1.0, 100_000, options).unwrap();
/// assert!((value - 1.0 / 3.0).abs() < 1e-4);
/// ```
pub fn integrate_with_options<F>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    options: QuadratureOptions,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64 + Sync,
{
    integrate_chunked_with_rule(f, a, b, n, options.jobs, options.rule)
}
