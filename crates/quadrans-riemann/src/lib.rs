//! Riemann-Sum Quadrature Kernel
//!
//! Approximates ∫ₐᵇ f(x) dx on a fixed partition: [a, b] is split into `n`
//! equal sub-intervals, the integrand is sampled once per sub-interval, the
//! samples are summed, and the sum is scaled by the sub-interval width.
//! The iteration range can additionally be split into contiguous chunks
//! whose partial sums are computed in parallel and reduced in index order.
//!
//! # Quick Start
//!
//! ```
//! use quadrans_riemann::{integrate, integrate_chunked};
//!
//! // ∫₀^π sin(x) dx = 2
//! let seq = integrate(&|x: f64| x.sin(), 0.0, std::f64::consts::PI, 100_000).unwrap();
//! assert!((seq - 2.0).abs() < 1e-4);
//!
//! // Same partition, summed across four chunks.
//! let par = integrate_chunked(&|x: f64| x.sin(), 0.0, std::f64::consts::PI, 100_000, 4).unwrap();
//! assert!((par - seq).abs() < 1e-9);
//! ```
//!
//! # Accuracy
//!
//! Every result is a double-precision approximation; callers compare
//! against a tolerance. The left-edge rule converges as O(1/n), the
//! midpoint rule as O(1/n²). Reversed bounds (`a > b`) yield the signed
//! result, matching ∫ₐᵇ = −∫ᵦₐ.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chunked;
pub mod error;
pub mod rule;
pub mod sum;

pub use chunked::{
    integrate_chunked, integrate_chunked_with_rule, integrate_with_options, QuadratureOptions,
};
pub use error::QuadratureError;
pub use rule::QuadratureRule;
pub use sum::{integrate, integrate_with_rule};
