//! # Quadrans
//!
//! Fixed-partition Riemann-sum quadrature for `f64` integrands.
//!
//! Quadrans approximates ∫ₐᵇ f(x) dx by splitting [a, b] into `n` equal
//! sub-intervals, sampling the integrand once per sub-interval, and scaling
//! the accumulated sum by the sub-interval width.
//!
//! ## Features
//!
//! - **Two sampling rules**: left-edge rectangles (first order) and
//!   midpoint rectangles (second order, the default)
//! - **Chunked parallel summation**: contiguous chunks of the partition are
//!   summed concurrently via rayon and reduced in a fixed order
//! - **Up-front validation**: degenerate partitions are rejected before the
//!   integrand is ever evaluated
//!
//! ## Quick Start
//!
//! ```rust
//! use quadrans::prelude::*;
//!
//! // ∫₀^π sin(x) dx = 2
//! let value = integrate(&|x: f64| x.sin(), 0.0, std::f64::consts::PI, 100_000).unwrap();
//! assert!((value - 2.0).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quadrans_riemann as riemann;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quadrans_riemann::{
        integrate, integrate_chunked, integrate_with_options, QuadratureError, QuadratureOptions,
        QuadratureRule,
    };
}
