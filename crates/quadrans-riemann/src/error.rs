//! Error taxonomy for quadrature calls.
//!
//! Every variant is an invalid-argument condition detected before the
//! integrand is evaluated; no partial computation is performed. A failing
//! integrand itself is not represented here — it fails by panicking, and
//! the panic resumes in the caller.

use thiserror::Error;

/// Rejected argument combinations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuadratureError {
    /// The partition must contain at least one sub-interval.
    #[error("partition needs at least one sub-interval")]
    ZeroSubintervals,
    /// At least one chunk is required.
    #[error("chunked summation needs at least one job")]
    ZeroJobs,
    /// More chunks than sub-intervals would leave a chunk with no work.
    #[error("{jobs} jobs cannot share {subintervals} sub-intervals")]
    JobsExceedSubintervals {
        /// Requested number of chunks.
        jobs: usize,
        /// Total number of sub-intervals.
        subintervals: usize,
    },
}
