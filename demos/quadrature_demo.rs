//! Quadrature demo driver.
//!
//! Computes a handful of integrals with known values, sequentially and in
//! chunks, printing the approximation, its absolute error, and wall time.
//!
//! Run with: cargo run --release --example quadrature_demo

use std::f64::consts::{E, PI};
use std::time::Instant;

use quadrans::prelude::*;

const SUBINTERVALS: usize = 10_000_000;
const JOBS: usize = 4;

fn report<F>(label: &str, f: &F, a: f64, b: f64, exact: f64)
where
    F: Fn(f64) -> f64 + Sync,
{
    let start = Instant::now();
    let sequential = integrate(f, a, b, SUBINTERVALS).unwrap();
    let sequential_time = start.elapsed();

    let start = Instant::now();
    let chunked = integrate_chunked(f, a, b, SUBINTERVALS, JOBS).unwrap();
    let chunked_time = start.elapsed();

    println!("{label}");
    println!(
        "  sequential      : {sequential:.12}  (error {:.2e}, {sequential_time:.2?})",
        (sequential - exact).abs()
    );
    println!(
        "  {JOBS} chunks        : {chunked:.12}  (error {:.2e}, {chunked_time:.2?})",
        (chunked - exact).abs()
    );
    println!();
}

fn main() {
    println!("Riemann-sum quadrature, {SUBINTERVALS} sub-intervals, midpoint rule\n");

    report("∫₀^π sin(x) dx = 2", &|x: f64| x.sin(), 0.0, PI, 2.0);
    report("∫₀¹ x² dx = 1/3", &|x: f64| x * x, 0.0, 1.0, 1.0 / 3.0);
    report("∫₀¹ eˣ dx = e - 1", &|x: f64| x.exp(), 0.0, 1.0, E - 1.0);
    report("∫₋₁¹ 2.5 dx = 5", &|_| 2.5, -1.0, 1.0, 5.0);

    let reversed = integrate(&|x: f64| x.sin(), PI, 0.0, SUBINTERVALS).unwrap();
    println!("∫π⁰ sin(x) dx = -2");
    println!("  sequential      : {reversed:.12}\n");

    let left = integrate_with_options(
        &|x: f64| x * x,
        0.0,
        1.0,
        1_000,
        QuadratureOptions {
            rule: QuadratureRule::LeftEdge,
            jobs: 1,
        },
    )
    .unwrap();
    println!("∫₀¹ x² dx, left-edge rule at n = 1000 (first-order bias visible)");
    println!("  left edge       : {left:.12}  (error {:.2e})", (left - 1.0 / 3.0).abs());
}
