//! Benchmark wrappers
//!
//! Each wrapper announces what it computes, times one call of its algorithm
//! with a monotonic clock, reports the result and returns the elapsed
//! seconds. Reporting happens after the clock stops.

pub use results::{ResultsTable, Stats};
pub use runner::{run_benchmark, run_on_worker, write_summary};

mod results;
mod runner;

#[cfg(test)]
mod tests;

use std::io::Write;
use std::time::Instant;

use num::BigUint;
use tracing::debug;

use crate::error::BenchResult;
use crate::fib::{digit_count, fibonacci_iterative, fibonacci_matrix, fibonacci_recursive};
use crate::util::config::BenchConfig;

/// The three benchmarked strategies, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Recursive,
    IterativeLarge,
    MatrixLarge,
}

impl Algorithm {
    /// All algorithms in the order they run and are reported.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Recursive,
        Algorithm::IterativeLarge,
        Algorithm::MatrixLarge,
    ];

    /// Key used in the results table and the summary.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Recursive => "recursive",
            Algorithm::IterativeLarge => "iterative_large",
            Algorithm::MatrixLarge => "matrix_large",
        }
    }

    /// Section title printed before each run.
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Recursive => "[1] Recursive Fibonacci (tests function call overhead):",
            Algorithm::IterativeLarge => {
                "[2] Iterative Large Fibonacci (tests big integer performance):"
            }
            Algorithm::MatrixLarge => {
                "[3] Matrix Large Fibonacci (tests big integer multiplication):"
            }
        }
    }

    /// Input size for this algorithm under `config`.
    pub fn input(
        self,
        config: &BenchConfig,
    ) -> u32 {
        match self {
            Algorithm::Recursive => config.recursive_n,
            Algorithm::IterativeLarge => config.iterative_n,
            Algorithm::MatrixLarge => config.matrix_n,
        }
    }

    /// Run the wrapper for this algorithm and return elapsed seconds.
    pub fn benchmark<W: Write>(
        self,
        n: u32,
        out: &mut W,
    ) -> BenchResult<f64> {
        match self {
            Algorithm::Recursive => benchmark_recursive(n, out),
            Algorithm::IterativeLarge => benchmark_iterative_large(n, out),
            Algorithm::MatrixLarge => benchmark_matrix_large(n, out),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Time a single call of `compute`.
fn timed(compute: impl FnOnce() -> BigUint) -> (BigUint, f64) {
    let start = Instant::now();
    let result = compute();
    (result, start.elapsed().as_secs_f64())
}

/// Benchmark recursive Fibonacci (call overhead). Prints the value itself.
pub fn benchmark_recursive<W: Write>(
    n: u32,
    out: &mut W,
) -> BenchResult<f64> {
    writeln!(out, "  Computing fib({}) recursively...", n)?;
    let (result, elapsed) = timed(|| fibonacci_recursive(n));
    debug!(algorithm = "recursive", n, elapsed, "run finished");
    writeln!(out, "  Result: {}, Time: {:.3}s", result, elapsed)?;
    Ok(elapsed)
}

/// Benchmark iterative Fibonacci for large `n` (big-integer addition).
pub fn benchmark_iterative_large<W: Write>(
    n: u32,
    out: &mut W,
) -> BenchResult<f64> {
    writeln!(out, "  Computing fib({}) iteratively (big integers)...", n)?;
    let (result, elapsed) = timed(|| fibonacci_iterative(n));
    debug!(algorithm = "iterative_large", n, elapsed, "run finished");
    let digits = digit_count(&result);
    writeln!(out, "  Result has {} digits, Time: {:.3}s", digits, elapsed)?;
    Ok(elapsed)
}

/// Benchmark matrix exponentiation for large `n` (big-integer multiplication).
pub fn benchmark_matrix_large<W: Write>(
    n: u32,
    out: &mut W,
) -> BenchResult<f64> {
    writeln!(out, "  Computing fib({}) using matrix exponentiation...", n)?;
    let (result, elapsed) = timed(|| fibonacci_matrix(n));
    debug!(algorithm = "matrix_large", n, elapsed, "run finished");
    let digits = digit_count(&result);
    writeln!(out, "  Result has {} digits, Time: {:.3}s", digits, elapsed)?;
    Ok(elapsed)
}
