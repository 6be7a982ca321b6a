//! fibbench - CPU-bound Fibonacci micro-benchmark
//!
//! Times three Fibonacci strategies over unbounded integers:
//!
//! - naive recursion, which stresses function-call overhead
//! - iterative accumulation, which stresses big-integer addition
//! - matrix exponentiation, which stresses big-integer multiplication
//!
//! # Example
//!
//! ```no_run
//! use fibbench::{run_benchmark, util::config::BenchConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let config = BenchConfig { iterations: 1, ..BenchConfig::default() };
//!     let results = run_benchmark(&config, &mut std::io::stdout())?;
//!     assert_eq!(results.samples(fibbench::Algorithm::Recursive).len(), 1);
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

pub mod bench;
pub mod error;
pub mod fib;
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use bench::{run_benchmark, run_on_worker, Algorithm, ResultsTable, Stats};
pub use error::{BenchError, BenchResult};
pub use fib::{fibonacci_iterative, fibonacci_matrix, fibonacci_recursive};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program name
pub const NAME: &str = "fibbench";
