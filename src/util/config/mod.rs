//! Benchmark tunables
//!
//! All knobs are compile-time constants. [`BenchConfig::default`] is what the
//! CLI runs; tests build smaller configs directly.
//!
//! # Usage
//!
//! ```rust
//! use fibbench::util::config::BenchConfig;
//!
//! let config = BenchConfig {
//!     iterations: 1,
//!     ..BenchConfig::default()
//! };
//! assert_eq!(config.recursive_n, 35);
//! ```

/// Default number of benchmark rounds.
pub const DEFAULT_ITERATIONS: usize = 3;

/// Input for the recursive algorithm. Recursion depth equals this value.
pub const DEFAULT_RECURSIVE_N: u32 = 35;

/// Input for the iterative big-integer algorithm.
pub const DEFAULT_ITERATIVE_N: u32 = 100_000;

/// Input for the matrix exponentiation algorithm.
pub const DEFAULT_MATRIX_N: u32 = 500_000;

/// Stack size of the thread the benchmark runs on (64 MiB).
pub const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of rounds over all three algorithms.
    pub iterations: usize,
    /// `n` for the recursive run.
    pub recursive_n: u32,
    /// `n` for the iterative run.
    pub iterative_n: u32,
    /// `n` for the matrix run.
    pub matrix_n: u32,
    /// Stack size for the benchmark thread.
    pub worker_stack_size: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            recursive_n: DEFAULT_RECURSIVE_N,
            iterative_n: DEFAULT_ITERATIVE_N,
            matrix_n: DEFAULT_MATRIX_N,
            worker_stack_size: WORKER_STACK_SIZE,
        }
    }
}
