//! Benchmark errors

use std::io;
use thiserror::Error;

/// Benchmark result
pub type BenchResult<T> = Result<T, BenchError>;

/// Benchmark errors
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("No timing samples recorded for '{0}'")]
    EmptySamples(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to spawn benchmark thread: {0}")]
    WorkerSpawn(#[source] io::Error),

    #[error("Benchmark thread panicked: {0}")]
    WorkerPanicked(String),
}
