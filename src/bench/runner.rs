//! Benchmark driver

use std::io::{self, Write};
use std::thread;

use tracing::{debug, info};

use crate::bench::{Algorithm, ResultsTable};
use crate::error::{BenchError, BenchResult};
use crate::util::config::BenchConfig;
use crate::util::version::{runtime_identifier, short_identifier};

const RULE_WIDTH: usize = 60;

/// Run every algorithm `config.iterations` times, printing progress to `out`,
/// then print the summary. Returns the collected samples.
pub fn run_benchmark<W: Write>(
    config: &BenchConfig,
    out: &mut W,
) -> BenchResult<ResultsTable> {
    info!(iterations = config.iterations, "benchmark started");

    let heavy = "=".repeat(RULE_WIDTH);
    writeln!(out, "{}", heavy)?;
    writeln!(out, "CPU BOUND BENCHMARK: Fibonacci Computation")?;
    writeln!(out, "{}", heavy)?;
    writeln!(out, "Runtime: {}", runtime_identifier())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let mut results = ResultsTable::new();

    for i in 0..config.iterations {
        writeln!(out)?;
        writeln!(out, "--- Iteration {}/{} ---", i + 1, config.iterations)?;
        debug!(iteration = i + 1, "iteration started");

        for algorithm in Algorithm::ALL {
            writeln!(out)?;
            writeln!(out, "{}", algorithm.title())?;
            let elapsed = algorithm.benchmark(algorithm.input(config), out)?;
            results.record(algorithm, elapsed);
        }
    }

    write_summary(&results, out)?;
    out.flush()?;

    info!("benchmark finished");
    Ok(results)
}

/// Print average, min and max per algorithm.
pub fn write_summary<W: Write>(
    results: &ResultsTable,
    out: &mut W,
) -> BenchResult<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", heavy)?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", heavy)?;
    writeln!(out, "Runtime: {}", short_identifier())?;
    writeln!(out)?;

    for (algorithm, stats) in results.summary()? {
        writeln!(out, "{}:", algorithm)?;
        writeln!(out, "  Average: {:.3}s", stats.average)?;
        writeln!(out, "  Min: {:.3}s, Max: {:.3}s", stats.min, stats.max)?;
    }
    Ok(())
}

/// Run the benchmark on a dedicated thread with `config.worker_stack_size`
/// bytes of stack, reporting to stdout.
///
/// The calling thread only waits. A panic inside the benchmark (stack
/// exhaustion aborts the process outright) comes back as
/// [`BenchError::WorkerPanicked`].
pub fn run_on_worker(config: BenchConfig) -> BenchResult<ResultsTable> {
    let worker = thread::Builder::new()
        .name("fibbench-worker".to_string())
        .stack_size(config.worker_stack_size)
        .spawn(move || {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_benchmark(&config, &mut out)
        })
        .map_err(BenchError::WorkerSpawn)?;

    match worker.join() {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(BenchError::WorkerPanicked(message))
        }
    }
}
