//! fibbench - CLI

use anyhow::{Context, Result};
use clap::Parser;
use fibbench::util::{config::BenchConfig, logger};
use fibbench::{run_on_worker, NAME, VERSION};

/// CPU-bound Fibonacci benchmark: recursion, big-integer iteration and
/// matrix exponentiation. Runs with fixed defaults.
#[derive(Parser, Debug)]
#[command(name = "fibbench")]
#[command(version = VERSION)]
#[command(long_about = None)]
struct Args {
    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli(args.verbose);

    if args.verbose {
        eprintln!("{} version: {}", NAME, VERSION);
        eprintln!("Host: {}", std::env::consts::OS);
    }

    run_on_worker(BenchConfig::default()).context("Benchmark failed")?;
    Ok(())
}
