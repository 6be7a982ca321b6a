//! Results table and aggregate statistics

use indexmap::IndexMap;

use crate::bench::Algorithm;
use crate::error::{BenchError, BenchResult};

/// Aggregate over one algorithm's samples, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl Stats {
    /// Compute average, min and max. Fails on an empty slice.
    pub fn from_samples(
        name: &str,
        samples: &[f64],
    ) -> BenchResult<Stats> {
        let (first, rest) = samples
            .split_first()
            .ok_or_else(|| BenchError::EmptySamples(name.to_string()))?;

        let (sum, min, max) = rest
            .iter()
            .fold((*first, *first, *first), |(sum, min, max), &s| {
                (sum + s, min.min(s), max.max(s))
            });

        Ok(Stats {
            average: sum / samples.len() as f64,
            min,
            max,
        })
    }
}

/// Timing samples per algorithm, one per iteration, in run order.
#[derive(Debug, Clone)]
pub struct ResultsTable {
    samples: IndexMap<Algorithm, Vec<f64>>,
}

impl Default for ResultsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsTable {
    /// Empty table with every algorithm key present.
    pub fn new() -> Self {
        Self {
            samples: Algorithm::ALL
                .iter()
                .map(|&algorithm| (algorithm, Vec::new()))
                .collect(),
        }
    }

    /// Append one sample for `algorithm`.
    pub fn record(
        &mut self,
        algorithm: Algorithm,
        elapsed: f64,
    ) {
        self.samples.entry(algorithm).or_default().push(elapsed);
    }

    /// Samples recorded for `algorithm`, oldest first.
    pub fn samples(
        &self,
        algorithm: Algorithm,
    ) -> &[f64] {
        self.samples
            .get(&algorithm)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate `(algorithm, samples)` in run order.
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &[f64])> {
        self.samples
            .iter()
            .map(|(&algorithm, samples)| (algorithm, samples.as_slice()))
    }

    /// Statistics per algorithm, in run order.
    pub fn summary(&self) -> BenchResult<Vec<(Algorithm, Stats)>> {
        self.iter()
            .map(|(algorithm, samples)| {
                Stats::from_samples(algorithm.name(), samples).map(|stats| (algorithm, stats))
            })
            .collect()
    }
}
