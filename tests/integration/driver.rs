use fibbench::util::config::BenchConfig;
use fibbench::{run_benchmark, Algorithm};

fn small_config(iterations: usize) -> BenchConfig {
    BenchConfig {
        iterations,
        recursive_n: 18,
        iterative_n: 2_000,
        matrix_n: 5_000,
        ..BenchConfig::default()
    }
}

fn run_captured(config: &BenchConfig) -> (fibbench::ResultsTable, String) {
    let mut out = Vec::new();
    let results = run_benchmark(config, &mut out).expect("benchmark run failed");
    (results, String::from_utf8(out).expect("report is not utf-8"))
}

#[test]
fn test_three_iterations_collect_three_positive_samples() {
    let (results, _) = run_captured(&small_config(3));

    for algorithm in Algorithm::ALL {
        let samples = results.samples(algorithm);
        assert_eq!(samples.len(), 3, "{} sample count", algorithm);
        assert!(
            samples.iter().all(|&s| s > 0.0 && s.is_finite()),
            "{} samples: {:?}",
            algorithm,
            samples
        );
    }
}

#[test]
fn test_report_structure() {
    let (_, report) = run_captured(&small_config(2));
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "=".repeat(60));
    assert_eq!(lines[1], "CPU BOUND BENCHMARK: Fibonacci Computation");
    assert_eq!(lines[2], "=".repeat(60));
    assert!(lines[3].starts_with("Runtime: fibbench "));
    assert_eq!(lines[4], "-".repeat(60));

    assert_eq!(report.matches("--- Iteration ").count(), 2);
    assert!(report.contains("--- Iteration 1/2 ---"));
    assert!(report.contains("--- Iteration 2/2 ---"));

    for algorithm in Algorithm::ALL {
        assert_eq!(report.matches(algorithm.title()).count(), 2);
    }
    assert_eq!(report.matches("  Result: 2584, Time: ").count(), 2);
    assert_eq!(report.matches("  Computing fib(2000) iteratively").count(), 2);
    assert_eq!(report.matches("  Computing fib(5000) using matrix").count(), 2);
}

#[test]
fn test_summary_lists_every_algorithm_in_order() {
    let (_, report) = run_captured(&small_config(1));
    let summary = report
        .split("SUMMARY")
        .nth(1)
        .expect("summary section missing");
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines[1], "=".repeat(60));
    assert_eq!(lines[2], format!("Runtime: {}", fibbench::VERSION));
    assert_eq!(lines[3], "");

    let body = &lines[4..];
    assert_eq!(body.len(), 9);
    for (chunk, algorithm) in body.chunks(3).zip(Algorithm::ALL) {
        assert_eq!(chunk[0], format!("{}:", algorithm.name()));
        assert!(chunk[1].starts_with("  Average: "));
        assert!(chunk[2].starts_with("  Min: "));
        assert!(chunk[2].contains(", Max: "));
    }
}

#[test]
fn test_zero_iterations_fails_at_summary() {
    let mut out = Vec::new();
    let err = run_benchmark(&small_config(0), &mut out).unwrap_err();
    assert!(matches!(err, fibbench::BenchError::EmptySamples(_)));
}
