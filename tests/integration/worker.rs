use fibbench::util::config::{BenchConfig, WORKER_STACK_SIZE};
use fibbench::{run_on_worker, Algorithm};

#[test]
fn test_run_on_worker_returns_results() {
    let config = BenchConfig {
        iterations: 1,
        recursive_n: 10,
        iterative_n: 100,
        matrix_n: 100,
        worker_stack_size: WORKER_STACK_SIZE,
    };

    let results = run_on_worker(config).expect("worker run failed");
    for algorithm in Algorithm::ALL {
        assert_eq!(results.samples(algorithm).len(), 1);
    }
}

#[test]
fn test_worker_errors_propagate() {
    let config = BenchConfig {
        iterations: 0,
        ..BenchConfig::default()
    };

    let err = run_on_worker(config).unwrap_err();
    assert!(matches!(err, fibbench::BenchError::EmptySamples(_)));
}
