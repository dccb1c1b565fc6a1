//! Shared helpers for the workspace integration tests

use calx::Bindings;

/// Installs a test logger once; later calls are no-ops.
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Builds bindings from `(name, value)` pairs
pub fn bindings(pairs: &[(&str, f64)]) -> Bindings {
    pairs.iter().map(|&(name, value)| (name, value)).collect()
}

/// Bindings used by the precedence scenarios: A=4, B=5, C=6, D=8
pub fn abcd() -> Bindings {
    bindings(&[("A", 4.0), ("B", 5.0), ("C", 6.0), ("D", 8.0)])
}

/// Panics unless `actual` is within `tolerance` of `expected`
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (+/- {tolerance}), got {actual}"
    );
}
