// Shared setup for integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 64).
// - TEST_LOG / RUST_LOG: tracing filter for engine logs (default "warn").

use proptest::prelude::ProptestConfig;
use tracing_subscriber::{fmt, EnvFilter};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    ProptestConfig {
        // no regression files for integration tests
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}

/// Install a test-writer subscriber once; later calls are no-ops.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    let _ = fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .without_time()
        .try_init();
}
