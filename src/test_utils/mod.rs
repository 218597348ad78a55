//! Test utilities shared by unit and integration tests.
//!
//! Available behind `cfg(test)` and the `test-utils` feature so integration
//! tests can opt in via `features = ["test-utils"]`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize test logging once per process.
///
/// Uses `level` when given, otherwise falls back to `RUST_LOG`; without
/// either, logging stays disabled. Safe to call from every test.
pub fn init_test_logging(level: Option<tracing::Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_ansi(true)
            .try_init();
    });
}
