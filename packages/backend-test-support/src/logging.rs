//! Unified test logging initialization.
//!
//! One initialization path for unit and integration tests alike, guarded so
//! repeated calls (from `ctor` hooks in several test binaries) are harmless.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The level is taken from `TEST_LOG`, falling
/// back to `RUST_LOG`, defaulting to `warn` so passing runs stay quiet.
/// Output goes through the test writer for cargo/nextest capture, without
/// timestamps for stable lines.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
