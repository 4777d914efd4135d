//! Tracing subscriber setup.
//!
//! Log output goes to stderr so that command output on stdout stays
//! machine-readable JSON.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global subscriber.
///
/// # Environment
/// - `RUST_LOG`: filter directive (default: `info`),
///   e.g. `RUST_LOG=u_survey=debug`.
///
/// # Example
/// ```no_run
/// u_survey::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Initializes a debug-level subscriber for tests.
///
/// Safe to call from several tests; only the first call installs it.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
