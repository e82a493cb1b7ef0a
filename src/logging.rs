//! Logging setup for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "symbolboard=info";

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place and return false.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
