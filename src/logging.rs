//! Logging setup for request diagnostics.
//!
//! The dispatcher emits `debug!` lines for each outgoing request and its
//! response status; callers opt in by installing a logger. These helpers
//! configure env_logger, honoring `RUST_LOG` when set.

use env_logger::Env;

/// Initialize logging with the default `info` filter.
pub fn init() {
    init_with_filter("info");
}

/// Initialize logging with the given default filter level.
///
/// Once a global logger is installed, later calls are no-ops.
pub fn init_with_filter(filter: &str) {
    let env = Env::default().default_filter_or(filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}
