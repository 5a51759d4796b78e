//! Log output for the RPC binary.
//!
//! stdout carries protocol traffic, so everything goes to stderr. The level is
//! taken from `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calling it more than once is a no-op.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
