//! End-to-end tests for the validity crate.

mod checksums;
mod engine;
mod translation;

/// Installs a fmt subscriber once so `RUST_LOG=validity=trace` shows engine events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
