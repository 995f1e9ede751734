//! Observability setup shared by binaries built on the framework.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and creates
//! RUST_LOG=debug cargo run    # full payloads, list filters, listener churn
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG`, falling back to `info` when it is unset or invalid.
/// The compact format hides module paths; the actor logs `entity_type` instead.
///
/// Calling it twice is harmless: the second registration attempt is ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
