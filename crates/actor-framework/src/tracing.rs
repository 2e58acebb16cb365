//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` fmt subscriber used by binaries.
//!
//! The actor loop logs with an `entity_type` field instead of the module path, so the
//! target is hidden and the compact format shows spans inline:
//!
//! ```text
//! INFO create_order: Created entity_type="Order" id=order_1 size=1
//! INFO create_order: Batch committed entity_type="Product" size=2
//! ```
//!
//! - `RUST_LOG=info`: lifecycle, commits and rejected requests.
//! - `RUST_LOG=debug`: request payloads (`?params`, `?actions`) as structured fields.

/// Initializes structured logging filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
