//! # Observability & Tracing
//!
//! Structured logging for the registry, built on `tracing`.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: actor startup and shutdown with the final record count
//! - **Store Operations**: every request at `debug`, successful writes at `info` with the new
//!   size, rejected writes at `warn` with the reason
//! - **Client Calls**: a span per call (`find_in_birth_date_range`, `save`, `patch`, ...)
//! - **HTTP**: infrastructure failures at `error`, domain rejections at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Configured default level (logging.level)
//! cargo run
//!
//! # RUST_LOG always wins over the configured level
//! RUST_LOG=debug cargo run
//! RUST_LOG=user_registry::framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="User"
//! INFO save: Created entity_type="User" key=a@x.com size=1
//! WARN save: Already exists entity_type="User" key=a@x.com
//! INFO patch: Patched entity_type="User" old_key=a@x.com key=a@x.com size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `default_level` applies when `RUST_LOG` is unset or unparsable.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
