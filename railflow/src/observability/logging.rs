//! `tracing` subscriber setup for binaries and tests that drive pipelines.
//!
//! The engine emits `debug` events for every resolved or skipped step and
//! `warn` events for trapped failures. Nothing is printed unless a
//! subscriber is installed.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_directive` (e.g. `"railflow=debug"`) when
/// `RUST_LOG` is unset or invalid.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn try_init_tracing(default_directive: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()?;

    Ok(())
}

/// Like [`try_init_tracing`], but ignores an already-installed subscriber.
pub fn init_tracing(default_directive: &str) {
    if try_init_tracing(default_directive).is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
