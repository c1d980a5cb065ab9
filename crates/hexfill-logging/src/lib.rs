//! Subscriber setup for hexfill.
//!
//! The library crates only emit `tracing` events. Hosts call [`init`] once
//! at startup; tests call [`init_for_tests`] as often as they like.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "hexfill=info";

/// Install the global subscriber, reading `RUST_LOG` or falling back to
/// [`DEFAULT_FILTER`].
pub fn init() -> Result<(), TryInitError> {
    init_with_filter(DEFAULT_FILTER)
}

/// Like [`init`] with a different fallback filter.
pub fn init_with_filter(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(fmt::layer())
        .try_init()
}

/// Route events through the test harness's captured output.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_for_tests() {
    let _ = fmt()
        .with_env_filter(env_filter("hexfill=debug"))
        .with_test_writer()
        .try_init();
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_test_init_is_harmless() {
        init_for_tests();
        init_for_tests();
        tracing::info!(target: "hexfill_logging", "still alive");
    }

    #[test]
    fn second_global_init_reports_error() {
        init_for_tests();
        assert!(init().is_err());
    }
}
