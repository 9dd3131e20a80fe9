//! Logging initialization
//!
//! Logs go to stderr so stdout carries only the rendered result.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "rewrite_diff=info";

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Profile {
    /// Human-readable lines
    Human,
    /// One JSON object per event
    Json,
    /// Bare registry; nothing is printed
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
///
/// `RUST_LOG` overrides the default `rewrite_diff=info` filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter =
            || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // try_init: a subscriber set elsewhere (e.g. by an embedding app) wins
        let _ = match profile {
            Profile::Human => tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .finish()
                .try_init(),
            Profile::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}
