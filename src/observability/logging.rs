//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Human-readable fmt output; nothing here is meant for machine parsing
//! - `RUST_LOG` overrides the default filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "pantheon_sdk=info";

/// Install the global subscriber. Must run before the config is read.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
