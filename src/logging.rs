//! Logging bootstrap
//!
//! Installs the global tracing subscriber for the server and the CLI.
//! `RUST_LOG` overrides the level when set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Loglevel;
use crate::error::{HyperdraftError, Result};

/// Installs the global tracing subscriber at the given level.
///
/// Fails if a subscriber is already installed.
pub fn init(level: Loglevel) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("hyperdraft={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| HyperdraftError::logging(e.to_string()))
}
