//! hyperdraft - collaborative markdown note server
//!
//! Configuration and startup layer: environment-driven configuration
//! resolution with aggregated validation reporting, logging bootstrap,
//! and rendering helpers for translated external links.

pub mod cli;
pub mod config;
pub mod error;
pub mod links;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, ConfigValidationError, EnvSnapshot, Loglevel};
pub use error::{HyperdraftError, Result};
