//! Configuration management module
//!
//! This module handles resolving the application configuration from
//! environment variables, validating every value, and reporting all
//! problems in a single aggregated error.

pub mod env;
pub mod loglevel;
pub mod settings;
pub mod validation;

pub use env::*;
pub use loglevel::*;
pub use settings::*;
pub use validation::*;
