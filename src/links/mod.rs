//! Link rendering module
//!
//! This module renders the HTML anchor fragments the frontend embeds
//! for external destinations, with translated display text.

pub mod external;

pub use external::*;
