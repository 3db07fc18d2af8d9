//! Utility functions module
//!
//! This module contains table formatting and other output helpers.

pub mod format;

pub use format::*;
