//! Environment snapshot and variable schema
//!
//! This module defines the set of environment variables the resolver
//! recognizes, and a snapshot type capturing their raw values either
//! from the process environment or from explicit pairs.

use crate::error::{HyperdraftError, Result};
use std::collections::HashMap;

/// Environment variables recognized by the configuration resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvKey {
    /// Public URL of the instance.
    Domain,
    /// Base URL the renderer is served from.
    RendererBaseUrl,
    /// TCP port the server listens on.
    Port,
    /// Diagnostic log level.
    Loglevel,
    /// Minutes between persistence flushes.
    PersistInterval,
}

impl EnvKey {
    /// All recognized variables, in schema order.
    pub const ALL: [EnvKey; 5] = [
        EnvKey::Domain,
        EnvKey::RendererBaseUrl,
        EnvKey::Port,
        EnvKey::Loglevel,
        EnvKey::PersistInterval,
    ];

    /// Returns the canonical environment variable name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "HD_DOMAIN",
            Self::RendererBaseUrl => "HD_RENDERER_BASE_URL",
            Self::Port => "PORT",
            Self::Loglevel => "HD_LOGLEVEL",
            Self::PersistInterval => "HD_PERSIST_INTERVAL",
        }
    }

    /// Whether the variable must be set for resolution to succeed.
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Domain)
    }

    /// Default value shown in the variable reference.
    pub const fn default_hint(self) -> &'static str {
        match self {
            Self::Domain => "(required)",
            Self::RendererBaseUrl => "value of HD_DOMAIN",
            Self::Port => "3000",
            Self::Loglevel => "warn",
            Self::PersistInterval => "10",
        }
    }

    /// One-line description for the variable reference.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Domain => "Public URL of this instance (http or https)",
            Self::RendererBaseUrl => "Base URL the renderer frontend is served from",
            Self::Port => "TCP port the server listens on",
            Self::Loglevel => "Diagnostic log level (error, warn, info, debug, trace)",
            Self::PersistInterval => "Minutes between note persistence flushes",
        }
    }

    /// Looks up a recognized variable by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// Snapshot of the recognized environment variables.
///
/// A snapshot is immutable once captured. Resolution is a pure function
/// of a snapshot, so tests build one with [`EnvSnapshot::from_pairs`]
/// instead of mutating the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    values: HashMap<EnvKey, String>,
}

impl EnvSnapshot {
    /// Captures the recognized variables from the process environment.
    ///
    /// Values must be valid UTF-8; anything else fails closed rather
    /// than silently misconfiguring the server.
    pub fn from_process() -> Result<Self> {
        let mut values = HashMap::new();
        for key in EnvKey::ALL {
            if let Some(raw) = std::env::var_os(key.as_str()) {
                let value = raw.into_string().map_err(|_| {
                    HyperdraftError::config(format!("{} must be valid UTF-8", key.as_str()))
                })?;
                values.insert(key, value);
            }
        }
        Ok(Self { values })
    }

    /// Builds a snapshot from explicit name/value pairs.
    ///
    /// Names outside the schema are ignored, so a full `env::vars()`
    /// dump is an acceptable input.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (name, value) in pairs {
            if let Some(key) = EnvKey::from_name(name.as_ref()) {
                values.insert(key, value.into());
            }
        }
        Self { values }
    }

    /// Returns the raw value for a variable, if set.
    pub fn get(&self, key: EnvKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Whether the variable is set in this snapshot.
    pub fn is_set(&self, key: EnvKey) -> bool {
        self.values.contains_key(&key)
    }
}
