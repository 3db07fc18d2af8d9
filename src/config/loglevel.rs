//! Diagnostic log levels
//!
//! The enumerated severity set accepted by `HD_LOGLEVEL`. The lowercase
//! names double as tracing filter directives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Diagnostic log level, least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Loglevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl Loglevel {
    /// All levels, least to most verbose.
    pub const ALL: [Loglevel; 5] = [
        Loglevel::Error,
        Loglevel::Warn,
        Loglevel::Info,
        Loglevel::Debug,
        Loglevel::Trace,
    ];

    /// Returns the lowercase level name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for Loglevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Loglevel {
    type Err = String;

    /// Accepts exactly the lowercase level names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|level| level.as_str()).collect();
                format!("must be one of [{}]", names.join(", "))
            })
    }
}
