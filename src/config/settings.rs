//! Application configuration resolution
//!
//! This module turns the process environment into a validated
//! [`AppConfig`]. Resolution checks every variable before reporting so
//! one pass surfaces all problems at once.

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::env::{EnvKey, EnvSnapshot};
use crate::config::loglevel::Loglevel;
use crate::config::validation::{
    parse_number, require_integer, require_nonempty, ConfigValidationError, ValidationFailure,
};
use crate::error::Result;

type FieldResult<T> = std::result::Result<T, ValidationFailure>;

/// Port the server binds when `PORT` is absent.
pub const DEFAULT_PORT: u16 = 3000;

/// Minutes between note persistence runs when `HD_PERSIST_INTERVAL` is absent.
pub const DEFAULT_PERSIST_INTERVAL: u64 = 10;

/// Highest TCP port the server accepts.
pub const MAX_PORT: i64 = 65535;

/// Validated application configuration.
///
/// Field names serialize in the camelCase form the HTTP frontend and
/// the configuration docs use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Public origin the instance is reachable at.
    pub domain: String,
    /// Base URL the renderer frontend is served from. Falls back to `domain`.
    pub renderer_base_url: String,
    /// TCP port the HTTP server binds.
    pub port: u16,
    /// Minimum severity the server logs.
    pub loglevel: Loglevel,
    /// Minutes between periodic note persistence runs.
    pub persist_interval: u64,
}

impl AppConfig {
    /// Resolves a configuration from the given snapshot.
    ///
    /// Collects every failure instead of stopping at the first, so a
    /// misconfigured deployment gets one complete report.
    pub fn resolve(snapshot: &EnvSnapshot) -> Result<Self> {
        let domain = resolve_domain(snapshot);
        let renderer_base_url = resolve_renderer_base_url(snapshot);
        let port = resolve_port(snapshot);
        let loglevel = resolve_loglevel(snapshot);
        let persist_interval = resolve_persist_interval(snapshot);

        match (domain, renderer_base_url, port, loglevel, persist_interval) {
            (Ok(domain), Ok(renderer_base_url), Ok(port), Ok(loglevel), Ok(persist_interval)) => {
                let renderer_base_url = match renderer_base_url {
                    Some(url) => url,
                    None => {
                        debug!("HD_RENDERER_BASE_URL not set, using HD_DOMAIN");
                        domain.clone()
                    }
                };
                Ok(Self {
                    domain,
                    renderer_base_url,
                    port,
                    loglevel,
                    persist_interval,
                })
            }
            (domain, renderer_base_url, port, loglevel, persist_interval) => {
                let failures: Vec<ValidationFailure> = [
                    domain.err(),
                    renderer_base_url.err(),
                    port.err(),
                    loglevel.err(),
                    persist_interval.err(),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(ConfigValidationError::new(failures).into())
            }
        }
    }

    /// Resolves a configuration from the current process environment.
    pub fn from_process_env() -> Result<Self> {
        let snapshot = EnvSnapshot::from_process()?;
        Self::resolve(&snapshot)
    }
}

fn resolve_domain(snapshot: &EnvSnapshot) -> FieldResult<String> {
    let key = EnvKey::Domain;
    match snapshot.get(key) {
        None => Err(ValidationFailure::new(key, "is required")),
        Some(raw) => {
            let raw = require_nonempty(key, raw)?;
            validate_origin(key, raw)?;
            Ok(raw.to_string())
        }
    }
}

/// Accepts any non-empty value. Only the domain is origin-checked.
fn resolve_renderer_base_url(snapshot: &EnvSnapshot) -> FieldResult<Option<String>> {
    let key = EnvKey::RendererBaseUrl;
    match snapshot.get(key) {
        None => Ok(None),
        Some(raw) => {
            let raw = require_nonempty(key, raw)?;
            Ok(Some(raw.to_string()))
        }
    }
}

/// Checks that a value is an absolute http(s) URL.
fn validate_origin(key: EnvKey, raw: &str) -> FieldResult<()> {
    let valid = Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            key,
            "must be a valid uri with a scheme of http or https",
        ))
    }
}

fn resolve_port(snapshot: &EnvSnapshot) -> FieldResult<u16> {
    let key = EnvKey::Port;
    match snapshot.get(key) {
        None => {
            debug!("PORT not set, using default {}", DEFAULT_PORT);
            Ok(DEFAULT_PORT)
        }
        Some(raw) => {
            let raw = require_nonempty(key, raw)?;
            parse_port(key, raw)
        }
    }
}

/// Applies the port checks in order so the first violated rule is the
/// one reported.
fn parse_port(key: EnvKey, raw: &str) -> FieldResult<u16> {
    let value = parse_number(key, raw)?;
    let value = require_integer(key, value)?;
    if value <= 0 {
        return Err(ValidationFailure::new(key, "must be a positive number"));
    }
    if value > MAX_PORT {
        return Err(ValidationFailure::new(
            key,
            "must be less than or equal to 65535",
        ));
    }
    Ok(value as u16)
}

fn resolve_loglevel(snapshot: &EnvSnapshot) -> FieldResult<Loglevel> {
    let key = EnvKey::Loglevel;
    match snapshot.get(key) {
        None => {
            debug!("HD_LOGLEVEL not set, using default {}", Loglevel::default());
            Ok(Loglevel::default())
        }
        Some(raw) => {
            let raw = require_nonempty(key, raw)?;
            raw.parse::<Loglevel>()
                .map_err(|constraint| ValidationFailure::new(key, constraint))
        }
    }
}

fn resolve_persist_interval(snapshot: &EnvSnapshot) -> FieldResult<u64> {
    let key = EnvKey::PersistInterval;
    match snapshot.get(key) {
        None => {
            debug!(
                "HD_PERSIST_INTERVAL not set, using default {}",
                DEFAULT_PERSIST_INTERVAL
            );
            Ok(DEFAULT_PERSIST_INTERVAL)
        }
        Some(raw) => {
            let raw = require_nonempty(key, raw)?;
            parse_persist_interval(key, raw)
        }
    }
}

fn parse_persist_interval(key: EnvKey, raw: &str) -> FieldResult<u64> {
    let value = parse_number(key, raw)?;
    let value = require_integer(key, value)?;
    if value < 0 {
        return Err(ValidationFailure::new(
            key,
            "must be greater than or equal to 0",
        ));
    }
    Ok(value as u64)
}
