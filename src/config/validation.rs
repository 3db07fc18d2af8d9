//! Validation failures and the aggregated startup report
//!
//! A failed resolution names every offending variable and the rule it
//! violated. Callers pattern-match on the per-line `"VARIABLE" rule`
//! text, so the strings here are contract.

use crate::config::env::EnvKey;
use std::fmt;

/// Largest magnitude the integer checks accept (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

const DOCS_TRAILER: &str = "For further information, have a look at the \
                            configuration docs at https://docs.hyperdraft.dev/configuration";

/// A single violated rule, attributed to the variable at fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    key: EnvKey,
    constraint: String,
}

impl ValidationFailure {
    pub(crate) fn new<S: Into<String>>(key: EnvKey, constraint: S) -> Self {
        Self {
            key,
            constraint: constraint.into(),
        }
    }

    /// Name of the offending environment variable.
    pub fn variable(&self) -> &'static str {
        self.key.as_str()
    }

    /// The violated rule, e.g. `must be a number`.
    pub fn constraint(&self) -> &str {
        &self.constraint
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.key.as_str(), self.constraint)
    }
}

/// Every validation failure from one resolution pass, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    failures: Vec<ValidationFailure>,
}

impl ConfigValidationError {
    pub(crate) fn new(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }

    /// The failures in schema order.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "There were some errors with your configuration:")?;
        for failure in &self.failures {
            write!(f, "\n - {failure}")?;
        }
        write!(f, "\n{DOCS_TRAILER}")
    }
}

impl std::error::Error for ConfigValidationError {}

/// Rejects values that are set but empty.
pub(crate) fn require_nonempty(key: EnvKey, raw: &str) -> Result<&str, ValidationFailure> {
    if raw.is_empty() {
        Err(ValidationFailure::new(key, "is not allowed to be empty"))
    } else {
        Ok(raw)
    }
}

/// Parses a raw value as a finite number.
pub(crate) fn parse_number(key: EnvKey, raw: &str) -> Result<f64, ValidationFailure> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationFailure::new(key, "must be a number"))
}

/// Requires a whole number within the safe-integer range.
pub(crate) fn require_integer(key: EnvKey, value: f64) -> Result<i64, ValidationFailure> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Ok(value as i64)
    } else {
        Err(ValidationFailure::new(key, "must be an integer"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_quotes_the_variable() {
        let failure = ValidationFailure::new(EnvKey::Port, "must be a number");
        assert_eq!(failure.to_string(), "\"PORT\" must be a number");
        assert_eq!(failure.variable(), "PORT");
        assert_eq!(failure.constraint(), "must be a number");
    }

    #[test]
    fn test_report_lists_every_failure() {
        let report = ConfigValidationError::new(vec![
            ValidationFailure::new(EnvKey::Domain, "is required"),
            ValidationFailure::new(EnvKey::Port, "must be an integer"),
        ]);
        let rendered = report.to_string();
        assert!(rendered.starts_with("There were some errors with your configuration:"));
        assert!(rendered.contains("\n - \"HD_DOMAIN\" is required"));
        assert!(rendered.contains("\n - \"PORT\" must be an integer"));
        assert!(rendered.contains("configuration docs"));
    }

    #[test]
    fn test_parse_number_accepts_float_grammar() {
        assert_eq!(parse_number(EnvKey::Port, "3000").unwrap(), 3000.0);
        assert_eq!(parse_number(EnvKey::Port, " 42 ").unwrap(), 42.0);
        assert_eq!(parse_number(EnvKey::Port, "1e3").unwrap(), 1000.0);
        assert_eq!(parse_number(EnvKey::Port, "-9000").unwrap(), -9000.0);
        assert_eq!(parse_number(EnvKey::Port, "3.14").unwrap(), 3.14);
    }

    #[test]
    fn test_parse_number_rejects_non_numbers() {
        for raw in ["not-a-port", "", "12abc", "inf", "nan"] {
            let failure = parse_number(EnvKey::Port, raw).unwrap_err();
            assert_eq!(failure.constraint(), "must be a number");
        }
    }

    #[test]
    fn test_require_integer_rejects_fractions() {
        assert_eq!(require_integer(EnvKey::Port, 3000.0).unwrap(), 3000);
        assert_eq!(require_integer(EnvKey::Port, -1.0).unwrap(), -1);
        let failure = require_integer(EnvKey::Port, 3.14).unwrap_err();
        assert_eq!(failure.constraint(), "must be an integer");
    }

    #[test]
    fn test_require_integer_bounds_at_safe_range() {
        assert!(require_integer(EnvKey::PersistInterval, 9_007_199_254_740_991.0).is_ok());
        assert!(require_integer(EnvKey::PersistInterval, 1e20).is_err());
    }

    #[test]
    fn test_require_nonempty() {
        assert_eq!(require_nonempty(EnvKey::Domain, "x").unwrap(), "x");
        let failure = require_nonempty(EnvKey::Domain, "").unwrap_err();
        assert_eq!(failure.constraint(), "is not allowed to be empty");
    }
}
