//! Calculation options and configuration.

use serde::{Deserialize, Serialize};

use crate::calculator::FibError;
use crate::constants::DEFAULT_RECURSION_LIMIT;

/// Options for Fibonacci calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Maximum recursion depth for the naive recursive evaluator (0 = default).
    pub recursion_limit: u64,
    /// Refuse closed-form indices past the range where `f64` is exact.
    pub strict_closed_form: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            strict_closed_form: false,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.recursion_limit == 0 {
            self.recursion_limit = DEFAULT_RECURSION_LIMIT;
        }
        self
    }

    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, FibError> {
        let opts: Self = serde_json::from_str(s)
            .map_err(|e| FibError::Config(format!("invalid options: {e}")))?;
        Ok(opts.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.recursion_limit, DEFAULT_RECURSION_LIMIT);
        assert!(!opts.strict_closed_form);
    }

    #[test]
    fn normalize_zero_limit() {
        let opts = Options {
            recursion_limit: 0,
            ..Default::default()
        };
        assert_eq!(opts.normalize().recursion_limit, DEFAULT_RECURSION_LIMIT);
    }

    #[test]
    fn from_json_partial() {
        let opts = Options::from_json(r#"{"strict_closed_form": true}"#).unwrap();
        assert!(opts.strict_closed_form);
        assert_eq!(opts.recursion_limit, DEFAULT_RECURSION_LIMIT);
    }

    #[test]
    fn from_json_zero_limit_is_normalized() {
        let opts = Options::from_json(r#"{"recursion_limit": 0}"#).unwrap();
        assert_eq!(opts.recursion_limit, DEFAULT_RECURSION_LIMIT);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = Options::from_json("{not json").unwrap_err();
        assert!(matches!(err, FibError::Config(_)));
    }

    #[test]
    fn round_trips_through_json() {
        let opts = Options {
            recursion_limit: 30,
            strict_closed_form: true,
        };
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(Options::from_json(&json).unwrap(), opts);
    }
}
