//! Error types for expectation suites.
//!
//! This module defines the errors raised while turning a configuration
//! document into a suite, and while evaluating a single expectation
//! against a row.

use thiserror::Error;

/// Result type for suite construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that make a configuration unusable.
///
/// All of these are fatal for a run: no partial suite is ever produced.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The rule-type tag is not one of the known expectation kinds
    #[error("Expectation '{code}': unknown rule type '{tag}'")]
    UnknownRuleType {
        /// Expectation code
        code: String,
        /// Tag found in the configuration
        tag: String,
    },

    /// The rule object did not hold exactly one rule-type key
    #[error("Expectation '{code}': expected exactly one rule type, found {found}")]
    AmbiguousRule {
        /// Expectation code
        code: String,
        /// Number of keys in the rule object
        found: usize,
    },

    /// Parameters are missing or malformed
    #[error("Expectation '{code}': invalid parameters for '{tag}': {message}")]
    InvalidParameters {
        /// Expectation code
        code: String,
        /// Rule-type tag
        tag: String,
        /// Failure details
        message: String,
    },
}

impl ConfigError {
    /// Creates a new invalid parameters error.
    pub fn invalid_parameters(
        code: impl Into<String>,
        tag: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameters {
            code: code.into(),
            tag: tag.into(),
            message: message.into(),
        }
    }
}

/// Error raised by a single expectation evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpectationError {
    /// A range expectation saw a value that is not an integer
    #[error("Value {} for field '{field}' is not an integer", display_raw(.value))]
    NotAnInteger {
        /// Field name
        field: String,
        /// Raw value, `None` when the field was absent from the row
        value: Option<String>,
    },
}

fn display_raw(value: &Option<String>) -> String {
    match value {
        Some(v) => format!("'{v}'"),
        None => "<missing>".to_string(),
    }
}
