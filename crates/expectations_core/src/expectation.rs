//! Expectation types.
//!
//! An [`Expectation`] is a named constraint applied to one field of every
//! row. The set of rule kinds is closed ([`ExpectationKind`]); each kind
//! has one evaluation function and one description generator.

use crate::ExpectationError;
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A single input record: field name to raw string value.
pub type Row = HashMap<String, String>;

/// A field value that violated an expectation.
///
/// Absent fields are unexpected too, so they get their own variant rather
/// than being folded into an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum UnexpectedValue {
    /// The field was not present in the row
    Missing,
    /// The offending value, in its raw (or normalized integer) string form
    Value(String),
}

impl UnexpectedValue {
    /// Returns the value as a string slice, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            UnexpectedValue::Missing => None,
            UnexpectedValue::Value(v) => Some(v),
        }
    }
}

impl fmt::Display for UnexpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnexpectedValue::Missing => f.write_str("<missing>"),
            UnexpectedValue::Value(v) => f.write_str(v),
        }
    }
}

impl From<&str> for UnexpectedValue {
    fn from(s: &str) -> Self {
        UnexpectedValue::Value(s.to_string())
    }
}

impl From<String> for UnexpectedValue {
    fn from(s: String) -> Self {
        UnexpectedValue::Value(s)
    }
}

/// The constraint an expectation enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectationKind {
    /// Raw value must be a member of the permitted set
    ValueSet {
        /// Permitted raw values, in declaration order
        values: IndexSet<String>,
    },

    /// Value must parse as an integer within `[lower, upper]`
    Range {
        /// Lower bound (inclusive)
        lower: i64,
        /// Upper bound (inclusive)
        upper: i64,
    },
}

impl ExpectationKind {
    /// Configuration tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ExpectationKind::ValueSet { .. } => "expect_values",
            ExpectationKind::Range { .. } => "expect_range",
        }
    }

    fn describe(&self) -> String {
        match self {
            ExpectationKind::ValueSet { values } => {
                let joined: Vec<&str> = values.iter().map(String::as_str).collect();
                format!("Values must belong to this set: [{}].", joined.join(", "))
            }
            ExpectationKind::Range { lower, upper } => format!(
                "Values must be greater than or equal to {lower} and less than or equal to {upper}."
            ),
        }
    }
}

/// A named constraint on one field, with its run-scoped failure latch.
///
/// # Example
///
/// ```rust
/// use expectations_core::{Expectation, Row, UnexpectedValue};
///
/// let mut exp = Expectation::value_set("status", ["OK", "WARN"]);
/// let row: Row = [("status".to_string(), "FAIL".to_string())].into();
///
/// assert_eq!(exp.evaluate(&row), Ok(Some(UnexpectedValue::from("FAIL"))));
/// assert!(exp.failed());
/// ```
#[derive(Debug, Clone)]
pub struct Expectation {
    field: String,
    kind: ExpectationKind,
    description: String,
    failed: bool,
}

impl Expectation {
    /// Creates an expectation of the given kind on `field`.
    pub fn new(field: impl Into<String>, kind: ExpectationKind) -> Self {
        let description = kind.describe();
        Self {
            field: field.into(),
            kind,
            description,
            failed: false,
        }
    }

    /// Creates a value-set expectation.
    pub fn value_set<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(field, ExpectationKind::ValueSet { values })
    }

    /// Creates an inclusive integer range expectation.
    pub fn range(field: impl Into<String>, lower: i64, upper: i64) -> Self {
        Self::new(field, ExpectationKind::Range { lower, upper })
    }

    /// Name of the field this expectation reads.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The constraint being enforced.
    pub fn kind(&self) -> &ExpectationKind {
        &self.kind
    }

    /// Human-readable description of the constraint.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether any row has violated this expectation so far.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Evaluates one row.
    ///
    /// Returns the unexpected value when the row violates the constraint.
    /// The first violation latches [`failed`](Self::failed) for the rest
    /// of the run.
    ///
    /// # Errors
    ///
    /// A range expectation returns [`ExpectationError::NotAnInteger`] when
    /// the field is absent or does not parse as an integer.
    pub fn evaluate(
        &mut self,
        row: &Row,
    ) -> std::result::Result<Option<UnexpectedValue>, ExpectationError> {
        let raw = row.get(&self.field);

        let unexpected = match &self.kind {
            ExpectationKind::ValueSet { values } => match raw {
                Some(v) if values.contains(v) => None,
                Some(v) => Some(UnexpectedValue::Value(v.clone())),
                None => Some(UnexpectedValue::Missing),
            },
            ExpectationKind::Range { lower, upper } => {
                let parsed = raw
                    .and_then(|v| v.trim().parse::<i64>().ok())
                    .ok_or_else(|| ExpectationError::NotAnInteger {
                        field: self.field.clone(),
                        value: raw.cloned(),
                    })?;

                if (*lower..=*upper).contains(&parsed) {
                    None
                } else {
                    Some(UnexpectedValue::Value(parsed.to_string()))
                }
            }
        };

        if unexpected.is_some() {
            self.failed = true;
        }

        Ok(unexpected)
    }
}
