//! Main validation engine.
//!
//! This module provides the [`DataValidator`], which applies every
//! expectation of a suite to every row in a single pass and tallies the
//! unexpected values it finds.

use crate::{Result, ValidationError};
use expectations_core::{Row, Suite, ValidationOutcome, ValidationResults, ValidationSummary};
use tracing::{debug, info};

/// Validation engine for one run of a suite.
///
/// The engine owns the suite for the duration of the run because
/// evaluation latches each expectation's failure flag. `validate` consumes
/// the engine, so a suite can never carry state from one run into another.
///
/// # Example
///
/// ```rust
/// use expectations_core::{Row, Status, SuiteBuilder};
/// use expectations_validator::DataValidator;
///
/// let suite = SuiteBuilder::new("people")
///     .expect_range("exp2", "age", 0, 120)
///     .build();
///
/// let rows: Vec<Row> = ["5", "200", "45"]
///     .iter()
///     .map(|age| [("age".to_string(), age.to_string())].into())
///     .collect();
///
/// let outcome = DataValidator::new(suite).validate_rows(rows).unwrap();
///
/// assert_eq!(outcome.summary.total_rows, 3);
/// assert_eq!(outcome.summary.status(), Status::Failed);
/// assert_eq!(outcome.results.unexpected_count("age", "exp2"), 1);
/// ```
pub struct DataValidator {
    suite: Suite,
}

impl DataValidator {
    /// Creates a new engine for `suite`.
    pub fn new(suite: Suite) -> Self {
        Self { suite }
    }

    /// The suite being validated.
    pub fn suite(&self) -> &Suite {
        &self.suite
    }

    /// Runs the suite over a fallible row source.
    ///
    /// Every row is evaluated against every expectation, in suite order,
    /// before the next row is pulled from the source.
    ///
    /// # Errors
    ///
    /// Stops at the first row the source fails to produce, or the first
    /// expectation that cannot evaluate a row.
    pub fn validate<I>(mut self, rows: I) -> Result<ValidationOutcome>
    where
        I: IntoIterator<Item = Result<Row>>,
    {
        let mut results = ValidationResults::new();
        let mut total_rows = 0;

        for row in rows {
            let row = row?;
            total_rows += 1;

            for (code, expectation) in self.suite.expectations_mut() {
                let counts = results.touch(expectation.field(), code);

                let unexpected =
                    expectation
                        .evaluate(&row)
                        .map_err(|source| ValidationError::Expectation {
                            row: total_rows,
                            code: code.to_string(),
                            source,
                        })?;

                if let Some(value) = unexpected {
                    debug!("Row {}: '{}' rejected value {}", total_rows, code, value);
                    *counts.entry(value).or_insert(0) += 1;
                }
            }
        }

        let summary = ValidationSummary {
            total_rows,
            successful: self.suite.successful_count(),
            unsuccessful: self.suite.unsuccessful_count(),
        };

        info!(
            "Validated {} rows against suite '{}': {} of {} expectations succeeded",
            summary.total_rows,
            self.suite.name(),
            summary.successful,
            summary.evaluated()
        );

        Ok(ValidationOutcome {
            suite_name: self.suite.name().to_string(),
            summary,
            results,
            descriptions: self.suite.descriptions(),
        })
    }

    /// Runs the suite over rows that are already in memory.
    pub fn validate_rows<I>(self, rows: I) -> Result<ValidationOutcome>
    where
        I: IntoIterator<Item = Row>,
    {
        self.validate(rows.into_iter().map(Ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectations_core::{ExpectationError, Status, SuiteBuilder, UnexpectedValue};
    use pretty_assertions::assert_eq;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_row_source() {
        let suite = SuiteBuilder::new("s")
            .expect_values("exp1", "status", ["OK"])
            .build();

        let outcome = DataValidator::new(suite).validate_rows(Vec::new()).unwrap();

        assert_eq!(outcome.summary.total_rows, 0);
        assert_eq!(outcome.summary.successful, 1);
        assert_eq!(outcome.summary.unsuccessful, 0);
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.summary.success_percent(), None);
    }

    #[test]
    fn test_passing_expectation_still_creates_entry() {
        let suite = SuiteBuilder::new("s")
            .expect_values("exp1", "status", ["OK"])
            .build();

        let outcome = DataValidator::new(suite)
            .validate_rows(vec![row(&[("status", "OK")])])
            .unwrap();

        assert_eq!(
            outcome.results.get("status", "exp1").map(|c| c.len()),
            Some(0)
        );
        assert!(outcome.passed());
    }

    #[test]
    fn test_counts_per_value() {
        let suite = SuiteBuilder::new("s")
            .expect_values("exp1", "status", ["OK"])
            .build();

        let rows = ["BAD", "OK", "BAD", "WORSE"]
            .iter()
            .map(|s| row(&[("status", *s)]))
            .collect::<Vec<_>>();

        let outcome = DataValidator::new(suite).validate_rows(rows).unwrap();
        let counts = outcome.results.get("status", "exp1").unwrap();

        assert_eq!(counts.get(&UnexpectedValue::from("BAD")), Some(&2));
        assert_eq!(counts.get(&UnexpectedValue::from("WORSE")), Some(&1));
        assert_eq!(outcome.summary.status(), Status::Failed);
    }

    #[test]
    fn test_missing_field_counted() {
        let suite = SuiteBuilder::new("s")
            .expect_values("exp1", "status", ["OK"])
            .build();

        let outcome = DataValidator::new(suite)
            .validate_rows(vec![row(&[("other", "x")])])
            .unwrap();

        let counts = outcome.results.get("status", "exp1").unwrap();
        assert_eq!(counts.get(&UnexpectedValue::Missing), Some(&1));
    }

    #[test]
    fn test_unparsable_range_value_aborts() {
        let suite = SuiteBuilder::new("s")
            .expect_range("exp2", "age", 0, 120)
            .build();

        let rows = vec![row(&[("age", "5")]), row(&[("age", "five")])];
        let err = DataValidator::new(suite).validate_rows(rows).unwrap_err();

        match err {
            ValidationError::Expectation { row, code, source } => {
                assert_eq!(row, 2);
                assert_eq!(code, "exp2");
                assert_eq!(
                    source,
                    ExpectationError::NotAnInteger {
                        field: "age".to_string(),
                        value: Some("five".to_string()),
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_source_error_propagates() {
        let suite = SuiteBuilder::new("s")
            .expect_values("exp1", "status", ["OK"])
            .build();

        let rows: Vec<Result<Row>> = vec![
            Ok(row(&[("status", "OK")])),
            Err(ValidationError::io(
                "input.csv",
                std::io::Error::other("disk gone"),
            )),
        ];

        let err = DataValidator::new(suite).validate(rows).unwrap_err();
        assert!(matches!(err, ValidationError::Io { .. }));
    }

    #[test]
    fn test_field_order_follows_suite_order() {
        let suite = SuiteBuilder::new("s")
            .expect_range("exp_age", "age", 0, 1)
            .expect_values("exp_status", "status", ["OK"])
            .expect_values("exp_age_set", "age", ["0"])
            .build();

        let outcome = DataValidator::new(suite)
            .validate_rows(vec![row(&[("age", "0"), ("status", "OK")])])
            .unwrap();

        let layout: Vec<(String, Vec<String>)> = outcome
            .results
            .fields()
            .map(|(field, codes)| (field.to_string(), codes.keys().cloned().collect()))
            .collect();

        assert_eq!(
            layout,
            vec![
                (
                    "age".to_string(),
                    vec!["exp_age".to_string(), "exp_age_set".to_string()]
                ),
                ("status".to_string(), vec!["exp_status".to_string()]),
            ]
        );
    }
}
