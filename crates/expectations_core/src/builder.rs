//! Builder pattern for creating expectation suites.
//!
//! This module provides a fluent API for assembling a [`Suite`] in code,
//! mostly useful in tests and for embedding the engine without a
//! configuration file.

use crate::{Expectation, Suite, DEFAULT_SUITE_NAME};
use indexmap::IndexMap;

/// Builder for creating a `Suite`.
///
/// Expectations keep the order in which they are added. Adding a code a
/// second time replaces the earlier expectation in place.
///
/// # Example
///
/// ```rust
/// use expectations_core::SuiteBuilder;
///
/// let suite = SuiteBuilder::new("orders")
///     .expect_values("exp1", "status", ["OK", "WARN"])
///     .expect_range("exp2", "age", 0, 120)
///     .build();
///
/// assert_eq!(suite.name(), "orders");
/// assert_eq!(suite.len(), 2);
/// ```
#[derive(Debug)]
pub struct SuiteBuilder {
    name: String,
    expectations: IndexMap<String, Expectation>,
}

impl SuiteBuilder {
    /// Creates a new suite builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expectations: IndexMap::new(),
        }
    }

    /// Adds an already-built expectation under `code`.
    pub fn expectation(mut self, code: impl Into<String>, expectation: Expectation) -> Self {
        self.expectations.insert(code.into(), expectation);
        self
    }

    /// Adds a value-set expectation.
    pub fn expect_values<I, S>(
        self,
        code: impl Into<String>,
        field: impl Into<String>,
        values: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expectation(code, Expectation::value_set(field, values))
    }

    /// Adds an inclusive range expectation.
    pub fn expect_range(
        self,
        code: impl Into<String>,
        field: impl Into<String>,
        lower: i64,
        upper: i64,
    ) -> Self {
        self.expectation(code, Expectation::range(field, lower, upper))
    }

    /// Builds the suite.
    pub fn build(self) -> Suite {
        Suite::from_expectations(self.name, self.expectations)
    }
}

impl Default for SuiteBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SUITE_NAME)
    }
}
