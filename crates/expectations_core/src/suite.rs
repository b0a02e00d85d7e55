//! Expectation suites.

use crate::Expectation;
use indexmap::IndexMap;

/// Name used when the configuration does not give one.
pub const DEFAULT_SUITE_NAME: &str = "Unnamed Suite";

/// A named, ordered collection of expectations keyed by code.
///
/// Membership is fixed once the suite is built; only the contained
/// expectations change, through their failure latch.
#[derive(Debug, Clone)]
pub struct Suite {
    name: String,
    expectations: IndexMap<String, Expectation>,
}

impl Suite {
    /// Creates an empty suite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expectations: IndexMap::new(),
        }
    }

    /// Creates a suite from already-built expectations.
    pub fn from_expectations(
        name: impl Into<String>,
        expectations: IndexMap<String, Expectation>,
    ) -> Self {
        Self {
            name: name.into(),
            expectations,
        }
    }

    /// Suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of expectations.
    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    /// Returns true if the suite has no expectations.
    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }

    /// Looks up an expectation by code.
    pub fn get(&self, code: &str) -> Option<&Expectation> {
        self.expectations.get(code)
    }

    /// Iterates expectations in declaration order.
    pub fn expectations(&self) -> impl Iterator<Item = (&str, &Expectation)> {
        self.expectations.iter().map(|(code, exp)| (code.as_str(), exp))
    }

    /// Iterates expectations mutably in declaration order.
    pub fn expectations_mut(&mut self) -> impl Iterator<Item = (&str, &mut Expectation)> {
        self.expectations
            .iter_mut()
            .map(|(code, exp)| (code.as_str(), exp))
    }

    /// Number of expectations that never saw an unexpected value.
    pub fn successful_count(&self) -> usize {
        self.expectations.values().filter(|e| !e.failed()).count()
    }

    /// Number of expectations that saw at least one unexpected value.
    pub fn unsuccessful_count(&self) -> usize {
        self.expectations.values().filter(|e| e.failed()).count()
    }

    /// Descriptions keyed by code, in declaration order.
    pub fn descriptions(&self) -> IndexMap<String, String> {
        self.expectations
            .iter()
            .map(|(code, exp)| (code.clone(), exp.description().to_string()))
            .collect()
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::new(DEFAULT_SUITE_NAME)
    }
}
