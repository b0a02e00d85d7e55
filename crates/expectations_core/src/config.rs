//! Configuration document types.
//!
//! Every supported serialization (JSON, YAML, TOML) deserializes into the
//! same [`SuiteDocument`]. Ordered maps are used throughout so that the
//! order expectations are declared in is the order they are evaluated and
//! reported in.

use crate::{ConfigError, Expectation, Result, Suite, SuiteBuilder, DEFAULT_SUITE_NAME};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};

/// Tag for value-set expectations.
pub const EXPECT_VALUES: &str = "expect_values";

/// Tag for range expectations.
pub const EXPECT_RANGE: &str = "expect_range";

/// A rule object: one rule-type tag mapped to its parameters.
pub type RuleConfig = IndexMap<String, serde_json::Value>;

/// Root of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuiteDocument {
    /// The suite section; absent means an empty, unnamed suite
    #[serde(default)]
    pub suite: SuiteSection,
}

/// The `suite` section of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuiteSection {
    /// Suite name, defaults to "Unnamed Suite"
    #[serde(default)]
    pub name: Option<String>,

    /// Expectation code to rule object, in declaration order
    #[serde(default)]
    pub expectations: IndexMap<String, RuleConfig>,
}

/// Parameters of an `expect_values` rule.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueSetParams {
    /// Field the rule reads
    #[serde(alias = "field")]
    pub fld_name: String,

    /// Permitted values
    pub values: Vec<ConfigScalar>,
}

/// Parameters of an `expect_range` rule.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeParams {
    /// Field the rule reads
    #[serde(alias = "field")]
    pub fld_name: String,

    /// Lower bound (inclusive)
    #[serde(alias = "lower")]
    pub range_lwr: i64,

    /// Upper bound (inclusive)
    #[serde(alias = "upper")]
    pub range_upr: i64,
}

/// A scalar from a permitted-values list.
///
/// Rows are compared as raw strings, so every scalar is reduced to its
/// string form before it reaches an expectation. Numbers keep their
/// number form, so `1.0` stays `1.0` rather than collapsing to `1`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigScalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl fmt::Display for ConfigScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigScalar::Text(s) => f.write_str(s),
            ConfigScalar::Number(n) => write!(f, "{n}"),
            ConfigScalar::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl SuiteDocument {
    /// Builds the runtime suite.
    ///
    /// # Errors
    ///
    /// Fails on the first expectation whose rule type is unknown or whose
    /// parameters are missing or malformed. No partial suite is returned.
    pub fn into_suite(self) -> Result<Suite> {
        let name = self
            .suite
            .name
            .unwrap_or_else(|| DEFAULT_SUITE_NAME.to_string());

        let mut builder = SuiteBuilder::new(name);
        for (code, rule) in self.suite.expectations {
            let expectation = build_expectation(&code, rule)?;
            debug!(
                "Registered expectation '{}' ({}) on field '{}'",
                code,
                expectation.kind().tag(),
                expectation.field()
            );
            builder = builder.expectation(code, expectation);
        }

        let suite = builder.build();
        if suite.is_empty() {
            warn!("Suite '{}' declares no expectations", suite.name());
        }
        Ok(suite)
    }
}

fn build_expectation(code: &str, rule: RuleConfig) -> Result<Expectation> {
    let found = rule.len();
    let mut entries = rule.into_iter();
    let (tag, params) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(ConfigError::AmbiguousRule {
                code: code.to_string(),
                found,
            });
        }
    };

    match tag.as_str() {
        EXPECT_VALUES => {
            let params: ValueSetParams = parse_params(code, &tag, params)?;
            let values = params.values.iter().map(ToString::to_string);
            Ok(Expectation::value_set(params.fld_name, values))
        }
        EXPECT_RANGE => {
            let params: RangeParams = parse_params(code, &tag, params)?;
            if params.range_lwr > params.range_upr {
                return Err(ConfigError::invalid_parameters(
                    code,
                    &tag,
                    format!(
                        "lower bound {} is greater than upper bound {}",
                        params.range_lwr, params.range_upr
                    ),
                ));
            }
            Ok(Expectation::range(
                params.fld_name,
                params.range_lwr,
                params.range_upr,
            ))
        }
        _ => Err(ConfigError::UnknownRuleType {
            code: code.to_string(),
            tag,
        }),
    }
}

fn parse_params<T: DeserializeOwned>(code: &str, tag: &str, params: serde_json::Value) -> Result<T> {
    serde_json::from_value(params)
        .map_err(|e| ConfigError::invalid_parameters(code, tag, e.to_string()))
}
