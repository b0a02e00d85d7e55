//! Loader for expectation suites (JSON/YAML/TOML formats).
//!
//! This module turns a configuration file into a ready-to-run
//! [`Suite`]. Each format is only an adapter: all of them deserialize into
//! the same [`SuiteDocument`], which is then checked and converted.
//!
//! # Example
//!
//! ```rust
//! use expectations_parser::parse_yaml;
//!
//! let yaml = r#"
//! suite:
//!   name: orders
//!   expectations:
//!     exp1:
//!       expect_values:
//!         fld_name: status
//!         values: [OK, WARN]
//! "#;
//!
//! let suite = parse_yaml(yaml).expect("Failed to parse suite");
//! assert_eq!(suite.name(), "orders");
//! assert_eq!(suite.len(), 1);
//! ```

use expectations_core::{ConfigError, Suite, SuiteDocument};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a suite.
#[derive(Debug, Error)]
pub enum ParserError {
    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// The document parsed but does not describe a valid suite
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// File I/O error
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    IoError {
        /// Configuration path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Unsupported file format
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a suite from a JSON string.
pub fn parse_json(content: &str) -> Result<Suite> {
    let document: SuiteDocument = serde_json::from_str(content)?;
    Ok(document.into_suite()?)
}

/// Parse a suite from a YAML string.
pub fn parse_yaml(content: &str) -> Result<Suite> {
    let document: SuiteDocument = serde_yaml_ng::from_str(content)?;
    Ok(document.into_suite()?)
}

/// Parse a suite from a TOML string.
///
/// # Example
///
/// ```rust
/// use expectations_parser::parse_toml;
///
/// let toml = r#"
/// [suite]
/// name = "people"
///
/// [suite.expectations.exp2.expect_range]
/// fld_name = "age"
/// range_lwr = 0
/// range_upr = 120
/// "#;
///
/// let suite = parse_toml(toml).unwrap();
/// assert_eq!(suite.get("exp2").unwrap().field(), "age");
/// ```
pub fn parse_toml(content: &str) -> Result<Suite> {
    let document: SuiteDocument =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(document.into_suite()?)
}

/// Detect the configuration format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json` → `ConfigFormat::Json`
/// * `.yaml`, `.yml` → `ConfigFormat::Yaml`
/// * `.toml` → `ConfigFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(ConfigFormat::Json),
        "yaml" | "yml" => Ok(ConfigFormat::Yaml),
        "toml" => Ok(ConfigFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a suite from a file with automatic format detection.
///
/// The format is chosen from the extension alone, never from the content.
/// Detection runs before the file is read, so an unsupported extension is
/// reported even when the file does not exist.
///
/// ```no_run
/// use expectations_parser::parse_file;
/// use std::path::Path;
///
/// let suite = parse_file(Path::new("expectations.yml")).unwrap();
/// println!("Loaded suite: {}", suite.name());
/// ```
pub fn parse_file(path: &Path) -> Result<Suite> {
    let format = detect_format(path)?;
    debug!("Detected {:?} configuration: {}", format, path.display());

    let content = std::fs::read_to_string(path).map_err(|source| ParserError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    let suite = match format {
        ConfigFormat::Json => parse_json(&content),
        ConfigFormat::Yaml => parse_yaml(&content),
        ConfigFormat::Toml => parse_toml(&content),
    }?;

    info!(
        "Loaded suite '{}' with {} expectations",
        suite.name(),
        suite.len()
    );
    Ok(suite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectations_core::{ExpectationKind, DEFAULT_SUITE_NAME};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const YAML_SUITE: &str = r#"
suite:
  name: Orders Suite
  expectations:
    exp_status:
      expect_values:
        fld_name: status
        values:
          - OK
          - WARN
    exp_age:
      expect_range:
        fld_name: age
        range_lwr: 0
        range_upr: 120
    exp_code:
      expect_values:
        fld_name: code
        values: [A, B]
"#;

    fn codes(suite: &Suite) -> Vec<String> {
        suite.expectations().map(|(c, _)| c.to_string()).collect()
    }

    #[test]
    fn test_parse_yaml_preserves_declaration_order() {
        let suite = parse_yaml(YAML_SUITE).expect("Failed to parse YAML suite");

        assert_eq!(suite.name(), "Orders Suite");
        assert_eq!(codes(&suite), vec!["exp_status", "exp_age", "exp_code"]);
        assert_eq!(
            suite.get("exp_age").unwrap().kind(),
            &ExpectationKind::Range {
                lower: 0,
                upper: 120
            }
        );
    }

    #[test]
    fn test_parse_json_preserves_declaration_order() {
        let json = r#"{
            "suite": {
                "name": "Orders Suite",
                "expectations": {
                    "z_last_alphabetically": {"expect_values": {"fld_name": "status", "values": ["OK"]}},
                    "a_first_alphabetically": {"expect_range": {"fld_name": "age", "range_lwr": 1, "range_upr": 2}}
                }
            }
        }"#;

        let suite = parse_json(json).expect("Failed to parse JSON suite");
        assert_eq!(
            codes(&suite),
            vec!["z_last_alphabetically", "a_first_alphabetically"]
        );
    }

    #[test]
    fn test_parse_toml_suite() {
        let toml = r#"
[suite]
name = "Orders Suite"

[suite.expectations.exp_status.expect_values]
fld_name = "status"
values = ["OK", "WARN"]

[suite.expectations.exp_age.expect_range]
fld_name = "age"
range_lwr = 0
range_upr = 120
"#;

        let suite = parse_toml(toml).expect("Failed to parse TOML suite");
        assert_eq!(codes(&suite), vec!["exp_status", "exp_age"]);
    }

    #[test]
    fn test_formats_are_equivalent() {
        let json = r#"{"suite": {"name": "Orders Suite", "expectations": {
            "exp_status": {"expect_values": {"fld_name": "status", "values": ["OK", "WARN"]}},
            "exp_age": {"expect_range": {"fld_name": "age", "range_lwr": 0, "range_upr": 120}},
            "exp_code": {"expect_values": {"fld_name": "code", "values": ["A", "B"]}}
        }}}"#;

        let from_yaml = parse_yaml(YAML_SUITE).unwrap();
        let from_json = parse_json(json).unwrap();

        assert_eq!(from_yaml.name(), from_json.name());
        assert_eq!(codes(&from_yaml), codes(&from_json));
        assert_eq!(from_yaml.descriptions(), from_json.descriptions());
    }

    #[test]
    fn test_missing_suite_section_defaults() {
        let suite = parse_json("{}").unwrap();
        assert_eq!(suite.name(), DEFAULT_SUITE_NAME);
        assert!(suite.is_empty());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_yaml("suite: [unterminated");
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_json("{ not json");
        assert!(matches!(result.unwrap_err(), ParserError::JsonError(_)));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_toml("[[[invalid syntax");
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_unknown_rule_type_is_config_error() {
        let yaml = r#"
suite:
  expectations:
    exp1:
      expect_pattern:
        fld_name: status
"#;
        let err = parse_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ParserError::Config(ConfigError::UnknownRuleType { .. })
        ));
        assert!(err.to_string().contains("expect_pattern"));
    }

    #[test]
    fn test_missing_parameter_is_config_error() {
        let yaml = r#"
suite:
  expectations:
    exp1:
      expect_values:
        fld_name: status
"#;
        let err = parse_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ParserError::Config(ConfigError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("suite.json")).unwrap(),
            ConfigFormat::Json
        );
        assert_eq!(
            detect_format(Path::new("suite.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("suite.YAML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("suite.toml")).unwrap(),
            ConfigFormat::Toml
        );
    }

    #[test]
    fn test_detect_format_unsupported() {
        let result = detect_format(Path::new("suite.ini"));
        assert!(matches!(
            result.unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let result = detect_format(Path::new("suite"));
        assert!(matches!(result.unwrap_err(), ParserError::InvalidExtension));
    }

    #[test]
    fn test_parse_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expectations.yml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(YAML_SUITE.as_bytes()).unwrap();

        let suite = parse_file(&path).expect("Failed to parse YAML file");
        assert_eq!(suite.len(), 3);
    }

    #[test]
    fn test_parse_file_ignores_content_when_choosing_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expectations.json");
        std::fs::write(&path, YAML_SUITE).unwrap();

        assert!(matches!(
            parse_file(&path).unwrap_err(),
            ParserError::JsonError(_)
        ));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("does/not/exist.json"));
        assert!(matches!(result.unwrap_err(), ParserError::IoError { .. }));
    }
}
