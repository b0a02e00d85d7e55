//! # Expectations Validator
//!
//! Validation engine for expectation suites. This crate provides:
//!
//! - A delimited row source ([`DelimitedReader`]) for pipe-separated files
//! - The single-pass engine ([`DataValidator`]) that applies every
//!   expectation to every row and tallies unexpected values
//! - The report generator ([`render_text`], [`render_json`])
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::SuiteBuilder;
//! use expectations_validator::{render_text, DataValidator, DelimitedReader};
//!
//! let suite = SuiteBuilder::new("orders")
//!     .expect_values("exp1", "status", ["OK", "WARN"])
//!     .build();
//!
//! let data = "status\nOK\nFAIL\nOK\n";
//! let rows = DelimitedReader::new(data.as_bytes()).unwrap();
//! let outcome = DataValidator::new(suite).validate(rows).unwrap();
//!
//! let report = render_text(&outcome);
//! assert!(report.contains("Result: 1 unexpected values found. 33.33% of 3 total rows."));
//! ```

mod dataset;
mod engine;
mod error;
mod report;

pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use report::*;
