//! # Expectations Core
//!
//! Core data structures for the data validator.
//!
//! A suite of expectations is declared in a configuration file, applied to
//! every row of a delimited data file, and summarized in a report. This
//! crate holds the types shared by every stage of that pipeline.
//!
//! ## Key Concepts
//!
//! - **Expectation**: a single named constraint on one field (allowed value
//!   set or inclusive integer range)
//! - **Suite**: an ordered collection of expectations keyed by code
//! - **ValidationResults**: per-field, per-expectation frequency tables of
//!   unexpected values
//! - **ValidationSummary**: row count and successful/unsuccessful counts
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{Row, SuiteBuilder};
//!
//! let mut suite = SuiteBuilder::new("people")
//!     .expect_range("exp2", "age", 0, 120)
//!     .build();
//!
//! let row: Row = [("age".to_string(), "200".to_string())].into();
//! for (_, expectation) in suite.expectations_mut() {
//!     expectation.evaluate(&row).unwrap();
//! }
//!
//! assert_eq!(suite.unsuccessful_count(), 1);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod expectation;
pub mod outcome;
pub mod suite;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use expectation::*;
pub use outcome::*;
pub use suite::*;
