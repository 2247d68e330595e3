//! Testinfo Validator
//!
//! Checks a test-suite definition (`testinfo.xml`) before the harness runs.
//!
//! This library provides:
//! - Document loading and schema conformance checks
//! - Tag-dispatched validation of every element
//! - Family tables mapping tags to validators
//! - Configuration management

pub mod config;
pub mod document;
pub mod error;
pub mod family;
pub mod output;
pub mod schema;
pub mod validation;
pub mod validator;

pub use config::Config;
pub use document::Element;
pub use error::LoadError;
pub use family::{DocumentFamily, ValidatorRegistry};
pub use validation::{
    walk, Diagnostic, NodeValidator, Severity, ValidationContext, ValidationResult,
};
pub use validator::Validator;
