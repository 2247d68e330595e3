//! Validation Engine
//!
//! Tree walking and per-node validators, separated from loading and schema
//! concerns.

pub mod engine;
pub mod validators;

pub use engine::{walk, Diagnostic, Severity, ValidationContext, ValidationResult};
pub use validators::NodeValidator;
