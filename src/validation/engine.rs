//! Validation Engine
//!
//! Pre-order tree walk dispatching each element to its registered validator.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::document::Element;
use crate::family::ValidatorRegistry;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Advisory finding about document content
    Warning,
    /// Trace line, not a finding
    Info,
}

/// A single rendered diagnostic line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Tag of the element the diagnostic concerns
    pub tag: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Diagnostics in emission order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning(&mut self, tag: &str, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            tag: tag.to_string(),
            message,
        });
    }

    pub fn add_info(&mut self, tag: &str, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Info,
            tag: tag.to_string(),
            message,
        });
    }

    pub fn extend(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// True when no advisory findings were recorded
    pub fn is_clean(&self) -> bool {
        self.warning_count() == 0
    }
}

/// Environment a validation run resolves paths against
#[derive(Debug, Clone)]
pub struct ValidationContext {
    base_dir: PathBuf,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ValidationContext {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a path taken from the document. Absolute paths pass through.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Whether `path` names an existing regular file
    pub fn is_file(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }
}

/// Walk the tree rooted at `root`, validating every element
pub fn walk(
    root: &Element,
    registry: &ValidatorRegistry,
    ctx: &ValidationContext,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    visit(root, registry, ctx, &mut result);
    result
}

fn visit(
    element: &Element,
    registry: &ValidatorRegistry,
    ctx: &ValidationContext,
    result: &mut ValidationResult,
) {
    match registry.lookup(&element.tag) {
        Some(validator) => {
            log::debug!("<{}> at {} -> {:?}", element.tag, element.position, validator);
            validator.validate(element, ctx, result);
        }
        None => {
            log::debug!("<{}> at {} has no validator", element.tag, element.position);
            result.add_warning(&element.tag, format!("Not found tag - {}", element.tag));
        }
    }

    for child in &element.children {
        visit(child, registry, ctx, result);
    }
}
