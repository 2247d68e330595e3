//! Node Validators
//!
//! Stateless per-tag checks. Each variant inspects one element and records
//! zero or more diagnostics; none of them mutate the tree or fail.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use super::engine::{ValidationContext, ValidationResult};
use crate::document::Element;

/// Validator variant selected for a tag by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeValidator {
    /// Accepts anything, emits a trace line
    Generic,
    Text,
    Group,
    /// Text must be a non-empty run of ASCII digits
    Integer,
    /// Text must name an existing regular file
    File,
    Checker,
    /// `input` and `output` attributes must name existing regular files
    Test,
}

impl NodeValidator {
    pub fn name(&self) -> &'static str {
        match self {
            NodeValidator::Generic => "Generic",
            NodeValidator::Text => "Text",
            NodeValidator::Group => "Group",
            NodeValidator::Integer => "Integer",
            NodeValidator::File => "File",
            NodeValidator::Checker => "Checker",
            NodeValidator::Test => "Test",
        }
    }

    pub fn validate(
        &self,
        element: &Element,
        ctx: &ValidationContext,
        result: &mut ValidationResult,
    ) {
        match self {
            NodeValidator::Generic | NodeValidator::Text | NodeValidator::Group => {
                trace(self.name(), element, result);
            }
            NodeValidator::Integer => check_integer(element, result),
            NodeValidator::File | NodeValidator::Checker => check_file(element, ctx, result),
            NodeValidator::Test => {
                for attr in ["input", "output"] {
                    check_file_attribute(element, attr, ctx, result);
                }
            }
        }
    }
}

impl fmt::Display for NodeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn trace(name: &str, element: &Element, result: &mut ValidationResult) {
    result.add_info(
        &element.tag,
        format!(
            "<{}> {} {} {}",
            name,
            element.tag,
            quoted(element.text.as_deref()),
            render_attributes(&element.attributes)
        ),
    );
}

fn check_integer(element: &Element, result: &mut ValidationResult) {
    let text = element.text.as_deref();
    if !text.is_some_and(is_digits) {
        result.add_warning(
            &element.tag,
            format!("--- ({}) <{}> not integer", element.tag, quoted(text)),
        );
    }
}

fn check_file(element: &Element, ctx: &ValidationContext, result: &mut ValidationResult) {
    match element.text.as_deref() {
        Some(path) => check_path(&element.tag, path, ctx, result),
        None => result.add_warning(&element.tag, format!("--- ({}) no path given", element.tag)),
    }
}

fn check_file_attribute(
    element: &Element,
    attr: &str,
    ctx: &ValidationContext,
    result: &mut ValidationResult,
) {
    match element.attribute(attr) {
        Some(path) => check_path(&element.tag, path, ctx, result),
        None => result.add_warning(
            &element.tag,
            format!("--- ({}) missing attribute '{}'", element.tag, attr),
        ),
    }
}

fn check_path(tag: &str, path: &str, ctx: &ValidationContext, result: &mut ValidationResult) {
    if !ctx.is_file(path) {
        result.add_warning(tag, format!("--- {} not exists", path));
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn quoted(text: Option<&str>) -> String {
    match text {
        Some(t) => format!("'{}'", t),
        None => "None".to_string(),
    }
}

fn render_attributes(attributes: &BTreeMap<String, String>) -> String {
    let inner = attributes
        .iter()
        .map(|(k, v)| format!("{}='{}'", k, v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", inner)
}
