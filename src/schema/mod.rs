//! Schema Conformance
//!
//! Compiles a family's XML Schema with libxml2 and checks document text
//! against it. libxml2's structured errors become [`SchemaViolation`]s.

use std::fmt;
use std::path::{Path, PathBuf};

use libxml::error::StructuredError;
use libxml::parser::Parser;
use libxml::schemas::{SchemaParserContext, SchemaValidationContext};
use thiserror::Error;

use crate::error::LoadError;

/// libxml2 refused to compile the schema
#[derive(Debug, Error)]
#[error("{}", display_messages(.messages))]
pub struct SchemaError {
    pub messages: Vec<String>,
}

impl From<Vec<StructuredError>> for SchemaError {
    fn from(errors: Vec<StructuredError>) -> Self {
        Self {
            messages: errors.iter().map(error_message).collect(),
        }
    }
}

fn display_messages(messages: &[String]) -> String {
    if messages.is_empty() {
        return "rejected without a reason".to_string();
    }
    messages.join("; ")
}

/// A compiled schema, ready to check documents
pub struct Schema {
    context: SchemaValidationContext,
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema").finish_non_exhaustive()
    }
}

impl Schema {
    /// Compile schema text
    pub fn parse(text: &str) -> Result<Self, SchemaError> {
        let mut parser = SchemaParserContext::from_buffer(text);
        let context = SchemaValidationContext::from_parser(&mut parser)?;
        Ok(Self { context })
    }

    /// Read and compile a schema file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| LoadError::SchemaInvalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check document text, collecting every violation libxml2 reports.
    ///
    /// The text is expected to be well-formed already; a document libxml2
    /// cannot load is reported as a single violation.
    pub fn validate(&mut self, text: &str) -> SchemaReport {
        let doc = match Parser::default().parse_string(text) {
            Ok(doc) => doc,
            Err(err) => {
                log::warn!("libxml2 could not load the document: {:?}", err);
                return SchemaReport {
                    violations: vec![SchemaViolation {
                        tag: String::new(),
                        line: None,
                        message: format!("document could not be loaded ({:?})", err),
                    }],
                };
            }
        };

        match self.context.validate_document(&doc) {
            Ok(()) => SchemaReport::default(),
            Err(errors) => SchemaReport {
                violations: errors.iter().map(SchemaViolation::from_error).collect(),
            },
        }
    }
}

/// One place where the document departs from the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Tag of the offending element, empty when libxml2 does not name one
    pub tag: String,
    pub line: Option<usize>,
    pub message: String,
}

impl SchemaViolation {
    fn from_error(error: &StructuredError) -> Self {
        let message = error_message(error);
        let tag = element_name(&message).unwrap_or_default().to_string();
        Self {
            tag,
            line: error.line.and_then(|line| usize::try_from(line).ok()),
            message,
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: {}", line, self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaReport {
    pub violations: Vec<SchemaViolation>,
}

impl SchemaReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

fn error_message(error: &StructuredError) -> String {
    error
        .message
        .as_deref()
        .unwrap_or("unknown libxml2 error")
        .trim_end()
        .to_string()
}

/// Element name from a libxml2 message of the form `Element '{ns}name': ...`
fn element_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("Element '")?;
    let (name, _) = rest.split_once('\'')?;
    name.rsplit('}').next()
}

/// Find `name` in the first directory that has it
pub fn locate_schema(name: &str, dirs: &[PathBuf]) -> Result<PathBuf, LoadError> {
    for dir in dirs {
        let candidate = dir.join(name);
        if candidate.is_file() {
            log::info!("using schema {}", candidate.display());
            return Ok(candidate);
        }
        log::debug!("schema {} not in {}", name, dir.display());
    }

    Err(LoadError::SchemaMissing {
        name: name.to_string(),
        searched: dirs.to_vec(),
    })
}
