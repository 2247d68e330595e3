//! Validation pipeline: read, parse, schema check, tree walk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::document::{self, Element};
use crate::error::LoadError;
use crate::family::{DocumentFamily, Family, ValidatorRegistry};
use crate::schema::{self, Schema};
use crate::validation::{self, ValidationContext, ValidationResult};

/// A family's validators together with its compiled schema
#[derive(Debug)]
pub struct Validator {
    family: Family,
    schema: Schema,
}

impl Validator {
    /// Load the family table and locate and compile its schema
    pub fn new(family: DocumentFamily, schema_dirs: &[PathBuf]) -> Result<Self> {
        let family = family.load()?;
        let path = schema::locate_schema(&family.schema, schema_dirs)?;
        let schema = Schema::from_file(&path)?;
        Ok(Self::with_schema(family, schema))
    }

    pub fn with_schema(family: Family, schema: Schema) -> Self {
        Self { family, schema }
    }

    pub fn family(&self) -> &Family {
        &self.family
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.family.registry
    }

    /// Validate the document at `path`
    pub fn validate_file(
        &mut self,
        path: &Path,
        ctx: &ValidationContext,
    ) -> Result<ValidationResult> {
        let text = document::read_document(path)?;
        self.validate_str(&text, ctx)
            .with_context(|| format!("Failed to validate {}", path.display()))
    }

    /// Validate document text.
    ///
    /// Schema violations are reported as findings ahead of the per-node
    /// diagnostics; only a malformed document is an error.
    pub fn validate_str(
        &mut self,
        text: &str,
        ctx: &ValidationContext,
    ) -> Result<ValidationResult, LoadError> {
        let doc = document::parse_document(text)?;
        let mut result = ValidationResult::new();

        let report = self.schema.validate(text);
        if !report.is_valid() {
            log::warn!(
                "document does not conform to the '{}' schema ({} violations)",
                self.family.name,
                report.violations.len()
            );
        }
        for violation in &report.violations {
            result.add_warning(&violation.tag, format!("--- schema: {}", violation));
        }

        let root = Element::from_node(doc.root_element());
        log::info!("validating {} elements", root.count());
        result.extend(validation::walk(&root, self.registry(), ctx));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="testinfo">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="timelimit" type="xs:string"/>
      </xs:sequence>
    </xs:complexType>
  </xs:element>
</xs:schema>"#;

    fn validator() -> Validator {
        let family = DocumentFamily::Krsu.load().unwrap();
        Validator::with_schema(family, Schema::parse(SCHEMA).unwrap())
    }

    #[test]
    fn test_schema_findings_come_first() {
        let mut v = validator();
        let result = v
            .validate_str(
                "<testinfo><timelimit>1</timelimit><memorylimit>x</memorylimit></testinfo>",
                &ValidationContext::default(),
            )
            .unwrap();

        let warnings: Vec<_> = result.warnings().collect();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].tag, "memorylimit");
        assert!(warnings[0].message.starts_with("--- schema: 1: Element 'memorylimit'"));
        assert_eq!(warnings[1].message, "--- (memorylimit) <'x'> not integer");
    }

    #[test]
    fn test_malformed_document_is_fatal() {
        let err = validator()
            .validate_str("<testinfo>", &ValidationContext::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_missing_schema_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = Validator::new(DocumentFamily::Krsu, &[dir.path().to_path_buf()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::SchemaMissing { .. })
        ));
    }
}
