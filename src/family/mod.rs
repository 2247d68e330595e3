//! Document Families
//!
//! A family is one dialect of test-suite document: a fixed validator table
//! plus the name of the schema it is checked against. Tables are embedded
//! TOML resources.

pub mod registry;

pub use registry::ValidatorRegistry;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

use crate::validation::NodeValidator;

/// Families selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DocumentFamily {
    #[default]
    Krsu,
}

impl DocumentFamily {
    pub fn name(&self) -> &'static str {
        match self {
            DocumentFamily::Krsu => "krsu",
        }
    }

    fn embedded_table(&self) -> &'static str {
        match self {
            DocumentFamily::Krsu => include_str!("../../resources/families/krsu.toml"),
        }
    }

    /// Load this family's definition from its embedded table
    pub fn load(&self) -> Result<Family> {
        let file: FamilyFile = toml::from_str(self.embedded_table())
            .with_context(|| format!("Failed to parse built-in '{}' family table", self.name()))?;
        let family = Family::from(file);
        log::debug!(
            "family '{}': {} validators, schema {}",
            family.name,
            family.registry.len(),
            family.schema
        );
        Ok(family)
    }
}

/// Root family file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FamilyFile {
    pub family: FamilyMeta,
    #[serde(default)]
    pub validators: Vec<ValidatorEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FamilyMeta {
    pub name: String,
    /// File name of the schema, searched in the schema directories
    pub schema: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidatorEntry {
    pub tag: String,
    pub kind: NodeValidator,
}

/// Runtime family (registry built for lookups)
#[derive(Debug, Clone)]
pub struct Family {
    pub name: String,
    pub schema: String,
    pub description: Option<String>,
    pub registry: ValidatorRegistry,
}

impl From<FamilyFile> for Family {
    fn from(file: FamilyFile) -> Self {
        let registry = ValidatorRegistry::from_table(
            file.validators.into_iter().map(|entry| (entry.tag, entry.kind)),
        );

        Self {
            name: file.family.name,
            schema: file.family.schema,
            description: file.family.description,
            registry,
        }
    }
}
