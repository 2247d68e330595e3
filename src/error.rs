//! Fatal loader errors.
//!
//! Anything here aborts the run. Per-node findings are diagnostics, not
//! errors, and live in [`crate::validation`].

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaError;

/// Errors raised while loading the document or its schema
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document is not well-formed XML")]
    Parse(#[from] roxmltree::Error),

    #[error("schema '{name}' not found (searched: {})", display_dirs(.searched))]
    SchemaMissing { name: String, searched: Vec<PathBuf> },

    #[error("schema {path} cannot be compiled")]
    SchemaInvalid {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },
}

fn display_dirs(dirs: &[PathBuf]) -> String {
    if dirs.is_empty() {
        return "nothing".to_string();
    }
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
