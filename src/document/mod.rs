//! Document Loading
//!
//! Reading and parsing of the input document. Both steps are fatal on
//! failure.

pub mod element;

pub use element::{Element, Position};

use std::path::Path;

use crate::error::LoadError;

/// Read the whole document into memory.
///
/// The file handle is released before this returns.
pub fn read_document(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse document text into an XML tree.
///
/// A DOCTYPE is accepted; only input that is not well-formed fails.
pub fn parse_document(text: &str) -> Result<roxmltree::Document<'_>, LoadError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    log::debug!(
        "parsed document with root <{}>",
        doc.root_element().tag_name().name()
    );
    Ok(doc)
}
