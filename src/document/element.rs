//! Element Tree
//!
//! Owned, read-only view of a parsed document: tag, text, attributes and
//! children. No validation logic here.

use std::collections::BTreeMap;
use std::fmt;

/// 1-based source position of an element's start tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One element of the document tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Local tag name, the registry dispatch key
    pub tag: String,
    /// Text before the first child, if any
    pub text: Option<String>,
    /// Attributes by local name
    pub attributes: BTreeMap<String, String>,
    /// Child elements in document order
    pub children: Vec<Element>,
    pub position: Position,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Build the owned tree from a parsed element node.
    ///
    /// Comments, processing instructions and text siblings are dropped; only
    /// element children are kept.
    pub fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let pos = node.document().text_pos_at(node.range().start);

        Self {
            tag: node.tag_name().name().to_string(),
            text: node.text().map(str::to_string),
            attributes: node
                .attributes()
                .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                .collect(),
            children: node
                .children()
                .filter(|child| child.is_element())
                .map(Element::from_node)
                .collect(),
            position: Position {
                line: pos.row,
                column: pos.col,
            },
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Number of elements in this subtree, including self
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}
