//! Validator Registry
//!
//! Tag -> validator mapping, built once per run and read-only afterwards.

use std::collections::HashMap;

use crate::validation::NodeValidator;

#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<String, NodeValidator>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from (tag, validator) pairs
    pub fn from_table<K, I>(table: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, NodeValidator)>,
    {
        let mut registry = Self::new();
        registry.set_validators(table);
        registry
    }

    /// Replace the whole table. Later duplicates of a tag win.
    pub fn set_validators<K, I>(&mut self, table: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, NodeValidator)>,
    {
        self.validators = table
            .into_iter()
            .map(|(tag, validator)| (tag.into(), validator))
            .collect();
    }

    /// Get the validator registered for a tag
    pub fn lookup(&self, tag: &str) -> Option<NodeValidator> {
        self.validators.get(tag).copied()
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
