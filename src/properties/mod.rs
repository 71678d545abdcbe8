//! Properties-format documents
//!
//! This module parses the line-oriented `key=value` text format used by
//! deployment property files: `#`/`!` comments, `=`/`:`/whitespace key
//! separators, backslash line continuation, and character escapes including
//! `\uXXXX`.

use std::collections::HashMap;
use std::io::Read;

use thiserror::Error;

mod parser;

/// Error raised while reading or parsing a properties document
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// A `\uXXXX` escape with missing or non-hex digits, or one that does
    /// not denote a valid character
    #[error("malformed \\uXXXX escape on line {line}")]
    MalformedUnicodeEscape { line: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A parsed properties document: string keys mapped to string values
///
/// Load order is irrelevant; when the same key appears more than once the
/// last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Parse a properties document from text
    pub fn parse(input: &str) -> Result<Self, PropertiesError> {
        parser::parse(input)
    }

    /// Read a stream to completion and parse it as a properties document
    pub fn load(mut reader: impl Read) -> Result<Self, PropertiesError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::parse(&contents)
    }

    /// Look up the value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate over all keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}

#[cfg(test)]
mod tests;
