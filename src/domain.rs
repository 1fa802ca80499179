//! Core domain types for Cayley table operations
//!
//! This module contains type-safe wrappers for element labels and dense element
//! indices. Keeping them distinct prevents mixing a label lookup (string keyed,
//! fallible) with an index lookup (position in the carrier set, infallible once
//! the table has been indexed).
//!
//! These types are intentionally kept in a separate module to avoid circular dependencies
//! and make them easily reusable across the codebase.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque label of a carrier-set element
///
/// Serialized transparently, so `"e"` in a JSON table decodes straight into `Element`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(String);

impl Element {
    pub fn new(label: impl Into<String>) -> Self {
        Element(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Element {
    fn from(label: &str) -> Self {
        Element::new(label)
    }
}

impl From<String> for Element {
    fn from(label: String) -> Self {
        Element(label)
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Element {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Element {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Element {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type-safe wrapper for an element's position in an indexed carrier set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementIndex(usize);

impl ElementIndex {
    pub fn new(index: usize) -> Self {
        ElementIndex(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for ElementIndex {
    fn from(index: usize) -> Self {
        ElementIndex::new(index)
    }
}

/// Render a list of elements as `a, b, c`
pub fn join_elements<'a, I>(elements: I) -> String
where
    I: IntoIterator<Item = &'a Element>,
{
    elements
        .into_iter()
        .map(Element::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
