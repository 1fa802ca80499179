//! Error types for table validation and queries

use crate::domain::{join_elements, Element};
use thiserror::Error;

/// Structural errors raised by table lookups and queries
///
/// These are distinct from a legitimate negative answer: a well-formed table
/// with no identity yields `Ok(None)`, never one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row's columns disagree with the carrier set
    #[error(
        "Malformed table: row {row} is missing [{}] and has extra [{}]",
        join_elements(.missing),
        join_elements(.extra)
    )]
    Malformed {
        row: Element,
        missing: Vec<Element>,
        extra: Vec<Element>,
    },

    /// Lookup of `row ∘ column` referenced an absent key
    #[error("No entry for {row} * {column}")]
    MissingEntry { row: Element, column: Element },

    /// Queried element is not part of the carrier set
    #[error("Element {0} is not in the carrier set")]
    UnknownElement(Element),

    /// Table exceeds the configured size limit
    #[error("Table of order {order} exceeds the limit of {limit} elements")]
    TooLarge { order: usize, limit: usize },
}

/// Type alias for table query results
pub type TableResult<T> = Result<T, TableError>;
