//! Cayley table representation
//!
//! A `CayleyTable` is an explicit two-level map: `rows[a][b]` is the product
//! `a * b`. The top-level keys define the carrier set. Nothing about the rows
//! is assumed; lookups go through [`CayleyTable::product`], which reports an
//! absent key as a structural [`TableError::MissingEntry`].
//!
//! Rows are kept in ordered maps, so every search over the carrier set visits
//! elements in lexicographic label order.

use crate::domain::Element;
use crate::validate::{TableError, TableResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One row of the table: column element -> product
pub type Row = BTreeMap<Element, Element>;

/// A row whose column set disagrees with the carrier set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMismatch {
    pub row: Element,
    /// Carrier elements with no column in the row
    pub missing: Vec<Element>,
    /// Columns that are not carrier elements
    pub extra: Vec<Element>,
}

/// Binary operation table keyed by element labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CayleyTable {
    rows: BTreeMap<Element, Row>,
}

impl CayleyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(row, column, product)` triples
    pub fn from_products<I, E>(products: I) -> Self
    where
        I: IntoIterator<Item = (E, E, E)>,
        E: Into<Element>,
    {
        products
            .into_iter()
            .fold(Self::new(), |mut table, (row, column, product)| {
                table.set(row, column, product);
                table
            })
    }

    /// Set `row * column = product`, creating the row if needed
    pub fn set(
        &mut self,
        row: impl Into<Element>,
        column: impl Into<Element>,
        product: impl Into<Element>,
    ) {
        self.rows
            .entry(row.into())
            .or_default()
            .insert(column.into(), product.into());
    }

    /// Insert or replace an entire row
    pub fn insert_row(&mut self, element: impl Into<Element>, row: Row) -> Option<Row> {
        self.rows.insert(element.into(), row)
    }

    /// Remove an element's row, leaving its columns in other rows untouched
    pub fn remove_row(&mut self, element: &str) -> Option<Row> {
        self.rows.remove(element)
    }

    /// Number of elements in the carrier set
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Carrier-set elements in label order
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.rows.keys()
    }

    pub fn contains(&self, element: &str) -> bool {
        self.rows.contains_key(element)
    }

    pub fn row(&self, element: &str) -> Option<&Row> {
        self.rows.get(element)
    }

    /// Rows in label order
    pub fn rows(&self) -> impl Iterator<Item = (&Element, &Row)> + '_ {
        self.rows.iter()
    }

    /// Look up `row * column`
    pub fn product(
        &self,
        row: impl AsRef<str>,
        column: impl AsRef<str>,
    ) -> TableResult<&Element> {
        let (row, column) = (row.as_ref(), column.as_ref());
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .ok_or_else(|| TableError::MissingEntry {
                row: Element::new(row),
                column: Element::new(column),
            })
    }

    /// Check that every row's columns match the carrier set exactly
    ///
    /// Returns the first offending row (in label order) as `TableError::Malformed`.
    pub fn check_well_formed(&self) -> TableResult<()> {
        match self.row_mismatch() {
            None => Ok(()),
            Some(mismatch) => Err(TableError::Malformed {
                row: mismatch.row,
                missing: mismatch.missing,
                extra: mismatch.extra,
            }),
        }
    }

    /// First row (in label order) whose columns differ from the carrier set
    pub fn row_mismatch(&self) -> Option<RowMismatch> {
        let (element, row) = self
            .rows
            .iter()
            .find(|(_, row)| !row.keys().eq(self.rows.keys()))?;

        let carrier: BTreeSet<&Element> = self.rows.keys().collect();
        let columns: BTreeSet<&Element> = row.keys().collect();
        Some(RowMismatch {
            row: element.clone(),
            missing: carrier.difference(&columns).map(|e| (*e).clone()).collect(),
            extra: columns.difference(&carrier).map(|e| (*e).clone()).collect(),
        })
    }
}
