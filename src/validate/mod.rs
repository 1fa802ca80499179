//! Group table validation module
//!
//! This module checks a [`CayleyTable`] against the group axioms and answers
//! the derived queries: carrier set, identity element and inverses.
//!
//! Two kinds of negative answer are kept apart:
//! - a legitimate absence (`Ok(None)` from [`find_identity`] or
//!   [`find_inverse`], `false` from [`is_valid_group`]);
//! - a structural problem with the input (`Err(TableError)`), such as a
//!   malformed table or an element outside the carrier set.

mod config;
mod error;
mod types;
mod validator;

// Re-export public types
pub use config::{ValidationConfig, PARALLEL_MIN_ORDER};
pub use error::{TableError, TableResult};
pub use types::{Axiom, AxiomStatus, ValidationReport, Violation};
pub use validator::IndexedTable;

use crate::domain::Element;
use crate::reporters::{SilentValidationReporter, ValidationReporter};
use crate::table::CayleyTable;
use log::debug;
use std::collections::BTreeSet;

/// Carrier set of `table`: its top-level keys
///
/// No validation is performed; an empty table yields an empty set.
pub fn get_elements(table: &CayleyTable) -> BTreeSet<&Element> {
    table.elements().collect()
}

/// Whether `table` satisfies every group axiom
///
/// Checks run in order and stop at the first failure: well-formedness,
/// closure, associativity, identity, inverses.
pub fn is_valid_group(table: &CayleyTable) -> bool {
    validate_table(table).is_group()
}

/// Find the identity element without running the other checks
///
/// Returns `Ok(None)` if no element acts as a two-sided identity, and
/// `Err(TableError::Malformed)` if the table is not well-formed.
pub fn find_identity(table: &CayleyTable) -> TableResult<Option<&Element>> {
    table.check_well_formed()?;
    search_identity(table)
}

/// Find a two-sided inverse of `element` with respect to the identity
///
/// Returns `Ok(None)` when the table has no identity or `element` has no
/// inverse. Structural problems are errors: a malformed table gives
/// `TableError::Malformed`, an element outside the carrier set gives
/// `TableError::UnknownElement`. The carrier check comes first, so an unknown
/// element is an error even when the table has no identity; the groups
/// backend answered "not found" in that case.
pub fn find_inverse<'a>(
    table: &'a CayleyTable,
    element: impl AsRef<str>,
) -> TableResult<Option<&'a Element>> {
    let element = element.as_ref();
    table.check_well_formed()?;
    if !table.contains(element) {
        return Err(TableError::UnknownElement(Element::new(element)));
    }

    let Some(identity) = search_identity(table)? else {
        debug!("No identity, so {} has no inverse", element);
        return Ok(None);
    };

    for candidate in table.elements() {
        if table.product(element, candidate)? == identity
            && table.product(candidate, element)? == identity
        {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Label-keyed identity search, shared by the standalone queries
fn search_identity(table: &CayleyTable) -> TableResult<Option<&Element>> {
    for candidate in table.elements() {
        let mut acts_as_identity = true;
        for element in table.elements() {
            if table.product(candidate, element)? != element
                || table.product(element, candidate)? != element
            {
                acts_as_identity = false;
                break;
            }
        }
        if acts_as_identity {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Validate on the calling thread with no output
pub fn validate_table(table: &CayleyTable) -> ValidationReport {
    validate_table_with_reporter(table, &SilentValidationReporter)
}

/// Validate on the calling thread, sending progress to `reporter`
pub fn validate_table_with_reporter<R: ValidationReporter + ?Sized>(
    table: &CayleyTable,
    reporter: &R,
) -> ValidationReport {
    validator::validate_impl(table, &ValidationConfig::sequential(), reporter)
}

/// Validate with a custom configuration and no output
///
/// This is the entry point for the parallel associativity scan; the plain
/// query functions never leave the calling thread.
pub fn validate_table_with_config(
    table: &CayleyTable,
    config: &ValidationConfig,
) -> TableResult<ValidationReport> {
    validate_table_with_config_and_reporter(table, config, &SilentValidationReporter)
}

/// Validation with configuration and reporter support
///
/// Fails only when the table exceeds `config.max_order`; every axiom failure
/// is carried in the returned report.
pub fn validate_table_with_config_and_reporter<R: ValidationReporter + ?Sized>(
    table: &CayleyTable,
    config: &ValidationConfig,
    reporter: &R,
) -> TableResult<ValidationReport> {
    if let Some(limit) = config.max_order {
        if table.order() > limit {
            return Err(TableError::TooLarge {
                order: table.order(),
                limit,
            });
        }
    }

    Ok(validator::validate_impl(table, config, reporter))
}
