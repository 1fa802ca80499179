//! Staged group-axiom validation
//!
//! The checks run cheapest first and stop at the first failure:
//! 1. Well-formedness (every row covers exactly the carrier set)
//! 2. Closure, which doubles as the indexing pass into [`IndexedTable`]
//! 3. Associativity, the O(n³) scan over the dense index matrix
//! 4. Identity search
//! 5. Inverse search for every element

use super::config::ValidationConfig;
use super::types::{Axiom, ValidationReport, Violation};
use crate::domain::{Element, ElementIndex};
use crate::reporters::ValidationReporter;
use crate::table::CayleyTable;
use log::{debug, warn};
use rayon::prelude::*;
use rustc_hash::FxHashMap as HashMap;

/// Dense form of a closed, well-formed table
///
/// Products are stored row-major as element indices, so the associativity
/// scan never touches a label.
#[derive(Debug, Clone)]
pub struct IndexedTable<'a> {
    elements: Vec<&'a Element>,
    products: Vec<ElementIndex>,
}

impl<'a> IndexedTable<'a> {
    /// Index a table, checking well-formedness and closure on the way
    ///
    /// Fails with `Violation::RowMismatch` for the first row (in label order)
    /// whose columns differ from the carrier set, then with
    /// `Violation::NotClosed` for the first product that is not a carrier
    /// element.
    pub fn build(table: &'a CayleyTable) -> Result<Self, Violation> {
        if let Some(mismatch) = table.row_mismatch() {
            return Err(mismatch.into());
        }

        let elements: Vec<&Element> = table.elements().collect();
        let index: HashMap<&Element, ElementIndex> = elements
            .iter()
            .enumerate()
            .map(|(i, element)| (*element, ElementIndex::new(i)))
            .collect();

        let mut products = Vec::with_capacity(elements.len() * elements.len());
        for (left, row) in table.rows() {
            for (right, product) in row {
                match index.get(product) {
                    Some(&i) => products.push(i),
                    None => {
                        return Err(Violation::NotClosed {
                            left: left.clone(),
                            right: right.clone(),
                            product: product.clone(),
                        })
                    }
                }
            }
        }

        Ok(Self { elements, products })
    }

    pub fn order(&self) -> usize {
        self.elements.len()
    }

    pub fn element(&self, index: ElementIndex) -> &'a Element {
        self.elements[index.as_usize()]
    }

    #[inline]
    pub fn product(&self, a: ElementIndex, b: ElementIndex) -> ElementIndex {
        self.products[a.as_usize() * self.order() + b.as_usize()]
    }

    fn indices(&self) -> impl Iterator<Item = ElementIndex> {
        (0..self.order()).map(ElementIndex::new)
    }

    /// First `(b, c)` breaking associativity for a fixed left operand `a`
    fn associativity_witness_from(&self, a: ElementIndex) -> Option<Violation> {
        self.indices().find_map(|b| {
            let ab = self.product(a, b);
            self.indices().find_map(|c| {
                let left = self.product(ab, c);
                let right = self.product(a, self.product(b, c));
                (left != right).then(|| Violation::NotAssociative {
                    a: self.element(a).clone(),
                    b: self.element(b).clone(),
                    c: self.element(c).clone(),
                    left: self.element(left).clone(),
                    right: self.element(right).clone(),
                })
            })
        })
    }

    /// Scan every triple on the calling thread
    pub fn associativity_violation(&self) -> Option<Violation> {
        self.indices().find_map(|a| self.associativity_witness_from(a))
    }

    /// Scan with left operands split across the current rayon pool
    ///
    /// Any worker hitting a mismatch stops the others; which witness wins is
    /// not deterministic.
    pub fn par_associativity_violation(&self) -> Option<Violation> {
        (0..self.order())
            .into_par_iter()
            .map(ElementIndex::new)
            .find_map_any(|a| self.associativity_witness_from(a))
    }

    /// First element (in label order) acting as a two-sided identity
    pub fn identity(&self) -> Option<ElementIndex> {
        self.indices().find(|&e| {
            self.indices()
                .all(|a| self.product(e, a) == a && self.product(a, e) == a)
        })
    }

    /// First two-sided inverse of `a` with respect to `identity`
    pub fn inverse(&self, a: ElementIndex, identity: ElementIndex) -> Option<ElementIndex> {
        self.indices()
            .find(|&b| self.product(a, b) == identity && self.product(b, a) == identity)
    }
}

/// Run every check and collect the report
pub(crate) fn validate_impl<R: ValidationReporter + ?Sized>(
    table: &CayleyTable,
    config: &ValidationConfig,
    reporter: &R,
) -> ValidationReport {
    let order = table.order();
    reporter.report_validation_start(order, config.scans_in_parallel(order));

    let mut report = ValidationReport {
        order,
        identity: None,
        inverses: Vec::new(),
        violation: None,
    };

    if let Err(violation) = check_axioms(table, config, reporter, &mut report) {
        debug!("{} check failed: {}", violation.axiom(), violation);
        reporter.report_violation(&violation);
        report.violation = Some(violation);
    }

    reporter.report_validation_results(&report);
    report
}

fn check_axioms<R: ValidationReporter + ?Sized>(
    table: &CayleyTable,
    config: &ValidationConfig,
    reporter: &R,
    report: &mut ValidationReport,
) -> Result<(), Violation> {
    let passed = |axiom: Axiom| {
        debug!("{} check passed for table of order {}", axiom, table.order());
        reporter.report_axiom_passed(axiom);
    };

    if let Some(mismatch) = table.row_mismatch() {
        return Err(mismatch.into());
    }
    passed(Axiom::WellFormedness);

    let indexed = IndexedTable::build(table)?;
    passed(Axiom::Closure);

    if let Some(violation) = scan_associativity(&indexed, config) {
        return Err(violation);
    }
    passed(Axiom::Associativity);

    let identity = indexed.identity().ok_or(Violation::NoIdentity)?;
    report.identity = Some(indexed.element(identity).clone());
    passed(Axiom::Identity);

    report.inverses = indexed
        .indices()
        .map(|a| {
            indexed
                .inverse(a, identity)
                .map(|b| (indexed.element(a).clone(), indexed.element(b).clone()))
                .ok_or_else(|| Violation::NoInverse {
                    element: indexed.element(a).clone(),
                    identity: indexed.element(identity).clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    passed(Axiom::Inverses);

    Ok(())
}

/// Pick the sequential or parallel associativity scan for this config
fn scan_associativity(
    indexed: &IndexedTable<'_>,
    config: &ValidationConfig,
) -> Option<Violation> {
    if !config.scans_in_parallel(indexed.order()) {
        return indexed.associativity_violation();
    }

    let threads = config.effective_threads();
    debug!(
        "Scanning associativity of order {} table on {} threads",
        indexed.order(),
        threads
    );
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(|| indexed.par_associativity_violation()),
        Err(err) => {
            warn!(
                "Could not build a pool of {} threads ({}), using the global pool",
                threads, err
            );
            indexed.par_associativity_violation()
        }
    }
}
