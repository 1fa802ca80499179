//! Group analysis and statistics
//!
//! Derived properties of a table that has already passed validation:
//! commutativity, element orders and cyclicity.

use crate::domain::{Element, ElementIndex};
use crate::table::CayleyTable;
use crate::validate::{IndexedTable, TableResult, ValidationReport};

/// Summary statistics for a validated group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStats {
    pub order: usize,
    pub identity: Element,
    pub abelian: bool,
    /// Least `k >= 1` with `a^k = e`, per element in label order
    pub element_orders: Vec<(Element, usize)>,
    /// Elements equal to their own inverse, identity included
    pub self_inverse_count: usize,
    /// An element generating the whole group, if any
    pub generator: Option<Element>,
}

impl GroupStats {
    pub fn is_cyclic(&self) -> bool {
        self.generator.is_some()
    }

    /// Order of `element` within the group
    pub fn order_of(&self, element: &str) -> Option<usize> {
        self.element_orders
            .iter()
            .find(|(e, _)| e == element)
            .map(|(_, order)| *order)
    }
}

/// Calculate statistics for `table`
///
/// Returns `Ok(None)` when `report` is not a group, or when `table` (which
/// may not be the table the report came from) is not closed or has no
/// identity. A malformed table is `Err(TableError::Malformed)`.
pub fn calculate_group_stats(
    table: &CayleyTable,
    report: &ValidationReport,
) -> TableResult<Option<GroupStats>> {
    if !report.is_group() {
        return Ok(None);
    }

    table.check_well_formed()?;
    let Ok(indexed) = IndexedTable::build(table) else {
        return Ok(None);
    };
    let Some(identity) = indexed.identity() else {
        return Ok(None);
    };
    let indices: Vec<ElementIndex> = (0..indexed.order()).map(ElementIndex::new).collect();

    let abelian = indices.iter().all(|&a| {
        indices
            .iter()
            .all(|&b| indexed.product(a, b) == indexed.product(b, a))
    });

    let orders: Vec<(ElementIndex, usize)> = indices
        .iter()
        .map(|&a| (a, element_order(&indexed, a, identity)))
        .collect();

    let generator = orders
        .iter()
        .find(|(_, order)| *order == indexed.order())
        .map(|(a, _)| indexed.element(*a).clone());

    Ok(Some(GroupStats {
        order: indexed.order(),
        identity: indexed.element(identity).clone(),
        abelian,
        self_inverse_count: orders.iter().filter(|(_, order)| *order <= 2).count(),
        element_orders: orders
            .into_iter()
            .map(|(a, order)| (indexed.element(a).clone(), order))
            .collect(),
        generator,
    }))
}

/// Least `k >= 1` with `a^k = identity`, bounded by the group order
fn element_order(indexed: &IndexedTable<'_>, a: ElementIndex, identity: ElementIndex) -> usize {
    let mut power = a;
    let mut k = 1;
    while power != identity && k < indexed.order() {
        power = indexed.product(power, a);
        k += 1;
    }
    k
}

/// Print summary statistics
pub fn print_summary_stats(stats: &GroupStats) {
    println!("\nGroup statistics:");
    println!("  Order: {}", stats.order);
    println!("  Identity: {}", stats.identity);
    println!("  Abelian: {}", if stats.abelian { "yes" } else { "no" });
    match &stats.generator {
        Some(generator) => println!("  Cyclic: yes (generated by {})", generator),
        None => println!("  Cyclic: no"),
    }
    println!("  Self-inverse elements: {}", stats.self_inverse_count);
    println!("  Element orders:");
    for (element, order) in &stats.element_orders {
        println!("    |{}| = {}", element, order);
    }
}
