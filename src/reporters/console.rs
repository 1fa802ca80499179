//! Console reporter for validation runs
//!
//! Prints the axiom checklist, the identity and the inverse of every element.

use super::{Reporter, ValidationReporter};
use crate::domain::Element;
use crate::validate::{Axiom, ValidationReport, Violation};

/// Show every inverse pair if the group has at most this many elements
const MAX_INVERSES_LISTED: usize = 32;

/// Console implementation for validation operations
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleValidationReporter;

impl ConsoleValidationReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleValidationReporter {
    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }

    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

impl ValidationReporter for ConsoleValidationReporter {
    fn report_validation_start(&self, order: usize, parallel: bool) {
        println!(
            "Checking group theory axioms for {} element(s) ({})...",
            order,
            if parallel { "parallel" } else { "sequential" }
        );
    }

    fn report_axiom_passed(&self, _axiom: Axiom) {}

    fn report_violation(&self, violation: &Violation) {
        println!("{} check failed: {}", violation.axiom(), violation);
    }

    fn report_validation_results(&self, report: &ValidationReport) {
        // Use the Display implementation for the checklist
        println!();
        print!("{}", report);

        if let Some(identity) = &report.identity {
            print_inverses(identity, &report.inverses);
        }
    }
}

/// Print `a⁻¹ = b` for every non-identity element, eliding long lists
fn print_inverses(identity: &Element, inverses: &[(Element, Element)]) {
    let listed: Vec<_> = inverses
        .iter()
        .filter(|(element, _)| element != identity)
        .collect();
    if listed.is_empty() {
        return;
    }

    println!("\nElement inverses:");
    for (element, inverse) in listed.iter().take(MAX_INVERSES_LISTED) {
        println!("   {}⁻¹ = {}", element, inverse);
    }
    if listed.len() > MAX_INVERSES_LISTED {
        println!(
            "   ... {} more inverses ...",
            listed.len() - MAX_INVERSES_LISTED
        );
    }
}
