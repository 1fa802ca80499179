//! Progress and output reporting for table validation
//!
//! This module provides traits and implementations for reporting progress and
//! results of a validation run. It allows the checking logic to be decoupled
//! from output formatting.

mod console;
mod silent;

pub use console::ConsoleValidationReporter;
pub use silent::SilentValidationReporter;

use crate::validate::{Axiom, ValidationReport, Violation};

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report an error that occurred during operation
    fn report_error(&self, error: &str);

    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting validation progress and results
///
/// Extends the base Reporter trait with validation-specific methods
pub trait ValidationReporter: Reporter {
    /// Report starting validation of a table
    fn report_validation_start(&self, order: usize, parallel: bool);

    /// Report that a check passed
    fn report_axiom_passed(&self, axiom: Axiom);

    /// Report the check that stopped validation
    fn report_violation(&self, violation: &Violation);

    /// Report final validation results summary
    fn report_validation_results(&self, report: &ValidationReport);
}
