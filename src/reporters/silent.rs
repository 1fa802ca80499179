//! Silent reporter for validation runs
//!
//! Provides a no-output implementation for library queries, tests, or when
//! quiet operation is desired.

use super::{Reporter, ValidationReporter};
use crate::validate::{Axiom, ValidationReport, Violation};

/// Silent implementation for validation operations
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentValidationReporter;

impl SilentValidationReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentValidationReporter {
    fn report_error(&self, _error: &str) {}
    fn report_complete(&self, _message: &str) {}
}

impl ValidationReporter for SilentValidationReporter {
    fn report_validation_start(&self, _order: usize, _parallel: bool) {}
    fn report_axiom_passed(&self, _axiom: Axiom) {}
    fn report_violation(&self, _violation: &Violation) {}
    fn report_validation_results(&self, _report: &ValidationReport) {}
}
