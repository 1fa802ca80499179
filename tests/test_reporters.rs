//! Tests for validation reporters
//!
//! Covers the silent and console reporters and the order in which the
//! validator drives a reporter.

mod common;

use cayleyrs::reporters::{
    ConsoleValidationReporter, Reporter, SilentValidationReporter, ValidationReporter,
};
use cayleyrs::validate::{
    validate_table_with_config_and_reporter, validate_table_with_reporter, Axiom,
    ValidationConfig, ValidationReport, Violation,
};
use common::*;
use std::sync::Mutex;

/// Records every callback as a string
#[derive(Default)]
struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report_error(&self, error: &str) {
        self.push(format!("error: {}", error));
    }

    fn report_complete(&self, message: &str) {
        self.push(format!("complete: {}", message));
    }
}

impl ValidationReporter for RecordingReporter {
    fn report_validation_start(&self, order: usize, parallel: bool) {
        self.push(format!("start {} {}", order, parallel));
    }

    fn report_axiom_passed(&self, axiom: Axiom) {
        self.push(format!("passed {}", axiom));
    }

    fn report_violation(&self, violation: &Violation) {
        self.push(format!("failed {}", violation.axiom()));
    }

    fn report_validation_results(&self, report: &ValidationReport) {
        self.push(format!("results {}", report.is_group()));
    }
}

fn sequential() -> ValidationConfig {
    ValidationConfig::new(1, false)
}

#[test]
fn test_reporter_sees_every_passed_axiom_for_a_group() {
    let reporter = RecordingReporter::default();
    let report = validate_table_with_config_and_reporter(&z3(), &sequential(), &reporter).unwrap();
    assert!(report.is_group());
    assert_eq!(
        reporter.events(),
        vec![
            "start 3 false",
            "passed Well-formedness",
            "passed Closure",
            "passed Associativity",
            "passed Identity",
            "passed Inverses",
            "results true",
        ]
    );
}

#[test]
fn test_reporter_stops_at_first_violation() {
    let reporter = RecordingReporter::default();
    let table = constant(&["x", "y"], "x");
    validate_table_with_config_and_reporter(&table, &sequential(), &reporter).unwrap();
    assert_eq!(
        reporter.events(),
        vec![
            "start 2 false",
            "passed Well-formedness",
            "passed Closure",
            "passed Associativity",
            "failed Identity",
            "results false",
        ]
    );
}

#[test]
fn test_plain_validation_stays_on_calling_thread() {
    let reporter = RecordingReporter::default();
    let report = validate_table_with_reporter(&cyclic(40), &reporter);
    assert!(report.is_group());
    assert_eq!(reporter.events()[0], "start 40 false");
}

#[test]
fn test_configured_validation_can_scan_in_parallel() {
    let reporter = RecordingReporter::default();
    let config = ValidationConfig::new(4, true);
    validate_table_with_config_and_reporter(&cyclic(40), &config, &reporter).unwrap();
    assert_eq!(reporter.events()[0], "start 40 true");
}

#[test]
fn test_reporter_not_called_for_oversized_table() {
    let reporter = RecordingReporter::default();
    let config = sequential().with_max_order(2);
    assert!(validate_table_with_config_and_reporter(&z3(), &config, &reporter).is_err());
    assert!(reporter.events().is_empty());
}

#[test]
fn test_silent_reporter_all_methods() {
    let reporter = SilentValidationReporter::new();
    reporter.report_error("ignored");
    reporter.report_complete("ignored");
    reporter.report_validation_start(3, true);
    reporter.report_axiom_passed(Axiom::Closure);
    reporter.report_violation(&Violation::NoIdentity);
    let report = validate_table_with_config_and_reporter(&z3(), &sequential(), &reporter).unwrap();
    reporter.report_validation_results(&report);
}

#[test]
fn test_console_reporter_runs_for_valid_and_invalid_tables() {
    let reporter = ConsoleValidationReporter::new();
    let valid =
        validate_table_with_config_and_reporter(&cyclic(4), &sequential(), &reporter).unwrap();
    assert!(valid.is_group());

    let invalid =
        validate_table_with_config_and_reporter(&boolean_monoid(), &sequential(), &reporter)
            .unwrap();
    assert!(!invalid.is_group());
}

#[test]
fn test_reporters_work_as_trait_objects() {
    let reporters: Vec<Box<dyn ValidationReporter>> = vec![
        Box::new(SilentValidationReporter::new()),
        Box::new(ConsoleValidationReporter::new()),
    ];
    for reporter in &reporters {
        let report =
            validate_table_with_config_and_reporter(&s3(), &sequential(), &**reporter)
                .unwrap();
        assert!(report.is_group());
    }
}

#[test]
fn test_report_display_checklist() {
    let reporter = SilentValidationReporter::new();
    let report =
        validate_table_with_config_and_reporter(&non_associative_loop(), &sequential(), &reporter)
            .unwrap();
    let text = report.to_string();
    assert!(text.contains("NOT A VALID GROUP"));
    assert!(text.contains("[ok] Well-formedness"));
    assert!(text.contains("[ok] Closure"));
    assert!(text.contains("[FAILED] Associativity"));
    assert!(text.contains("[not checked] Identity"));
    assert!(text.contains("[not checked] Inverses"));
    assert!(text.contains("Reason: ("));
}

#[test]
fn test_report_display_for_group_names_identity() {
    let reporter = SilentValidationReporter::new();
    let report = validate_table_with_config_and_reporter(&z3(), &sequential(), &reporter).unwrap();
    let text = report.to_string();
    assert!(text.contains("VALID GROUP! All axioms satisfied."));
    assert!(text.contains("Identity element: e"));
    assert!(!text.contains("FAILED"));
}
