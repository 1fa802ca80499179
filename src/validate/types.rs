//! Type definitions for validation results

use crate::domain::{join_elements, Element};
use crate::table::RowMismatch;
use std::fmt;

/// The checks run against a table, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axiom {
    WellFormedness,
    Closure,
    Associativity,
    Identity,
    Inverses,
}

impl Axiom {
    /// All checks in pipeline order
    pub const ALL: [Axiom; 5] = [
        Axiom::WellFormedness,
        Axiom::Closure,
        Axiom::Associativity,
        Axiom::Identity,
        Axiom::Inverses,
    ];

    /// Short statement of what the check requires
    pub fn description(&self) -> &'static str {
        match self {
            Axiom::WellFormedness => "Every element has a complete row of products",
            Axiom::Closure => "Every product is in the group",
            Axiom::Associativity => "(a * b) * c = a * (b * c)",
            Axiom::Identity => "Identity element exists",
            Axiom::Inverses => "Every element has an inverse",
        }
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axiom::WellFormedness => write!(f, "Well-formedness"),
            Axiom::Closure => write!(f, "Closure"),
            Axiom::Associativity => write!(f, "Associativity"),
            Axiom::Identity => write!(f, "Identity"),
            Axiom::Inverses => write!(f, "Inverses"),
        }
    }
}

/// First failed check, with a witness
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Row columns differ from the carrier set
    RowMismatch {
        row: Element,
        missing: Vec<Element>,
        extra: Vec<Element>,
    },
    /// `left * right` falls outside the carrier set
    NotClosed {
        left: Element,
        right: Element,
        product: Element,
    },
    /// `(a * b) * c != a * (b * c)`
    NotAssociative {
        a: Element,
        b: Element,
        c: Element,
        left: Element,
        right: Element,
    },
    NoIdentity,
    /// `element` has no two-sided inverse with respect to `identity`
    NoInverse { element: Element, identity: Element },
}

impl Violation {
    /// The check this violation belongs to
    pub fn axiom(&self) -> Axiom {
        match self {
            Violation::RowMismatch { .. } => Axiom::WellFormedness,
            Violation::NotClosed { .. } => Axiom::Closure,
            Violation::NotAssociative { .. } => Axiom::Associativity,
            Violation::NoIdentity => Axiom::Identity,
            Violation::NoInverse { .. } => Axiom::Inverses,
        }
    }
}

impl From<RowMismatch> for Violation {
    fn from(mismatch: RowMismatch) -> Self {
        Violation::RowMismatch {
            row: mismatch.row,
            missing: mismatch.missing,
            extra: mismatch.extra,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RowMismatch {
                row,
                missing,
                extra,
            } => {
                write!(f, "row {} does not match the element set", row)?;
                if !missing.is_empty() {
                    write!(f, "; missing [{}]", join_elements(missing))?;
                }
                if !extra.is_empty() {
                    write!(f, "; extra [{}]", join_elements(extra))?;
                }
                Ok(())
            }
            Violation::NotClosed {
                left,
                right,
                product,
            } => write!(
                f,
                "{} * {} = {} is not an element of the group",
                left, right, product
            ),
            Violation::NotAssociative {
                a,
                b,
                c,
                left,
                right,
            } => write!(
                f,
                "({a} * {b}) * {c} = {left} but {a} * ({b} * {c}) = {right}"
            ),
            Violation::NoIdentity => write!(f, "no element acts as identity"),
            Violation::NoInverse { element, identity } => write!(
                f,
                "{} has no inverse with respect to identity {}",
                element, identity
            ),
        }
    }
}

/// Outcome of one check in the report checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxiomStatus {
    Passed,
    Failed,
    NotChecked,
}

/// Full validation results for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub order: usize,
    pub identity: Option<Element>,
    /// `(element, inverse)` pairs in element order; filled only for groups
    pub inverses: Vec<(Element, Element)>,
    pub violation: Option<Violation>,
}

impl ValidationReport {
    /// True when every check passed
    pub fn is_group(&self) -> bool {
        self.violation.is_none()
    }

    pub fn failed_axiom(&self) -> Option<Axiom> {
        self.violation.as_ref().map(Violation::axiom)
    }

    /// Status of `axiom` given the short-circuiting pipeline
    pub fn status(&self, axiom: Axiom) -> AxiomStatus {
        match self.failed_axiom() {
            None => AxiomStatus::Passed,
            Some(failed) if axiom < failed => AxiomStatus::Passed,
            Some(failed) if axiom == failed => AxiomStatus::Failed,
            Some(_) => AxiomStatus::NotChecked,
        }
    }

    /// Inverse of `element`, if the report carries one
    pub fn inverse_of(&self, element: &str) -> Option<&Element> {
        self.inverses
            .iter()
            .find(|(e, _)| e == element)
            .map(|(_, inverse)| inverse)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.violation {
            None => writeln!(f, "VALID GROUP! All axioms satisfied.")?,
            Some(_) => writeln!(f, "NOT A VALID GROUP! Some axioms failed.")?,
        }

        writeln!(f, "\nAxiom Check Results:")?;
        Axiom::ALL.iter().try_for_each(|axiom| {
            let marker = match self.status(*axiom) {
                AxiomStatus::Passed => "ok",
                AxiomStatus::Failed => "FAILED",
                AxiomStatus::NotChecked => "not checked",
            };
            writeln!(f, "   [{}] {}: {}", marker, axiom, axiom.description())
        })?;

        if let Some(violation) = &self.violation {
            writeln!(f, "\nReason: {}", violation)?;
        }

        if let Some(identity) = &self.identity {
            writeln!(f, "\nIdentity element: {}", identity)?;
        }

        Ok(())
    }
}
