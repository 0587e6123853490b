use super::Ruling;
use crate::answers::holds;
use aiact_catalog::Module;
use aiact_types::{AnswerSet, Outcome};

/// Transparency: every criterion that holds contributes its own obligations. An exception only
/// removes the obligations of the criterion it belongs to.
pub fn run(module: &Module, answers: &AnswerSet) -> Ruling {
    let mut triggered = Vec::new();
    let mut obligations = Vec::new();
    for criterion in &module.criteria {
        if holds(criterion, answers) {
            triggered.push(criterion.id.as_str());
            obligations.extend(criterion.obligations.iter().cloned());
        }
    }

    let outcome = if obligations.is_empty() {
        Outcome::NoTransparencyObligation
    } else {
        Outcome::TransparencyRequired
    };
    Ruling {
        obligations,
        ..Ruling::new(outcome, triggered)
    }
}
