//! Answer validation and the per-criterion trigger reduction shared by every rule.

use aiact_catalog::{Criterion, CriterionKind, Module};
use aiact_types::{AnswerSet, AnswerValue, AssessmentError};

/// Check every answer addressed to a criterion of `module`, exceptions included.
///
/// Answers for ids the module does not know are ignored.
pub fn validate(module: &Module, answers: &AnswerSet) -> Result<(), AssessmentError> {
    for criterion in module.all_criteria() {
        if let Some(value) = answers.get(&criterion.id) {
            check_value(criterion, value)?;
        }
    }
    Ok(())
}

fn check_value(criterion: &Criterion, value: &AnswerValue) -> Result<(), AssessmentError> {
    let ok = match (&criterion.kind, value) {
        (CriterionKind::Boolean, AnswerValue::Bool(_)) => true,
        (CriterionKind::Enum { options }, AnswerValue::Choice(choice)) => {
            options.iter().any(|o| o == choice)
        }
        (CriterionKind::Numeric { .. }, AnswerValue::Number(n)) => n.is_finite() && *n >= 0.0,
        _ => false,
    };
    if ok {
        return Ok(());
    }
    let wanted = expected(&criterion.kind);
    Err(AssessmentError::invalid_answer(&criterion.id, wanted, value.describe()))
}

fn expected(kind: &CriterionKind) -> String {
    match kind {
        CriterionKind::Boolean => "a boolean".to_string(),
        CriterionKind::Enum { options } => format!("one of [{}]", options.join(", ")),
        CriterionKind::Numeric { unit, .. } => {
            format!("a finite, non-negative number ({unit})")
        }
    }
}

/// Raw trigger test on a validated answer. Missing answers never trigger.
fn answered_positive(criterion: &Criterion, answers: &AnswerSet) -> bool {
    let Some(value) = answers.get(&criterion.id) else {
        return false;
    };
    match (&criterion.kind, value) {
        (CriterionKind::Boolean, AnswerValue::Bool(b)) => *b,
        (CriterionKind::Enum { options }, AnswerValue::Choice(choice)) => {
            options.first().is_some_and(|sentinel| sentinel != choice)
        }
        (CriterionKind::Numeric { threshold, .. }, AnswerValue::Number(n)) => *n >= *threshold,
        _ => false,
    }
}

/// A criterion after its exceptions have been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reduction<'a> {
    NotTriggered,
    /// Triggered and kept. `overridden_by` names the override exception that held, if any.
    Triggered { overridden_by: Option<&'a str> },
    /// Triggered but cleared by the listed exceptions.
    Excepted { by: Vec<&'a str> },
}

impl Reduction<'_> {
    pub fn holds(&self) -> bool {
        matches!(self, Reduction::Triggered { .. })
    }
}

/// Apply the criterion's own exceptions. Exceptions are consulted only when the criterion
/// itself triggered; override exceptions are consulted before the others.
pub fn reduce<'a>(criterion: &'a Criterion, answers: &AnswerSet) -> Reduction<'a> {
    if !answered_positive(criterion, answers) {
        return Reduction::NotTriggered;
    }

    if let Some(over) = criterion
        .exceptions
        .iter()
        .find(|e| e.is_override && holds(e, answers))
    {
        return Reduction::Triggered {
            overridden_by: Some(over.id.as_str()),
        };
    }

    let by: Vec<&str> = criterion
        .exceptions
        .iter()
        .filter(|e| !e.is_override && holds(e, answers))
        .map(|e| e.id.as_str())
        .collect();
    if by.is_empty() {
        Reduction::Triggered {
            overridden_by: None,
        }
    } else {
        Reduction::Excepted { by }
    }
}

pub fn holds(criterion: &Criterion, answers: &AnswerSet) -> bool {
    reduce(criterion, answers).holds()
}

/// [`holds`] for a top-level criterion looked up by id; unknown ids never hold.
pub fn holds_id(module: &Module, id: &str, answers: &AnswerSet) -> bool {
    module
        .criterion(id)
        .is_some_and(|criterion| holds(criterion, answers))
}
