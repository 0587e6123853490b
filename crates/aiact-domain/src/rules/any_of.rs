use super::Ruling;
use crate::answers::holds;
use aiact_catalog::Module;
use aiact_types::{AnswerSet, Outcome};

/// Prohibited practices: OR over the criteria that survive their own exceptions.
pub fn run(module: &Module, answers: &AnswerSet) -> Ruling {
    let hits: Vec<&str> = module
        .criteria
        .iter()
        .filter(|c| holds(c, answers))
        .map(|c| c.id.as_str())
        .collect();

    let outcome = if hits.is_empty() {
        Outcome::Clear
    } else {
        Outcome::Prohibited
    };
    Ruling::new(outcome, hits)
}
