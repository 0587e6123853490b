use aiact_catalog::{Module, Precedence};
use aiact_types::{AnswerSet, Outcome};
use std::collections::BTreeSet;

mod any_of;
mod generality_gate;
mod independent;
mod product_then_domain;


/// What a precedence rule decided, before outcome obligations are attached.
#[derive(Clone, Debug, PartialEq)]
pub struct Ruling {
    pub outcome: Outcome,
    pub triggered_by: BTreeSet<String>,
    /// Obligations contributed by individual criteria, in catalog order.
    pub obligations: Vec<String>,
}

impl Ruling {
    pub fn new<'a>(outcome: Outcome, triggered_by: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            outcome,
            triggered_by: triggered_by.into_iter().map(str::to_string).collect(),
            obligations: Vec::new(),
        }
    }
}

pub fn run(module: &Module, answers: &AnswerSet) -> Ruling {
    match &module.precedence {
        Precedence::AnyOf => any_of::run(module, answers),
        Precedence::ProductThenDomain { product, domain } => {
            product_then_domain::run(module, product, domain, answers)
        }
        Precedence::Independent => independent::run(module, answers),
        Precedence::GeneralityGate {
            exclusion,
            gate,
            systemic,
        } => generality_gate::run(module, exclusion.as_deref(), gate, systemic, answers),
    }
}
