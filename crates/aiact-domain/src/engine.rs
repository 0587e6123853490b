use crate::answers;
use crate::rules::{self, Ruling};
use aiact_catalog::Module;
use aiact_types::{AnswerSet, AssessmentError, Determination};
use std::collections::HashSet;

/// Evaluate one module against an answer set.
///
/// Every answer addressed to the module is validated before any rule runs; missing answers are
/// read as "not triggered". The result depends only on the inputs.
pub fn evaluate(module: &Module, answers: &AnswerSet) -> Result<Determination, AssessmentError> {
    answers::validate(module, answers)?;

    let Ruling {
        outcome,
        triggered_by,
        obligations,
    } = rules::run(module, answers);

    let obligations = dedup(
        obligations
            .into_iter()
            .chain(module.obligations_for(outcome).iter().cloned()),
    );

    Ok(Determination {
        module: module.id,
        catalog_version: module.catalog_version.to_string(),
        outcome,
        triggered_by,
        obligations,
    })
}

/// Drop repeated obligations, keeping the first occurrence.
fn dedup(obligations: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    obligations.filter(|o| seen.insert(o.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{module_v1, module_v2};
    use aiact_types::{ModuleId, Outcome};

    #[test]
    fn determination_carries_module_and_catalog_version() {
        let det = evaluate(module_v1(ModuleId::Gpai), &AnswerSet::new()).unwrap();
        assert_eq!(det.module, ModuleId::Gpai);
        assert_eq!(det.catalog_version, "v1");
        assert_eq!(det.outcome, Outcome::NotGpai);
        assert!(det.obligations.is_empty());
    }

    #[test]
    fn shared_disclosure_duty_is_listed_once() {
        let answers = AnswerSet::new()
            .with("t1", true)
            .with("t3", true)
            .with("t4", true);
        let det = evaluate(module_v1(ModuleId::Transparency), &answers).unwrap();
        assert_eq!(det.outcome, Outcome::TransparencyRequired);
        assert_eq!(det.obligations.len(), 1);
        assert_eq!(det.triggered_by.len(), 3);
    }

    #[test]
    fn invalid_answer_stops_before_any_rule() {
        let answers = AnswerSet::new()
            .with("p1", true)
            .with("p4", true)
            .with("p4_exception", true);
        let err = evaluate(module_v2(ModuleId::ProhibitedPractices), &answers).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::InvalidAnswer { criterion, .. } if criterion == "p4_exception"
        ));
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let out = dedup(["b", "a", "b", "c", "a"].into_iter().map(str::to_string));
        assert_eq!(out, vec!["b", "a", "c"]);
    }
}
