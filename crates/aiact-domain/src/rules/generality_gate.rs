use super::Ruling;
use crate::answers::holds_id;
use aiact_catalog::Module;
use aiact_types::{AnswerSet, Outcome};

/// GPAI classification: exclusion, then the AND gate, then OR over the systemic tests.
pub fn run(
    module: &Module,
    exclusion: Option<&str>,
    gate: &[String],
    systemic: &[String],
    answers: &AnswerSet,
) -> Ruling {
    if let Some(exclusion) = exclusion
        && holds_id(module, exclusion, answers)
    {
        return Ruling::new(Outcome::ExcludedRnd, [exclusion]);
    }

    let general = !gate.is_empty() && gate.iter().all(|id| holds_id(module, id, answers));
    if !general {
        return Ruling::new(Outcome::NotGpai, []);
    }

    let gate_ids = gate.iter().map(String::as_str);
    let systemic_hits: Vec<&str> = systemic
        .iter()
        .map(String::as_str)
        .filter(|id| holds_id(module, id, answers))
        .collect();
    if systemic_hits.is_empty() {
        Ruling::new(Outcome::GpaiGeneral, gate_ids)
    } else {
        Ruling::new(Outcome::GpaiSystemicRisk, gate_ids.chain(systemic_hits))
    }
}
