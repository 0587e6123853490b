use super::Ruling;
use crate::answers::{Reduction, holds_id, reduce};
use aiact_catalog::Module;
use aiact_types::{AnswerSet, Outcome};

/// High-risk classification.
///
/// The regulated-product branch is an AND over `product` and is decided first. Otherwise the
/// domain criterion goes through its derogation filter; a sentinel domain answer never reaches
/// the filter.
pub fn run(module: &Module, product: &[String], domain: &str, answers: &AnswerSet) -> Ruling {
    let product_branch =
        !product.is_empty() && product.iter().all(|id| holds_id(module, id, answers));
    if product_branch {
        return Ruling::new(Outcome::HighRisk61, product.iter().map(String::as_str));
    }

    let Some(domain_criterion) = module.criterion(domain) else {
        return Ruling::new(Outcome::MinimalRisk, []);
    };

    match reduce(domain_criterion, answers) {
        Reduction::NotTriggered => Ruling::new(Outcome::MinimalRisk, []),
        Reduction::Triggered { overridden_by } => Ruling::new(
            Outcome::HighRisk62,
            std::iter::once(domain).chain(overridden_by),
        ),
        Reduction::Excepted { by } => {
            Ruling::new(Outcome::NonHighRisk, std::iter::once(domain).chain(by))
        }
    }
}
