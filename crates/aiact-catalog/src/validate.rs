//! Catalog self-check for invariants the type system cannot express.

use crate::Catalog;
use crate::model::{Criterion, CriterionKind, Module, Precedence};
use aiact_types::ModuleId;
use std::collections::HashSet;

/// Check every module of a catalog:
/// - No duplicate criterion ids inside a module (exceptions included)
/// - Precedence rules only reference top-level criteria of the module
/// - Enum criteria have at least two options
/// - Numeric thresholds are finite and non-negative
/// - Override flags only appear on exception criteria
/// - Each module uses the precedence rule of its kind and carries the catalog's version
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();
    for module in catalog.modules() {
        if module.catalog_version != catalog.version() {
            errors.push(format!(
                "{}: module is tagged {} inside catalog {}",
                module.id,
                module.catalog_version,
                catalog.version()
            ));
        }
        validate_module(module, &mut errors);
    }
    errors
}

fn validate_module(module: &Module, errors: &mut Vec<String>) {
    let fits = matches!(
        (module.id, &module.precedence),
        (ModuleId::ProhibitedPractices, Precedence::AnyOf)
            | (ModuleId::HighRisk, Precedence::ProductThenDomain { .. })
            | (ModuleId::Transparency, Precedence::Independent)
            | (ModuleId::Gpai, Precedence::GeneralityGate { .. })
    );
    if !fits {
        errors.push(format!("{}: precedence rule does not fit the module", module.id));
    }

    let mut seen = HashSet::new();
    for criterion in module.all_criteria() {
        if !seen.insert(criterion.id.as_str()) {
            errors.push(format!("{}: duplicate criterion id '{}'", module.id, criterion.id));
        }
        validate_kind(module, criterion, errors);
    }

    for criterion in &module.criteria {
        if criterion.is_override {
            errors.push(format!(
                "{}/{}: override flag is only meaningful on exceptions",
                module.id, criterion.id
            ));
        }
    }

    for id in referenced_ids(&module.precedence) {
        if module.criterion(id).is_none() {
            errors.push(format!(
                "{}: precedence references unknown criterion '{}'",
                module.id, id
            ));
        }
    }
}

fn validate_kind(module: &Module, criterion: &Criterion, errors: &mut Vec<String>) {
    match &criterion.kind {
        CriterionKind::Boolean => {}
        CriterionKind::Enum { options } => {
            if options.len() < 2 {
                errors.push(format!(
                    "{}/{}: enum criteria need at least two options",
                    module.id, criterion.id
                ));
            }
        }
        CriterionKind::Numeric { threshold, .. } => {
            if !threshold.is_finite() || *threshold < 0.0 {
                errors.push(format!(
                    "{}/{}: numeric threshold must be finite and non-negative",
                    module.id, criterion.id
                ));
            }
        }
    }
}

fn referenced_ids(precedence: &Precedence) -> Vec<&str> {
    match precedence {
        Precedence::AnyOf | Precedence::Independent => Vec::new(),
        Precedence::ProductThenDomain { product, domain } => product
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(domain.as_str()))
            .collect(),
        Precedence::GeneralityGate {
            exclusion,
            gate,
            systemic,
        } => exclusion
            .iter()
            .chain(gate)
            .chain(systemic)
            .map(String::as_str)
            .collect(),
    }
}
