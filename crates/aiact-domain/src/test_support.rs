use aiact_catalog::{CatalogVersion, Module, get_catalog};
use aiact_types::{AnswerSet, AnswerValue, ModuleId};

pub fn module_v1(id: ModuleId) -> &'static Module {
    module(CatalogVersion::V1, id)
}

pub fn module_v2(id: ModuleId) -> &'static Module {
    module(CatalogVersion::V2, id)
}

pub fn module(version: CatalogVersion, id: ModuleId) -> &'static Module {
    get_catalog(version)
        .module(id)
        .expect("every catalog carries all four modules")
}

pub fn answers(entries: &[(&str, AnswerValue)]) -> AnswerSet {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect()
}

/// Every v2 prohibition answered `false`, exceptions left unanswered.
pub fn all_prohibitions_false() -> AnswerSet {
    module_v2(ModuleId::ProhibitedPractices)
        .criteria
        .iter()
        .map(|c| (c.id.clone(), AnswerValue::Bool(false)))
        .collect()
}
