//! The `modules` and `questions` use cases: describe the catalog without evaluating it.

use aiact_catalog::{Catalog, Criterion, CriterionKind, Module};
use aiact_render::{RenderableCriterion, RenderableQuestionnaire};
use aiact_settings::OutputFormat;
use anyhow::Context;

/// One line per module: id, title, legal basis.
pub fn format_modules(catalog: &Catalog) -> String {
    let width = catalog
        .modules()
        .iter()
        .map(|m| m.id.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "Catalog {} ({})\n\n",
        catalog.version(),
        catalog.version().description()
    );
    for module in catalog.modules() {
        out.push_str(&format!(
            "{:<width$}  {}  [{}]\n",
            module.id.as_str(),
            module.title,
            module.legal_basis
        ));
    }
    out
}

pub fn questionnaire(module: &Module) -> RenderableQuestionnaire {
    RenderableQuestionnaire {
        module_id: module.id.to_string(),
        title: module.title.clone(),
        legal_basis: module.legal_basis.clone(),
        intro: module.intro.clone(),
        catalog_version: module.catalog_version.to_string(),
        criteria: module.criteria.iter().map(renderable_criterion).collect(),
    }
}

fn renderable_criterion(c: &Criterion) -> RenderableCriterion {
    RenderableCriterion {
        id: c.id.clone(),
        question: c.question.clone(),
        answer: describe_kind(&c.kind),
        is_override: c.is_override,
        help: c.help.clone(),
        exceptions: c.exceptions.iter().map(renderable_criterion).collect(),
    }
}

fn describe_kind(kind: &CriterionKind) -> String {
    match kind {
        CriterionKind::Boolean => "true/false".to_string(),
        CriterionKind::Enum { options } => format!("one of: {}", options.join(" | ")),
        CriterionKind::Numeric { threshold, unit } => {
            format!("number ({unit}), triggers at >= {threshold:e}")
        }
    }
}

/// The questionnaire of `module` as Markdown/text, or the raw catalog module as JSON.
pub fn render_questions(module: &Module, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut text =
                serde_json::to_string_pretty(module).context("serialize questionnaire")?;
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Markdown | OutputFormat::Text => {
            Ok(aiact_render::render_questionnaire(&questionnaire(module)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiact_catalog::{CatalogVersion, get_catalog, get_module};

    #[test]
    fn modules_are_listed_in_sidebar_order() {
        let out = format_modules(get_catalog(CatalogVersion::V2));
        assert!(out.starts_with("Catalog v2 (Regulation (EU) 2024/1689 consolidated)\n"));
        let ids: Vec<&str> = out
            .lines()
            .skip(2)
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(
            ids,
            vec!["prohibited-practices", "high-risk", "transparency", "gpai"]
        );
    }

    #[test]
    fn questionnaire_describes_kinds_and_overrides() {
        let module = get_module(CatalogVersion::V2, "high-risk").unwrap();
        let out = render_questions(module, OutputFormat::Markdown).unwrap();
        assert!(out.contains("`c1_a`"));
        assert!(out.contains("answer: one of: None / Other | Biometrics"));
        assert!(out.contains("`profiling` (override)"));
        assert!(out.contains("`e4`"));
    }

    #[test]
    fn questionnaire_shows_numeric_threshold() {
        let module = get_module(CatalogVersion::V2, "gpai").unwrap();
        let q = questionnaire(module);
        let compute = q.criteria.iter().find(|c| c.id == "compute").unwrap();
        assert_eq!(compute.answer, "number (FLOPs), triggers at >= 1e25");
    }

    #[test]
    fn json_questionnaire_is_the_catalog_module() {
        let module = get_module(CatalogVersion::V1, "transparency").unwrap();
        let out = render_questions(module, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["id"], "transparency");
        assert_eq!(value["catalog_version"], "v1");
        assert_eq!(value["precedence"]["rule"], "independent");
        assert_eq!(value["criteria"].as_array().unwrap().len(), 4);
    }
}
