//! The `evaluate` use case: resolve config, pick the module, evaluate, wrap in a report.

use crate::config::load_config;
use aiact_catalog::Module;
use aiact_settings::{Overrides, ResolvedConfig};
use aiact_types::{AiactReportV1, AnswerSet, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, banner_for};
use anyhow::Context;
use time::OffsetDateTime;
use tracing::{debug, info};

/// Input for the evaluate use case.
#[derive(Clone, Debug)]
pub struct EvaluateInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Module id or alias (`high-risk`, `art6`, `2`, ...).
    pub module: &'a str,
    /// Answers collected from the answers file and flags.
    pub answers: AnswerSet,
}

/// Output from the evaluate use case.
#[derive(Clone, Debug)]
pub struct EvaluateOutput {
    /// The generated report.
    pub report: AiactReportV1,
    /// The catalog module that was evaluated.
    pub module: &'static Module,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

pub fn run_evaluate(input: EvaluateInput<'_>) -> anyhow::Result<EvaluateOutput> {
    let resolved = load_config(input.config_text, input.overrides)?;

    let module = aiact_catalog::get_module(resolved.catalog_version, input.module)
        .with_context(|| format!("select module '{}'", input.module))?;
    debug!(
        module = %module.id,
        catalog_version = %module.catalog_version,
        answers = input.answers.len(),
        "evaluating module"
    );

    let determination = aiact_domain::evaluate(module, &input.answers)
        .with_context(|| format!("evaluate module '{}'", module.id))?;
    info!(
        module = %determination.module,
        outcome = %determination.outcome,
        obligations = determination.obligations.len(),
        "determination"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "aiact".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: OffsetDateTime::now_utc(),
        banner: banner_for(determination.outcome),
        determination,
    };

    Ok(EvaluateOutput {
        report,
        module,
        resolved_config: resolved,
    })
}
