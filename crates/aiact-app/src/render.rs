//! Render use cases: Markdown, plain text, JSON, and the obligations export.

use aiact_render::{
    RenderableBanner, RenderableDetermination, RenderableSeverity, render_markdown, render_text,
};
use aiact_settings::OutputFormat;
use aiact_types::{AiactReportV1, Severity};
use anyhow::Context;

pub fn to_renderable(report: &AiactReportV1, module_title: &str) -> RenderableDetermination {
    let det = &report.determination;
    RenderableDetermination {
        module_title: module_title.to_string(),
        catalog_version: det.catalog_version.clone(),
        outcome: det.outcome.label().to_string(),
        banner: RenderableBanner {
            severity: match report.banner.severity {
                Severity::Success => RenderableSeverity::Success,
                Severity::Info => RenderableSeverity::Info,
                Severity::Warning => RenderableSeverity::Warning,
                Severity::Error => RenderableSeverity::Error,
            },
            message: report.banner.message.clone(),
        },
        triggered_by: det.triggered_by.iter().cloned().collect(),
        obligations: det.obligations.clone(),
    }
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &AiactReportV1) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn render_determination(
    report: &AiactReportV1,
    module_title: &str,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(&to_renderable(report, module_title))),
        OutputFormat::Text => Ok(render_text(&to_renderable(report, module_title))),
        OutputFormat::Json => {
            let bytes = serialize_report(report)?;
            String::from_utf8(bytes).context("report json is not utf-8")
        }
    }
}

pub fn export_obligations(report: &AiactReportV1) -> String {
    aiact_render::render_obligations_export(&report.determination.obligations)
}
