use crate::RenderableDetermination;

/// Plain-text summary for terminals without Markdown rendering.
pub fn render_text(det: &RenderableDetermination) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}] {}\n", det.banner.severity.tag(), det.banner.message));
    out.push_str(&format!("outcome: {}\n", det.outcome));
    out.push_str(&format!("catalog: {}\n", det.catalog_version));
    if !det.triggered_by.is_empty() {
        out.push_str(&format!("triggered by: {}\n", det.triggered_by.join(", ")));
    }
    for obligation in &det.obligations {
        out.push_str(&format!("- {obligation}\n"));
    }
    out
}

/// The obligations list as newline-separated plain text, nothing else.
pub fn render_obligations_export(obligations: &[String]) -> String {
    let mut out = String::new();
    for obligation in obligations {
        out.push_str(obligation);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableBanner, RenderableSeverity};

    #[test]
    fn export_is_one_obligation_per_line() {
        let obligations = vec![
            "Article 50(1): inform natural persons that they are interacting with an AI system."
                .to_string(),
            "Article 50(4): disclose that the content has been artificially generated.".to_string(),
        ];
        insta::assert_snapshot!(render_obligations_export(&obligations), @r"
        Article 50(1): inform natural persons that they are interacting with an AI system.
        Article 50(4): disclose that the content has been artificially generated.
        ");
    }

    #[test]
    fn export_of_no_obligations_is_empty() {
        assert_eq!(render_obligations_export(&[]), "");
    }

    #[test]
    fn text_lists_banner_outcome_and_obligations() {
        let det = RenderableDetermination {
            module_title: "General-Purpose AI (GPAI) Models (Articles 51-55)".to_string(),
            catalog_version: "v2".to_string(),
            outcome: "NOT_GPAI".to_string(),
            banner: RenderableBanner {
                severity: RenderableSeverity::Info,
                message: "Not a general-purpose AI model.".to_string(),
            },
            triggered_by: Vec::new(),
            obligations: Vec::new(),
        };
        assert_eq!(
            render_text(&det),
            "[INFO] Not a general-purpose AI model.\noutcome: NOT_GPAI\ncatalog: v2\n"
        );
    }
}
