use crate::RenderableDetermination;

pub const SOURCE_FOOTER: &str = "Source: Official Text of the EU AI Act";

pub fn render_markdown(det: &RenderableDetermination) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", det.module_title));
    out.push_str(&format!(
        "> **[{}]** {}\n\n",
        det.banner.severity.tag(),
        det.banner.message
    ));
    out.push_str(&format!(
        "- Outcome: **{}**\n- Catalog: {}\n",
        det.outcome, det.catalog_version
    ));
    if !det.triggered_by.is_empty() {
        let ids: Vec<String> = det
            .triggered_by
            .iter()
            .map(|id| format!("`{id}`"))
            .collect();
        out.push_str(&format!("- Triggered by: {}\n", ids.join(", ")));
    }
    out.push('\n');

    if det.obligations.is_empty() {
        out.push_str("No obligations attached to this outcome.\n");
    } else {
        out.push_str("## Obligations\n\n");
        for (i, obligation) in det.obligations.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, obligation));
        }
    }

    out.push_str(&format!("\n---\n*{SOURCE_FOOTER}*\n"));
    out
}
