use crate::{RenderableCriterion, RenderableQuestionnaire};

pub fn render_questionnaire(q: &RenderableQuestionnaire) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {} [{}]\n\n", q.title, q.module_id));
    out.push_str(&format!(
        "{}\n\nLegal basis: {} (catalog {})\n\n",
        q.intro, q.legal_basis, q.catalog_version
    ));
    for criterion in &q.criteria {
        push_criterion(&mut out, criterion, 0);
    }
    out
}

fn push_criterion(out: &mut String, c: &RenderableCriterion, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = if c.is_override { " (override)" } else { "" };
    out.push_str(&format!(
        "{indent}- `{}`{marker}: {}\n{indent}  answer: {}\n",
        c.id, c.question, c.answer
    ));
    if let Some(help) = &c.help {
        out.push_str(&format!("{indent}  note: {help}\n"));
    }
    if !c.exceptions.is_empty() {
        out.push_str(&format!("{indent}  exceptions:\n"));
        for exception in &c.exceptions {
            push_criterion(out, exception, depth + 2);
        }
    }
}
