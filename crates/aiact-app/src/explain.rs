//! The `explain` use case: look up outcome and module documentation.

use aiact_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available outcome labels and module ids.
    NotFound {
        identifier: String,
        available_outcomes: &'static [&'static str],
        available_modules: &'static [&'static str],
    },
}

/// Look up an explanation for an outcome label or module id.
///
/// Outcome labels are matched case-insensitively (`high_risk_6_2` works too).
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let trimmed = identifier.trim();
    let found = explain::lookup_explanation(trimmed)
        .or_else(|| explain::lookup_explanation(&trimmed.to_ascii_uppercase()));
    match found {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_outcomes: explain::all_outcome_labels(),
            available_modules: explain::all_module_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.headline);
    out.push_str("\n\n");
    out.push_str("Legal basis: ");
    out.push_str(exp.legal_basis);
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Next steps\n");
    out.push_str("----------\n");
    out.push_str(exp.next_steps);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    outcomes: &[&'static str],
    modules: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown outcome label or module id: {}\n\n", identifier));
    out.push_str("Available outcome labels:\n");
    for label in outcomes {
        out.push_str(&format!("  - {}\n", label));
    }
    out.push_str("\nAvailable module ids:\n");
    for id in modules {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_outcome() {
        let output = run_explain("HIGH_RISK_6_2");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_outcome_case_insensitively() {
        let exp = unwrap_found(run_explain(" gpai_systemic_risk "));
        assert!(exp.legal_basis.contains("51"));
    }

    #[test]
    fn explain_known_module() {
        let output = run_explain("transparency");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown() {
        let output = run_explain("not_a_real_thing");
        let (identifier, available_outcomes, available_modules) = unwrap_not_found(output);
        assert_eq!(identifier, "not_a_real_thing");
        assert_eq!(available_outcomes.len(), 12);
        assert_eq!(available_modules.len(), 4);
    }

    #[test]
    fn format_explanation_output() {
        let exp = unwrap_found(run_explain("NON_HIGH_RISK"));
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with(exp.title));
        assert!(formatted.contains("Legal basis: Article 6(3)"));
        assert!(formatted.contains("Next steps\n----------\n"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["PROHIBITED", "CLEAR"], &["gpai"]);
        assert!(formatted.contains("Unknown outcome label or module id: missing"));
        assert!(formatted.contains("Available outcome labels:"));
        assert!(formatted.contains("  - PROHIBITED\n  - CLEAR\n"));
        assert!(formatted.contains("Available module ids:\n  - gpai\n"));
    }

    fn unwrap_found(output: ExplainOutput) -> Explanation {
        match output {
            ExplainOutput::Found(exp) => exp,
            _ => panic!("expected Found"),
        }
    }

    fn unwrap_not_found(
        output: ExplainOutput,
    ) -> (String, &'static [&'static str], &'static [&'static str]) {
        match output {
            ExplainOutput::NotFound {
                identifier,
                available_outcomes,
                available_modules,
            } => (identifier, available_outcomes, available_modules),
            _ => panic!("expected NotFound"),
        }
    }
}
