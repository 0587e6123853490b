//! Explain registry for outcomes and modules.
//!
//! Maps outcome labels and module ids to human-readable explanations. Outcome entries also
//! carry the banner headline shown by the presentation layer.

use crate::determination::Outcome;
use crate::ids;
use crate::report::Banner;

/// Explanation entry for an outcome label or a module id.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short name of the outcome or module.
    pub title: &'static str,
    /// One-line banner text.
    pub headline: &'static str,
    /// Articles of Regulation (EU) 2024/1689 the entry rests on.
    pub legal_basis: &'static str,
    /// What the classification means.
    pub description: &'static str,
    /// What the provider or deployer should do next.
    pub next_steps: &'static str,
}

/// Look up an explanation by outcome label or module id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Modules
        ids::MODULE_PROHIBITED_PRACTICES => Some(explain_module_prohibited()),
        ids::MODULE_HIGH_RISK => Some(explain_module_high_risk()),
        ids::MODULE_TRANSPARENCY => Some(explain_module_transparency()),
        ids::MODULE_GPAI => Some(explain_module_gpai()),

        // Outcomes
        ids::OUTCOME_PROHIBITED => Some(explain_prohibited()),
        ids::OUTCOME_CLEAR => Some(explain_clear()),
        ids::OUTCOME_HIGH_RISK_6_1 => Some(explain_high_risk_6_1()),
        ids::OUTCOME_HIGH_RISK_6_2 => Some(explain_high_risk_6_2()),
        ids::OUTCOME_NON_HIGH_RISK => Some(explain_non_high_risk()),
        ids::OUTCOME_MINIMAL_RISK => Some(explain_minimal_risk()),
        ids::OUTCOME_TRANSPARENCY_REQUIRED => Some(explain_transparency_required()),
        ids::OUTCOME_NO_TRANSPARENCY_OBLIGATION => Some(explain_no_transparency_obligation()),
        ids::OUTCOME_EXCLUDED_RND => Some(explain_excluded_rnd()),
        ids::OUTCOME_GPAI_SYSTEMIC_RISK => Some(explain_gpai_systemic_risk()),
        ids::OUTCOME_GPAI_GENERAL => Some(explain_gpai_general()),
        ids::OUTCOME_NOT_GPAI => Some(explain_not_gpai()),

        _ => None,
    }
}

/// List all known outcome labels.
pub fn all_outcome_labels() -> &'static [&'static str] {
    &[
        ids::OUTCOME_PROHIBITED,
        ids::OUTCOME_CLEAR,
        ids::OUTCOME_HIGH_RISK_6_1,
        ids::OUTCOME_HIGH_RISK_6_2,
        ids::OUTCOME_NON_HIGH_RISK,
        ids::OUTCOME_MINIMAL_RISK,
        ids::OUTCOME_TRANSPARENCY_REQUIRED,
        ids::OUTCOME_NO_TRANSPARENCY_OBLIGATION,
        ids::OUTCOME_EXCLUDED_RND,
        ids::OUTCOME_GPAI_SYSTEMIC_RISK,
        ids::OUTCOME_GPAI_GENERAL,
        ids::OUTCOME_NOT_GPAI,
    ]
}

/// List all known module ids.
pub fn all_module_ids() -> &'static [&'static str] {
    &[
        ids::MODULE_PROHIBITED_PRACTICES,
        ids::MODULE_HIGH_RISK,
        ids::MODULE_TRANSPARENCY,
        ids::MODULE_GPAI,
    ]
}

/// Banner for an outcome: its severity plus the registry headline.
pub fn banner_for(outcome: Outcome) -> Banner {
    let message = lookup_explanation(outcome.label())
        .map(|exp| exp.headline.to_string())
        .unwrap_or_else(|| outcome.label().to_string());
    Banner {
        severity: outcome.severity(),
        message,
    }
}

// --- Module-level explanations ---

fn explain_module_prohibited() -> Explanation {
    Explanation {
        title: "Prohibited AI Practices (Article 5)",
        headline: "AI systems categorized here are strictly banned from the European Union market.",
        legal_basis: "Article 5",
        description: "\
Screens the system against the practices the Act bans outright: manipulative or deceptive
techniques, exploitation of vulnerabilities, social scoring, real-time remote biometric
identification for law enforcement, untargeted facial image scraping, and emotion recognition
in workplaces or schools. Some prohibitions carry narrow exceptions that are checked per
practice.",
        next_steps: "\
Answer every prohibition. If none applies, continue with the high-risk classification.",
    }
}

fn explain_module_high_risk() -> Explanation {
    Explanation {
        title: "Risk Classification Logic (Article 6)",
        headline: "Classifies the system through the Annex I product route and the Annex III domain route.",
        legal_basis: "Article 6, Annex I, Annex III",
        description: "\
A system is high-risk if it is a safety component of (or itself) a product covered by Annex I
legislation that requires third-party conformity assessment, or if it is used in one of the
Annex III domains. Annex III systems may escape the classification under the Article 6(3)
derogation filter unless they perform profiling of natural persons.",
        next_steps: "\
Answer the Annex I questions first; they take precedence over the domain selection.",
    }
}

fn explain_module_transparency() -> Explanation {
    Explanation {
        title: "Specific Transparency Obligations (Article 50)",
        headline: "These rules apply regardless of risk level when AI interacts with people or generates content.",
        legal_basis: "Article 50",
        description: "\
Each trigger (direct interaction, synthetic content generation, emotion recognition or
biometric categorisation, deepfakes or public-interest text) carries its own disclosure duty.
Triggers are independent: an exemption for one never removes the duty of another.",
        next_steps: "\
Answer each trigger. Exemptions only apply to synthetic content marking.",
    }
}

fn explain_module_gpai() -> Explanation {
    Explanation {
        title: "General-Purpose AI (GPAI) Models (Articles 51-55)",
        headline: "Classifies foundation models and their systemic-risk tier.",
        legal_basis: "Articles 51, 52, 53, 54, 55",
        description: "\
A model is general-purpose when it performs a wide range of distinct tasks and can be
integrated into a variety of downstream systems. Models used only for research, development,
or prototyping before market placement are excluded. A GPAI model presents systemic risk when
its cumulative training compute reaches 10^25 FLOPs or the Commission designates it.",
        next_steps: "\
Answer the research exclusion first, then the generality questions, then the systemic-risk tests.",
    }
}

// --- Outcome-level explanations ---

fn explain_prohibited() -> Explanation {
    Explanation {
        title: "Prohibited Practice",
        headline: "DETERMINATION: PROHIBITED PRACTICE. Under Article 5, this AI system cannot be placed on the market or used.",
        legal_basis: "Article 5, Article 99(3)",
        description: "\
At least one Article 5 prohibition applies and no exception for that practice was claimed.
Placing such a system on the market, putting it into service, or using it in the Union is
banned; infringements carry the highest tier of administrative fines.",
        next_steps: "\
Withdraw or redesign the system so that the prohibited practice is removed. Do not proceed to
risk classification until the prohibition no longer applies.",
    }
}

fn explain_clear() -> Explanation {
    Explanation {
        title: "No Prohibited Practice",
        headline: "No prohibited practices identified. Proceed to Risk Classification.",
        legal_basis: "Article 5",
        description: "\
None of the Article 5 prohibitions applies, either because no practice was selected or
because every selected practice falls under its own narrow exception.",
        next_steps: "Continue with the Article 6 high-risk classification.",
    }
}

fn explain_high_risk_6_1() -> Explanation {
    Explanation {
        title: "High-Risk (Article 6(1))",
        headline: "DETERMINATION: HIGH-RISK (Art 6.1). Subject to comprehensive Chapter III compliance and Article 17 requirements.",
        legal_basis: "Article 6(1), Annex I, Articles 8-17, Article 43",
        description: "\
The system is a safety component of a product, or is itself a product, covered by Annex I
Union harmonisation legislation that requires a third-party conformity assessment. This
route takes precedence over the Annex III domain route.",
        next_steps: "\
Implement the Chapter III Section 2 requirements and undergo the conformity assessment of the
applicable product legislation.",
    }
}

fn explain_high_risk_6_2() -> Explanation {
    Explanation {
        title: "High-Risk (Article 6(2))",
        headline: "DETERMINATION: HIGH-RISK (Art 6.2). Compliance with Article 17 (Quality Management System) and human oversight is mandatory.",
        legal_basis: "Article 6(2), Annex III, Articles 8-17, Article 49",
        description: "\
The system is used in an Annex III domain and the Article 6(3) derogation does not apply,
either because no derogation condition holds or because the system performs profiling of
natural persons, which always keeps it high-risk.",
        next_steps: "\
Implement the Chapter III Section 2 requirements, run the internal-control conformity
assessment, and register the system in the EU database before placing it on the market.",
    }
}

fn explain_non_high_risk() -> Explanation {
    Explanation {
        title: "Not High-Risk (Article 6(3) Derogation)",
        headline: "DETERMINATION: NON-HIGH RISK (Art 6.3 Exception applies). Note: Specific transparency rules may still apply.",
        legal_basis: "Article 6(3), Article 6(4), Article 49(2)",
        description: "\
The system is used in an Annex III domain but does not pose a significant risk of harm
because it only performs a narrow procedural task, improves the result of a completed human
activity, detects decision-making patterns without replacing human assessment, or performs a
preparatory task.",
        next_steps: "\
Document the assessment before placing the system on the market and register it under
Article 49(2). Check the Article 50 transparency module.",
    }
}

fn explain_minimal_risk() -> Explanation {
    Explanation {
        title: "Minimal / Low Risk",
        headline: "DETERMINATION: MINIMAL/LOW RISK. Encouraged to follow voluntary codes of conduct.",
        legal_basis: "Article 95",
        description: "\
The system is neither covered by Annex I product legislation nor used in an Annex III domain.",
        next_steps: "\
Consider voluntary codes of conduct and check the Article 50 transparency module.",
    }
}

fn explain_transparency_required() -> Explanation {
    Explanation {
        title: "Transparency Obligations Apply",
        headline: "MANDATORY DISCLOSURE: Specific transparency obligations under Article 50 apply to this system.",
        legal_basis: "Article 50(1)-(4)",
        description: "\
At least one Article 50 trigger applies. Each trigger contributes its own disclosure or
marking obligation.",
        next_steps: "Implement every listed obligation at the latest at the first interaction or exposure.",
    }
}

fn explain_no_transparency_obligation() -> Explanation {
    Explanation {
        title: "No Transparency Obligation",
        headline: "No specific transparency obligations under Article 50 identified for this configuration.",
        legal_basis: "Article 50",
        description: "\
No Article 50 trigger applies, or the only trigger is exempt from its marking obligation.",
        next_steps: "No Article 50 action required.",
    }
}

fn explain_excluded_rnd() -> Explanation {
    Explanation {
        title: "Excluded: Research and Development",
        headline: "CLASSIFICATION: EXCLUDED. Models used only for research, development or prototyping before market placement are out of scope.",
        legal_basis: "Article 2(6), Article 2(8)",
        description: "\
The model is used exclusively for research, development, or prototyping activities before it
is placed on the market. The GPAI obligations do not apply at this stage.",
        next_steps: "Re-run the assessment before the model is placed on the market.",
    }
}

fn explain_gpai_systemic_risk() -> Explanation {
    Explanation {
        title: "GPAI Model With Systemic Risk",
        headline: "CLASSIFICATION: GPAI WITH SYSTEMIC RISK. Subject to Article 53-55: adversarial testing, model evaluations, and systemic risk mitigation.",
        legal_basis: "Articles 51, 52, 53, 55",
        description: "\
The model is general-purpose and either reached the 10^25 FLOPs training compute threshold or
was designated by the Commission as having high-impact capabilities or systemic risk.",
        next_steps: "\
Notify the Commission, then implement the Article 53 baseline obligations and the Article 55
systemic-risk obligations.",
    }
}

fn explain_gpai_general() -> Explanation {
    Explanation {
        title: "General GPAI Model",
        headline: "CLASSIFICATION: GENERAL GPAI MODEL. Subject to technical documentation, transparency towards downstream providers, and copyright law compliance.",
        legal_basis: "Articles 51, 53, 54",
        description: "\
The model is general-purpose but below the systemic-risk threshold and not designated by the
Commission.",
        next_steps: "Implement the Article 53 obligations.",
    }
}

fn explain_not_gpai() -> Explanation {
    Explanation {
        title: "Not a GPAI Model",
        headline: "System is not classified as a General-Purpose AI model.",
        legal_basis: "Article 3(63)",
        description: "\
The model does not meet both generality conditions (wide range of distinct tasks and
downstream integrability).",
        next_steps: "Assess the AI system itself with the other modules.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::determination::Severity;

    #[test]
    fn lookup_by_outcome_label() {
        assert!(lookup_explanation(ids::OUTCOME_PROHIBITED).is_some());
        assert!(lookup_explanation(ids::OUTCOME_HIGH_RISK_6_2).is_some());
        assert!(lookup_explanation(ids::OUTCOME_GPAI_SYSTEMIC_RISK).is_some());
    }

    #[test]
    fn lookup_by_module_id() {
        for id in all_module_ids() {
            assert!(lookup_explanation(id).is_some(), "module {id} should be in registry");
        }
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("HIGH_RISK").is_none());
        assert!(lookup_explanation("annex-iii").is_none());
    }

    #[test]
    fn all_outcome_labels_are_valid() {
        assert_eq!(all_outcome_labels().len(), Outcome::ALL.len());
        for label in all_outcome_labels() {
            let exp = lookup_explanation(label)
                .unwrap_or_else(|| panic!("outcome {label} should be in registry"));
            assert!(!exp.headline.is_empty());
            assert!(!exp.next_steps.is_empty());
        }
    }

    #[test]
    fn banner_uses_outcome_severity_and_headline() {
        let banner = banner_for(Outcome::Prohibited);
        assert_eq!(banner.severity, Severity::Error);
        assert!(banner.message.starts_with("DETERMINATION: PROHIBITED PRACTICE"));

        let banner = banner_for(Outcome::MinimalRisk);
        assert_eq!(banner.severity, Severity::Success);
        assert!(banner.message.contains("voluntary codes of conduct"));
    }

    #[test]
    fn transparency_banner_leaves_the_duties_to_the_obligations_list() {
        let banner = banner_for(Outcome::TransparencyRequired);
        assert_eq!(banner.severity, Severity::Warning);
        assert!(banner.message.contains("Article 50"));
        assert!(!banner.message.contains("interacting with AI"));
    }
}
