//! First navigator release.
//!
//! One Annex I toggle, a single auxiliary-task derogation without profiling override, one shared
//! disclosure duty for all transparency triggers, and a single "is GPAI" gate with compute as the
//! only systemic-risk test.

use crate::CatalogVersion;
use crate::model::{Criterion, Module, Precedence, obligations};
use aiact_types::{ModuleId, Outcome};

pub(crate) fn modules() -> Vec<Module> {
    vec![prohibited_practices(), high_risk(), transparency(), gpai()]
}

const DISCLOSURE: &str =
    "Article 50(1)-(4): providers/deployers must inform users that they are interacting with AI.";

fn prohibited_practices() -> Module {
    Module {
        id: ModuleId::ProhibitedPractices,
        catalog_version: CatalogVersion::V1,
        title: "Prohibited AI Practices (Article 5)".to_string(),
        legal_basis: "Article 5".to_string(),
        intro: "AI systems categorized here are strictly banned from the European Union market."
            .to_string(),
        criteria: vec![
            Criterion::boolean(
                "p1",
                "Cognitive behavioral manipulation or deceptive techniques intended to distort behavior",
            ),
            Criterion::boolean(
                "p2",
                "Exploitation of vulnerabilities (age, disability, or specific socio-economic situations)",
            ),
            Criterion::boolean(
                "p3",
                "Social scoring by public or private actors leading to unfavorable treatment",
            ),
            Criterion::boolean(
                "p4",
                "Real-time remote biometric identification in public spaces for law enforcement (with narrow exceptions)",
            ),
            Criterion::boolean(
                "p5",
                "Untargeted scraping of facial images from CCTV or the internet for facial recognition databases",
            ),
            Criterion::boolean(
                "p6",
                "Emotion recognition in the workplace or educational institutions (except for safety/medical reasons)",
            ),
        ],
        precedence: Precedence::AnyOf,
        outcome_obligations: obligations(&[(
            Outcome::Prohibited,
            &["Article 5: this AI system cannot be placed on the market or used."],
        )]),
    }
}

fn high_risk() -> Module {
    Module {
        id: ModuleId::HighRisk,
        catalog_version: CatalogVersion::V1,
        title: "Risk Classification Logic (Article 6)".to_string(),
        legal_basis: "Article 6, Annex I, Annex III".to_string(),
        intro: "Category A: Annex I Products. Category B: Annex III Domains.".to_string(),
        criteria: vec![
            Criterion::boolean(
                "is_annex_i",
                "Is the AI a safety component or the product itself covered by Annex I legislation (e.g., Medical Devices, Machinery, Aviation)?",
            ),
            Criterion::choice(
                "domain",
                "Select the domain of application:",
                &[
                    "None / Other",
                    "Biometrics",
                    "Critical Infrastructure",
                    "Education",
                    "Employment",
                    "Essential Private/Public Services",
                    "Law Enforcement",
                    "Migration",
                    "Justice",
                ],
            )
            .with_exceptions(vec![Criterion::boolean(
                "is_auxiliary",
                "Does the system perform a narrow procedural/preparatory task with no material influence on the human decision?",
            )]),
        ],
        precedence: Precedence::ProductThenDomain {
            product: vec!["is_annex_i".to_string()],
            domain: "domain".to_string(),
        },
        outcome_obligations: obligations(&[
            (
                Outcome::HighRisk61,
                &[
                    "Comprehensive Title III compliance.",
                    "Article 17: quality management system.",
                ],
            ),
            (
                Outcome::HighRisk62,
                &[
                    "Article 17: quality management system.",
                    "Human oversight is mandatory.",
                ],
            ),
            (
                Outcome::NonHighRisk,
                &["Specific transparency rules may still apply."],
            ),
            (
                Outcome::MinimalRisk,
                &["Voluntary codes of conduct are encouraged."],
            ),
        ]),
    }
}

fn transparency() -> Module {
    Module {
        id: ModuleId::Transparency,
        catalog_version: CatalogVersion::V1,
        title: "Specific Transparency Obligations (Article 50)".to_string(),
        legal_basis: "Article 50".to_string(),
        intro: "These rules apply regardless of risk level when AI interacts with people or generates content."
            .to_string(),
        criteria: vec![
            Criterion::boolean(
                "t1",
                "Does the AI system interact directly with natural persons (e.g., Chatbots)?",
            )
            .with_obligation(DISCLOSURE),
            Criterion::boolean(
                "t2",
                "Is it an emotion recognition or biometric categorization system?",
            )
            .with_obligation(DISCLOSURE),
            Criterion::boolean(
                "t3",
                "Does it generate or manipulate 'Deepfakes' (image, audio, or video)?",
            )
            .with_obligation(DISCLOSURE),
            Criterion::boolean(
                "t4",
                "Does it generate text published for informing the public on matters of public interest?",
            )
            .with_obligation(DISCLOSURE),
        ],
        precedence: Precedence::Independent,
        outcome_obligations: obligations(&[]),
    }
}

fn gpai() -> Module {
    Module {
        id: ModuleId::Gpai,
        catalog_version: CatalogVersion::V1,
        title: "General-Purpose AI (GPAI) Models (Articles 51-55)".to_string(),
        legal_basis: "Articles 51-55".to_string(),
        intro: "Systemic Risk Assessment (Article 51).".to_string(),
        criteria: vec![
            Criterion::boolean(
                "is_gpai",
                "Is the system a General-Purpose AI model (e.g., a foundation model like GPT-4 or Llama)?",
            ),
            Criterion::numeric(
                "compute",
                "Total cumulative compute used for training (expressed in FLOPs):",
                1e25,
                "FLOPs",
            ),
        ],
        precedence: Precedence::GeneralityGate {
            exclusion: None,
            gate: vec!["is_gpai".to_string()],
            systemic: vec!["compute".to_string()],
        },
        outcome_obligations: obligations(&[
            (
                Outcome::GpaiSystemicRisk,
                &[
                    "Article 53-55: adversarial testing.",
                    "Article 53-55: model evaluations.",
                    "Article 53-55: systemic risk mitigation.",
                ],
            ),
            (
                Outcome::GpaiGeneral,
                &[
                    "Technical documentation.",
                    "Transparency towards downstream providers.",
                    "Copyright law compliance.",
                ],
            ),
        ]),
    }
}
