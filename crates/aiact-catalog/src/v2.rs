//! Regulation (EU) 2024/1689 consolidated criteria set.
//!
//! Criterion ids of the first release are kept stable (`p1`..`p6`, `t1`..`t4`); criteria added
//! later get new ids. Top-level criteria follow the ordering of the legal text.

use crate::CatalogVersion;
use crate::model::{Criterion, Module, Precedence, obligations};
use aiact_types::{ModuleId, Outcome};

pub(crate) fn modules() -> Vec<Module> {
    vec![prohibited_practices(), high_risk(), transparency(), gpai()]
}

const ANNEX_III_DOMAINS: &[&str] = &[
    "None / Other",
    "Biometrics",
    "Critical Infrastructure",
    "Education",
    "Employment",
    "Essential Private/Public Services",
    "Law Enforcement",
    "Migration",
    "Justice",
];

const CHAPTER_III_REQUIREMENTS: &[&str] = &[
    "Article 9: establish and maintain a risk management system across the lifecycle.",
    "Article 10: apply data governance to training, validation and testing data sets.",
    "Article 11: draw up technical documentation before placing on the market.",
    "Article 12: enable automatic recording of events (logs).",
    "Article 13: provide instructions for use and transparency towards deployers.",
    "Article 14: design for effective human oversight.",
    "Article 15: achieve appropriate accuracy, robustness and cybersecurity.",
    "Article 17: put a quality management system in place.",
];

const GPAI_BASELINE: &[&str] = &[
    "Article 53(1)(a): draw up and keep up to date the technical documentation of the model.",
    "Article 53(1)(b): provide information and documentation to downstream providers.",
    "Article 53(1)(c): put in place a policy to comply with Union copyright law.",
    "Article 53(1)(d): publish a sufficiently detailed summary of the training content.",
    "Article 54: appoint an authorised representative if established outside the Union.",
];

fn prohibited_practices() -> Module {
    Module {
        id: ModuleId::ProhibitedPractices,
        catalog_version: CatalogVersion::V2,
        title: "Prohibited AI Practices (Article 5)".to_string(),
        legal_basis: "Article 5(1)(a)-(h)".to_string(),
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
                "p7",
                "Risk assessment of natural persons to predict criminal offences based solely on profiling or personality traits",
            )
            .with_exceptions(vec![Criterion::yes_no(
                "p7_exception",
                "Does the system only support a human assessment already based on objective and verifiable facts directly linked to a criminal activity?",
            )]),
            Criterion::boolean(
                "p5",
                "Untargeted scraping of facial images from CCTV or the internet for facial recognition databases",
            ),
            Criterion::boolean(
                "p6",
                "Emotion recognition in the workplace or educational institutions",
            )
            .with_exceptions(vec![Criterion::yes_no(
                "p6_exception",
                "Is the system intended to be put in place for medical or safety reasons?",
            )]),
            Criterion::boolean(
                "p8",
                "Biometric categorisation inferring race, political opinions, trade union membership, religious beliefs, sex life or sexual orientation",
            )
            .with_exceptions(vec![Criterion::yes_no(
                "p8_exception",
                "Is the system limited to labelling or filtering lawfully acquired biometric datasets in the area of law enforcement?",
            )]),
            Criterion::boolean(
                "p4",
                "Real-time remote biometric identification in publicly accessible spaces for law enforcement",
            )
            .with_exceptions(vec![Criterion::yes_no(
                "p4_exception",
                "Is the use strictly necessary for a targeted victim search, the prevention of an imminent threat, or locating a suspect of a serious crime, with prior judicial or independent administrative authorisation?",
            )
            .with_help("Article 5(1)(h)(i)-(iii) and Article 5(3).")]),
        ],
        precedence: Precedence::AnyOf,
        outcome_obligations: obligations(&[(
            Outcome::Prohibited,
            &[
                "Article 5: the system must not be placed on the Union market, put into service, or used.",
                "Article 99(3): infringements are subject to fines of up to EUR 35 000 000 or 7% of total worldwide annual turnover.",
            ],
        )]),
    }
}

fn high_risk() -> Module {
    let mut high_risk_6_1: Vec<&str> = CHAPTER_III_REQUIREMENTS.to_vec();
    high_risk_6_1.push(
        "Article 43(3): follow the conformity assessment procedure of the applicable Annex I legislation.",
    );

    let mut high_risk_6_2: Vec<&str> = CHAPTER_III_REQUIREMENTS.to_vec();
    high_risk_6_2.extend([
        "Article 43(2): carry out the internal-control conformity assessment (Annex VI).",
        "Article 49(1): register the system in the EU database before placing it on the market.",
    ]);

    Module {
        id: ModuleId::HighRisk,
        catalog_version: CatalogVersion::V2,
        title: "Risk Classification Logic (Article 6)".to_string(),
        legal_basis: "Article 6(1)-(4), Annex I, Annex III".to_string(),
        intro: "Annex I products are assessed before Annex III domains.".to_string(),
        criteria: vec![
            Criterion::boolean(
                "c1_a",
                "Is the AI a safety component or the product itself covered by Annex I legislation (e.g., Medical Devices, Machinery, Aviation)?",
            ),
            Criterion::boolean(
                "c1_b",
                "Is that product required to undergo a third-party conformity assessment under the Annex I legislation?",
            ),
            Criterion::choice(
                "domain",
                "Select the domain of application:",
                ANNEX_III_DOMAINS,
            )
            .with_exceptions(vec![
                Criterion::boolean(
                    "profiling",
                    "Does the system perform profiling of natural persons?",
                )
                .overriding()
                .with_help(
                    "Article 6(3), last subparagraph: profiling systems are always high-risk.",
                ),
                Criterion::boolean("e1", "Does the system perform a narrow procedural task?"),
                Criterion::boolean(
                    "e2",
                    "Is the system intended to improve the result of a previously completed human activity?",
                ),
                Criterion::boolean(
                    "e3",
                    "Does the system detect decision-making patterns or deviations without replacing or influencing the previously completed human assessment absent proper human review?",
                ),
                Criterion::boolean(
                    "e4",
                    "Does the system perform a preparatory task to an assessment relevant for the Annex III use cases?",
                ),
            ]),
        ],
        precedence: Precedence::ProductThenDomain {
            product: vec!["c1_a".to_string(), "c1_b".to_string()],
            domain: "domain".to_string(),
        },
        outcome_obligations: obligations(&[
            (Outcome::HighRisk61, high_risk_6_1.as_slice()),
            (Outcome::HighRisk62, high_risk_6_2.as_slice()),
            (
                Outcome::NonHighRisk,
                &[
                    "Article 6(4): document the assessment before the system is placed on the market.",
                    "Article 49(2): register the system in the EU database.",
                    "Article 50: specific transparency rules may still apply.",
                ],
            ),
            (
                Outcome::MinimalRisk,
                &[
                    "Article 4: ensure a sufficient level of AI literacy of staff.",
                    "Article 95: voluntary codes of conduct are encouraged.",
                ],
            ),
        ]),
    }
}

fn transparency() -> Module {
    Module {
        id: ModuleId::Transparency,
        catalog_version: CatalogVersion::V2,
        title: "Specific Transparency Obligations (Article 50)".to_string(),
        legal_basis: "Article 50(1)-(4)".to_string(),
        intro: "These rules apply regardless of risk level when AI interacts with people or generates content."
            .to_string(),
        criteria: vec![
            Criterion::boolean(
                "t1",
                "Does the AI system interact directly with natural persons (e.g., Chatbots)?",
            )
            .with_obligation(
                "Article 50(1): inform natural persons that they are interacting with an AI system, unless this is obvious from the context.",
            ),
            Criterion::boolean(
                "t2",
                "Does the system generate synthetic audio, image, video or text content?",
            )
            .with_exceptions(vec![
                Criterion::boolean(
                    "e1",
                    "Does the system only perform an assistive function for standard editing, or not substantially alter the input data?",
                ),
                Criterion::boolean(
                    "e2",
                    "Is the use authorised by law to detect, prevent, investigate or prosecute criminal offences?",
                ),
            ])
            .with_obligation(
                "Article 50(2): mark outputs in a machine-readable format and make them detectable as artificially generated or manipulated.",
            ),
            Criterion::boolean(
                "t3",
                "Is it an emotion recognition or biometric categorization system?",
            )
            .with_obligation(
                "Article 50(3): inform exposed natural persons of the operation of the system and process personal data in line with Union data protection law.",
            ),
            Criterion::boolean(
                "t4",
                "Does it generate or manipulate 'Deepfakes' (image, audio, or video), or text published to inform the public on matters of public interest?",
            )
            .with_obligation(
                "Article 50(4): disclose that the content has been artificially generated or manipulated.",
            ),
        ],
        precedence: Precedence::Independent,
        outcome_obligations: obligations(&[]),
    }
}

fn gpai() -> Module {
    let mut systemic: Vec<&str> = vec![
        "Article 52(1): notify the Commission within two weeks of meeting the threshold.",
    ];
    systemic.extend_from_slice(GPAI_BASELINE);
    systemic.extend([
        "Article 55(1)(a): perform model evaluations, including adversarial testing.",
        "Article 55(1)(b): assess and mitigate possible systemic risks at Union level.",
        "Article 55(1)(c): track, document and report serious incidents to the AI Office.",
        "Article 55(1)(d): ensure an adequate level of cybersecurity protection.",
    ]);

    Module {
        id: ModuleId::Gpai,
        catalog_version: CatalogVersion::V2,
        title: "General-Purpose AI (GPAI) Models (Articles 51-55)".to_string(),
        legal_basis: "Articles 2(6), 3(63), 51-55".to_string(),
        intro: "GPAI models are classified separately from the AI systems built on them."
            .to_string(),
        criteria: vec![
            Criterion::boolean(
                "g1",
                "Does the model display significant generality and competently perform a wide range of distinct tasks?",
            ),
            Criterion::boolean(
                "g2",
                "Can the model be integrated into a variety of downstream systems or applications?",
            ),
            Criterion::boolean(
                "exclusion",
                "Is the model used exclusively for research, development or prototyping before being placed on the market?",
            ),
            Criterion::numeric(
                "compute",
                "Total cumulative compute used for training (expressed in FLOPs):",
                1e25,
                "FLOPs",
            ),
            Criterion::boolean(
                "high_impact",
                "Has the Commission found that the model has high-impact capabilities (Annex XIII criteria)?",
            ),
            Criterion::boolean(
                "systemic_designation",
                "Has the Commission explicitly designated the model as a GPAI model with systemic risk?",
            ),
        ],
        precedence: Precedence::GeneralityGate {
            exclusion: Some("exclusion".to_string()),
            gate: vec!["g1".to_string(), "g2".to_string()],
            systemic: vec![
                "compute".to_string(),
                "high_impact".to_string(),
                "systemic_designation".to_string(),
            ],
        },
        outcome_obligations: obligations(&[
            (Outcome::GpaiSystemicRisk, systemic.as_slice()),
            (Outcome::GpaiGeneral, GPAI_BASELINE),
        ]),
    }
}
