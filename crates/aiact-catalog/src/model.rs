use crate::CatalogVersion;
use aiact_types::{ModuleId, Outcome};
use serde::Serialize;
use std::collections::BTreeMap;

/// Declared answer kind of a criterion.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CriterionKind {
    Boolean,
    /// The first option is the "not triggered" sentinel (e.g. `None / Other`, `No`).
    Enum { options: Vec<String> },
    /// Triggered when the answer is `>= threshold`.
    Numeric { threshold: f64, unit: String },
}

impl CriterionKind {
    pub fn name(&self) -> &'static str {
        match self {
            CriterionKind::Boolean => "boolean",
            CriterionKind::Enum { .. } => "enum",
            CriterionKind::Numeric { .. } => "numeric",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Criterion {
    pub id: String,
    pub question: String,
    pub kind: CriterionKind,
    /// Consulted only when this criterion is triggered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<Criterion>,
    /// When set on an exception, a positive answer keeps the parent triggered regardless of the
    /// sibling exceptions.
    #[serde(rename = "override", skip_serializing_if = "std::ops::Not::not")]
    pub is_override: bool,
    /// Obligations contributed by this criterion under [`Precedence::Independent`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub obligations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Criterion {
    pub fn boolean(id: &str, question: &str) -> Self {
        Self::new(id, question, CriterionKind::Boolean)
    }

    pub fn choice(id: &str, question: &str, options: &[&str]) -> Self {
        Self::new(
            id,
            question,
            CriterionKind::Enum {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        )
    }

    /// Two-option `No` / `Yes` enum, `No` being the default.
    pub fn yes_no(id: &str, question: &str) -> Self {
        Self::choice(id, question, &["No", "Yes"])
    }

    pub fn numeric(id: &str, question: &str, threshold: f64, unit: &str) -> Self {
        Self::new(
            id,
            question,
            CriterionKind::Numeric {
                threshold,
                unit: unit.to_string(),
            },
        )
    }

    fn new(id: &str, question: &str, kind: CriterionKind) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            kind,
            exceptions: Vec::new(),
            is_override: false,
            obligations: Vec::new(),
            help: None,
        }
    }

    pub fn with_exceptions(mut self, exceptions: Vec<Criterion>) -> Self {
        self.exceptions = exceptions;
        self
    }

    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    pub fn with_obligation(mut self, obligation: &str) -> Self {
        self.obligations.push(obligation.to_string());
        self
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }
}

/// How a module combines its criteria into one outcome.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Precedence {
    /// OR across all top-level criteria, each reduced by its own exceptions.
    AnyOf,
    /// AND of the product criteria first; otherwise the domain criterion and its derogation
    /// filter; otherwise minimal risk.
    ProductThenDomain { product: Vec<String>, domain: String },
    /// Every top-level criterion contributes its obligations independently.
    Independent,
    /// Exclusion short-circuits; then the AND gate; then OR across the systemic tests.
    GeneralityGate {
        exclusion: Option<String>,
        gate: Vec<String>,
        systemic: Vec<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Module {
    pub id: ModuleId,
    pub catalog_version: CatalogVersion,
    pub title: String,
    pub legal_basis: String,
    pub intro: String,
    pub criteria: Vec<Criterion>,
    pub precedence: Precedence,
    /// Fixed obligations attached to each outcome; missing entries mean none.
    pub outcome_obligations: BTreeMap<Outcome, Vec<String>>,
}

impl Module {
    /// Top-level criterion by id.
    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }

    /// Every criterion of the module, exceptions included, in catalog order.
    pub fn all_criteria(&self) -> Vec<&Criterion> {
        fn walk<'a>(criteria: &'a [Criterion], out: &mut Vec<&'a Criterion>) {
            for c in criteria {
                out.push(c);
                walk(&c.exceptions, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.criteria, &mut out);
        out
    }

    pub fn obligations_for(&self, outcome: Outcome) -> &[String] {
        self.outcome_obligations
            .get(&outcome)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Build an outcome -> obligations map from static text.
pub(crate) fn obligations(entries: &[(Outcome, &[&str])]) -> BTreeMap<Outcome, Vec<String>> {
    entries
        .iter()
        .map(|(outcome, lines)| (*outcome, lines.iter().map(|l| l.to_string()).collect()))
        .collect()
}
