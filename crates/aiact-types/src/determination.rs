use crate::error::AssessmentError;
use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One of the four regulatory modules of the questionnaire.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    ProhibitedPractices,
    HighRisk,
    Transparency,
    Gpai,
}

impl ModuleId {
    /// Sidebar order of the navigator.
    pub const ALL: [ModuleId; 4] = [
        ModuleId::ProhibitedPractices,
        ModuleId::HighRisk,
        ModuleId::Transparency,
        ModuleId::Gpai,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::ProhibitedPractices => ids::MODULE_PROHIBITED_PRACTICES,
            ModuleId::HighRisk => ids::MODULE_HIGH_RISK,
            ModuleId::Transparency => ids::MODULE_TRANSPARENCY,
            ModuleId::Gpai => ids::MODULE_GPAI,
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = AssessmentError;

    /// Accepts the canonical id, the article shorthand, or the sidebar number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            ids::MODULE_PROHIBITED_PRACTICES | "prohibited" | "art5" | "1" => {
                Ok(ModuleId::ProhibitedPractices)
            }
            ids::MODULE_HIGH_RISK | "art6" | "2" => Ok(ModuleId::HighRisk),
            ids::MODULE_TRANSPARENCY | "art50" | "3" => Ok(ModuleId::Transparency),
            ids::MODULE_GPAI | "art51" | "art51-55" | "4" => Ok(ModuleId::Gpai),
            _ => Err(AssessmentError::UnknownModule { id: s.to_string() }),
        }
    }
}

/// Banner severity, mirroring the status classes of the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Module-specific classification labels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Outcome {
    #[serde(rename = "PROHIBITED")]
    Prohibited,
    #[serde(rename = "CLEAR")]
    Clear,
    #[serde(rename = "HIGH_RISK_6_1")]
    HighRisk61,
    #[serde(rename = "HIGH_RISK_6_2")]
    HighRisk62,
    #[serde(rename = "NON_HIGH_RISK")]
    NonHighRisk,
    #[serde(rename = "MINIMAL_RISK")]
    MinimalRisk,
    #[serde(rename = "TRANSPARENCY_REQUIRED")]
    TransparencyRequired,
    #[serde(rename = "NO_TRANSPARENCY_OBLIGATION")]
    NoTransparencyObligation,
    #[serde(rename = "EXCLUDED_RND")]
    ExcludedRnd,
    #[serde(rename = "GPAI_SYSTEMIC_RISK")]
    GpaiSystemicRisk,
    #[serde(rename = "GPAI_GENERAL")]
    GpaiGeneral,
    #[serde(rename = "NOT_GPAI")]
    NotGpai,
}

impl Outcome {
    pub const ALL: [Outcome; 12] = [
        Outcome::Prohibited,
        Outcome::Clear,
        Outcome::HighRisk61,
        Outcome::HighRisk62,
        Outcome::NonHighRisk,
        Outcome::MinimalRisk,
        Outcome::TransparencyRequired,
        Outcome::NoTransparencyObligation,
        Outcome::ExcludedRnd,
        Outcome::GpaiSystemicRisk,
        Outcome::GpaiGeneral,
        Outcome::NotGpai,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Prohibited => ids::OUTCOME_PROHIBITED,
            Outcome::Clear => ids::OUTCOME_CLEAR,
            Outcome::HighRisk61 => ids::OUTCOME_HIGH_RISK_6_1,
            Outcome::HighRisk62 => ids::OUTCOME_HIGH_RISK_6_2,
            Outcome::NonHighRisk => ids::OUTCOME_NON_HIGH_RISK,
            Outcome::MinimalRisk => ids::OUTCOME_MINIMAL_RISK,
            Outcome::TransparencyRequired => ids::OUTCOME_TRANSPARENCY_REQUIRED,
            Outcome::NoTransparencyObligation => ids::OUTCOME_NO_TRANSPARENCY_OBLIGATION,
            Outcome::ExcludedRnd => ids::OUTCOME_EXCLUDED_RND,
            Outcome::GpaiSystemicRisk => ids::OUTCOME_GPAI_SYSTEMIC_RISK,
            Outcome::GpaiGeneral => ids::OUTCOME_GPAI_GENERAL,
            Outcome::NotGpai => ids::OUTCOME_NOT_GPAI,
        }
    }

    pub fn from_label(label: &str) -> Option<Outcome> {
        Outcome::ALL.into_iter().find(|o| o.label() == label)
    }

    /// The module that can produce this outcome.
    pub fn module(self) -> ModuleId {
        match self {
            Outcome::Prohibited | Outcome::Clear => ModuleId::ProhibitedPractices,
            Outcome::HighRisk61
            | Outcome::HighRisk62
            | Outcome::NonHighRisk
            | Outcome::MinimalRisk => ModuleId::HighRisk,
            Outcome::TransparencyRequired | Outcome::NoTransparencyObligation => {
                ModuleId::Transparency
            }
            Outcome::ExcludedRnd
            | Outcome::GpaiSystemicRisk
            | Outcome::GpaiGeneral
            | Outcome::NotGpai => ModuleId::Gpai,
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Outcome::Prohibited | Outcome::GpaiSystemicRisk => Severity::Error,
            Outcome::HighRisk61
            | Outcome::HighRisk62
            | Outcome::TransparencyRequired
            | Outcome::GpaiGeneral => Severity::Warning,
            Outcome::ExcludedRnd | Outcome::NotGpai => Severity::Info,
            Outcome::Clear
            | Outcome::NonHighRisk
            | Outcome::MinimalRisk
            | Outcome::NoTransparencyObligation => Severity::Success,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating one module against one answer set.
///
/// `triggered_by` holds the criterion ids that produced the outcome. `obligations` is ordered
/// and free of duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Determination {
    pub module: ModuleId,
    pub catalog_version: String,
    pub outcome: Outcome,
    #[serde(default)]
    pub triggered_by: BTreeSet<String>,
    #[serde(default)]
    pub obligations: Vec<String>,
}
