//! Versioned rule catalog for the AI Act questionnaire.
//!
//! Static declarative data only: criteria, exceptions, override flags, precedence rules, and
//! per-outcome obligations for each module. Catalogs are built once per process and are
//! immutable thereafter. The evaluator lives in `aiact-domain`.

#![forbid(unsafe_code)]

mod model;
mod v1;
mod v2;
mod validate;

pub use model::{Criterion, CriterionKind, Module, Precedence};
pub use validate::validate_catalog;

use aiact_types::{AssessmentError, ModuleId, ids};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Shipped criteria sets. Variants are kept side by side rather than merged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVersion {
    /// First navigator release.
    V1,
    /// Regulation (EU) 2024/1689 consolidated.
    #[default]
    V2,
}

impl CatalogVersion {
    pub const ALL: [CatalogVersion; 2] = [CatalogVersion::V1, CatalogVersion::V2];

    pub fn as_str(self) -> &'static str {
        match self {
            CatalogVersion::V1 => ids::CATALOG_V1,
            CatalogVersion::V2 => ids::CATALOG_V2,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CatalogVersion::V1 => "2024 navigator baseline",
            CatalogVersion::V2 => "Regulation (EU) 2024/1689 consolidated",
        }
    }
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogVersion {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "v1" | "1" => Ok(CatalogVersion::V1),
            "v2" | "2" | "2024/1689" => Ok(CatalogVersion::V2),
            other => Err(AssessmentError::UnknownCatalogVersion {
                version: other.to_string(),
            }),
        }
    }
}

/// All four modules of one catalog version, in sidebar order.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    version: CatalogVersion,
    modules: Vec<Module>,
}

impl Catalog {
    fn build(version: CatalogVersion) -> Self {
        let modules = match version {
            CatalogVersion::V1 => v1::modules(),
            CatalogVersion::V2 => v2::modules(),
        };
        Self { version, modules }
    }

    pub fn version(&self) -> CatalogVersion {
        self.version
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Module by typed id. Every catalog carries all four modules.
    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Module by string id (canonical id or alias).
    pub fn get_module(&self, id: &str) -> Result<&Module, AssessmentError> {
        let module_id: ModuleId = id.parse()?;
        self.module(module_id)
            .ok_or_else(|| AssessmentError::UnknownModule { id: id.to_string() })
    }

    #[cfg(test)]
    pub(crate) fn module_mut(&mut self, id: ModuleId) -> &mut Module {
        self.modules
            .iter_mut()
            .find(|m| m.id == id)
            .expect("module present in shipped catalog")
    }
}

static CATALOG_V1: LazyLock<Catalog> = LazyLock::new(|| Catalog::build(CatalogVersion::V1));
static CATALOG_V2: LazyLock<Catalog> = LazyLock::new(|| Catalog::build(CatalogVersion::V2));

/// The process-wide, immutable catalog for `version`.
pub fn get_catalog(version: CatalogVersion) -> &'static Catalog {
    match version {
        CatalogVersion::V1 => LazyLock::force(&CATALOG_V1),
        CatalogVersion::V2 => LazyLock::force(&CATALOG_V2),
    }
}

/// Look up a module of the given catalog version by string id.
pub fn get_module(version: CatalogVersion, id: &str) -> Result<&'static Module, AssessmentError> {
    get_catalog(version).get_module(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiact_types::Outcome;

    #[test]
    fn get_module_is_total_over_known_ids() {
        for version in CatalogVersion::ALL {
            for id in ModuleId::ALL {
                let module = get_module(version, id.as_str()).expect("known module");
                assert_eq!(module.id, id);
            }
        }
    }

    #[test]
    fn get_module_rejects_unknown_ids() {
        let err = get_module(CatalogVersion::V2, "annex-iv").unwrap_err();
        assert!(matches!(err, AssessmentError::UnknownModule { id } if id == "annex-iv"));
    }

    #[test]
    fn catalog_version_parses_and_rejects() {
        assert_eq!("v1".parse::<CatalogVersion>(), Ok(CatalogVersion::V1));
        assert_eq!(" v2 ".parse::<CatalogVersion>(), Ok(CatalogVersion::V2));
        assert!(matches!(
            "v3".parse::<CatalogVersion>(),
            Err(AssessmentError::UnknownCatalogVersion { .. })
        ));
        assert_eq!(CatalogVersion::default(), CatalogVersion::V2);
    }

    #[test]
    fn catalog_is_built_once() {
        let a = get_catalog(CatalogVersion::V2) as *const Catalog;
        let b = get_catalog(CatalogVersion::V2) as *const Catalog;
        assert_eq!(a, b);
    }

    #[test]
    fn modules_follow_sidebar_order() {
        let ids: Vec<ModuleId> = get_catalog(CatalogVersion::V2)
            .modules()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, ModuleId::ALL.to_vec());
    }

    #[test]
    fn v2_prohibitions_follow_article_5_letters() {
        let module = get_module(CatalogVersion::V2, "prohibited-practices").unwrap();
        let ids: Vec<&str> = module.criteria.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p7", "p5", "p6", "p8", "p4"]);
    }

    #[test]
    fn v2_domain_lists_none_sentinel_first_and_profiling_overrides() {
        let module = get_module(CatalogVersion::V2, "high-risk").unwrap();
        let domain = module.criterion("domain").unwrap();
        match &domain.kind {
            CriterionKind::Enum { options } => {
                assert_eq!(options[0], "None / Other");
                assert_eq!(options.len(), 9);
            }
            other => panic!("domain should be an enum, got {other:?}"),
        }
        let profiling = &domain.exceptions[0];
        assert_eq!(profiling.id, "profiling");
        assert!(profiling.is_override);
        assert!(domain.exceptions[1..].iter().all(|e| !e.is_override));
    }

    #[test]
    fn v2_compute_threshold_is_1e25() {
        let module = get_module(CatalogVersion::V2, "gpai").unwrap();
        let compute = module.criterion("compute").unwrap();
        assert_eq!(
            compute.kind,
            CriterionKind::Numeric {
                threshold: 1e25,
                unit: "FLOPs".to_string()
            }
        );
    }

    #[test]
    fn systemic_obligations_extend_the_general_ones() {
        let module = get_module(CatalogVersion::V2, "gpai").unwrap();
        let general = module.obligations_for(Outcome::GpaiGeneral);
        let systemic = module.obligations_for(Outcome::GpaiSystemicRisk);
        assert!(!general.is_empty());
        assert!(general.iter().all(|o| systemic.contains(o)));
        assert!(module.obligations_for(Outcome::NotGpai).is_empty());
    }

    #[test]
    fn v1_has_no_exceptions_on_prohibitions() {
        let module = get_module(CatalogVersion::V1, "art5").unwrap();
        assert_eq!(module.criteria.len(), 6);
        assert!(module.criteria.iter().all(|c| c.exceptions.is_empty()));
    }

    #[test]
    fn modules_serialize_for_questionnaire_export() {
        let module = get_module(CatalogVersion::V2, "high-risk").unwrap();
        let json = serde_json::to_value(module).unwrap();
        assert_eq!(json["id"], "high-risk");
        assert_eq!(json["precedence"]["rule"], "product_then_domain");
        let profiling = &json["criteria"][2]["exceptions"][0];
        assert_eq!(profiling["id"], "profiling");
        assert_eq!(profiling["override"], true);
        assert!(json["criteria"][0].get("override").is_none());
        assert!(json["outcome_obligations"]["HIGH_RISK_6_2"].is_array());
    }
}
