//! Stable identifiers for modules, outcomes, and catalog versions.
//!
//! Module ids are kebab-case. Outcome labels are SCREAMING_SNAKE_CASE and appear verbatim in
//! reports and exports.

// Modules
pub const MODULE_PROHIBITED_PRACTICES: &str = "prohibited-practices";
pub const MODULE_HIGH_RISK: &str = "high-risk";
pub const MODULE_TRANSPARENCY: &str = "transparency";
pub const MODULE_GPAI: &str = "gpai";

// Outcomes: prohibited-practices
pub const OUTCOME_PROHIBITED: &str = "PROHIBITED";
pub const OUTCOME_CLEAR: &str = "CLEAR";

// Outcomes: high-risk
pub const OUTCOME_HIGH_RISK_6_1: &str = "HIGH_RISK_6_1";
pub const OUTCOME_HIGH_RISK_6_2: &str = "HIGH_RISK_6_2";
pub const OUTCOME_NON_HIGH_RISK: &str = "NON_HIGH_RISK";
pub const OUTCOME_MINIMAL_RISK: &str = "MINIMAL_RISK";

// Outcomes: transparency
pub const OUTCOME_TRANSPARENCY_REQUIRED: &str = "TRANSPARENCY_REQUIRED";
pub const OUTCOME_NO_TRANSPARENCY_OBLIGATION: &str = "NO_TRANSPARENCY_OBLIGATION";

// Outcomes: gpai
pub const OUTCOME_EXCLUDED_RND: &str = "EXCLUDED_RND";
pub const OUTCOME_GPAI_SYSTEMIC_RISK: &str = "GPAI_SYSTEMIC_RISK";
pub const OUTCOME_GPAI_GENERAL: &str = "GPAI_GENERAL";
pub const OUTCOME_NOT_GPAI: &str = "NOT_GPAI";

// Catalog versions
pub const CATALOG_V1: &str = "v1";
pub const CATALOG_V2: &str = "v2";

// Schemas
pub const SCHEMA_CONFIG_V1: &str = "aiact.config.v1";
