use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `aiact.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and unknown values are only
/// rejected at resolution time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AiactConfigV1 {
    /// Optional schema string for tooling (`aiact.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Criteria set to evaluate against: `v1` or `v2` (default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_version: Option<String>,

    /// Output format of `evaluate`: `markdown` (default), `text`, or `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Write the obligations list to this path after every evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<String>,
}
