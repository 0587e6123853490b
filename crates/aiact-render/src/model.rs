#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Success,
    Info,
    Warning,
    Error,
}

impl RenderableSeverity {
    pub fn tag(self) -> &'static str {
        match self {
            RenderableSeverity::Success => "SUCCESS",
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARNING",
            RenderableSeverity::Error => "ERROR",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableBanner {
    pub severity: RenderableSeverity,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDetermination {
    pub module_title: String,
    pub catalog_version: String,
    pub outcome: String,
    pub banner: RenderableBanner,
    pub triggered_by: Vec<String>,
    pub obligations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCriterion {
    pub id: String,
    pub question: String,
    /// Short answer description, e.g. `yes/no` or `number (FLOPs), triggers at >= 1e25`.
    pub answer: String,
    pub is_override: bool,
    pub help: Option<String>,
    pub exceptions: Vec<RenderableCriterion>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableQuestionnaire {
    pub module_id: String,
    pub title: String,
    pub legal_basis: String,
    pub intro: String,
    pub catalog_version: String,
    pub criteria: Vec<RenderableCriterion>,
}
