use crate::model::AiactConfigV1;
use aiact_catalog::CatalogVersion;
use aiact_types::ids;
use anyhow::Context;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(v: &str) -> anyhow::Result<Self> {
        match v {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown format: {other} (expected markdown|text|json)"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub catalog_version: Option<String>,
    pub format: Option<String>,
    pub export: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub catalog_version: CatalogVersion,
    pub format: OutputFormat,
    pub export: Option<String>,
}

pub fn resolve_config(cfg: AiactConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let catalog_version = match overrides.catalog_version.or(cfg.catalog_version) {
        Some(v) => v
            .parse::<CatalogVersion>()
            .context("invalid catalog_version")?,
        None => CatalogVersion::default(),
    };

    let format = match overrides.format.or(cfg.format) {
        Some(v) => OutputFormat::parse(&v).context("invalid format")?,
        None => OutputFormat::default(),
    };

    Ok(ResolvedConfig {
        catalog_version,
        format,
        export: overrides.export.or(cfg.export),
    })
}
