use aiact_settings::{AiactConfigV1, Overrides, ResolvedConfig};
use anyhow::Context;
use tracing::debug;

/// Parse `aiact.toml` contents (empty means defaults) and apply CLI overrides.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        AiactConfigV1::default()
    } else {
        aiact_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved = aiact_settings::resolve_config(cfg, overrides).context("resolve config")?;
    debug!(
        catalog_version = %resolved.catalog_version,
        format = ?resolved.format,
        export = ?resolved.export,
        "resolved config"
    );
    Ok(resolved)
}
