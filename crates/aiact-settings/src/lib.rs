//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::AiactConfigV1;
pub use resolve::{OutputFormat, Overrides, ResolvedConfig};

/// Parse `aiact.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AiactConfigV1> {
    let cfg: AiactConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective settings: CLI overrides, then config file, then built-in defaults.
pub fn resolve_config(cfg: AiactConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
