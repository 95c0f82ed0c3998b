//! Config parsing and preset/override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings. Reading files and environment variables is the CLI's
//! job.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{ClausecheckConfigV1, JudgeSettings};
pub use presets::builtin_rules;
pub use resolve::{Overrides, ResolvedConfig, ResolvedJudge};

/// Parse `clausecheck.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ClausecheckConfigV1> {
    let cfg: ClausecheckConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective scan configuration (presets + file config + CLI
/// overrides).
pub fn resolve_config(
    cfg: ClausecheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
