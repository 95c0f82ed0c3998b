//! The `scan` use case: resolve configuration, evaluate rules, produce a report.

use anyhow::Context;
use clausecheck_domain::Judge;
use clausecheck_settings::{Overrides, ResolvedConfig};
use clausecheck_types::{Rule, ScanData, ScanReport, ToolMeta, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the scan use case.
#[derive(Clone, Debug)]
pub struct ScanInput<'a> {
    /// Document body to scan.
    pub document: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// When set, replaces the configured rule set (request-supplied rules).
    pub rules_override: Option<Vec<Rule>>,
}

/// Output from the scan use case.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    /// The generated report artifact.
    pub report: ScanReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the scan use case: parse config, evaluate the rule set against the
/// document, wrap the outcome in the report envelope.
pub fn run_scan(input: ScanInput<'_>, judge: &dyn Judge) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        clausecheck_settings::ClausecheckConfigV1::default()
    } else {
        clausecheck_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let mut resolved = clausecheck_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    if let Some(rules) = input.rules_override {
        resolved.rules = rules;
    }

    let domain_report = clausecheck_domain::evaluate(input.document, &resolved.rules, judge);

    let finished_at = OffsetDateTime::now_utc();

    let rules_total = resolved.rules.len() as u32;
    let rules_enabled = resolved.rules.iter().filter(|r| r.enabled).count() as u32;

    let report = ScanReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "clausecheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        overall_score: domain_report.overall_score,
        counts: domain_report.counts,
        data: ScanData {
            rules_total,
            rules_enabled,
            judge_failures: domain_report.judge_failures,
            document_bytes: input.document.len() as u64,
        },
        results: domain_report.results,
    };

    Ok(ScanOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map the aggregate score against the gate threshold to an exit code:
/// 0 = at or above threshold, 2 = below.
pub fn score_exit_code(score: u32, fail_under: u32) -> i32 {
    if score < fail_under { 2 } else { 0 }
}
