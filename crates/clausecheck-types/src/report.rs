use crate::rule::Rule;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the clausecheck report artifact.
pub const SCHEMA_REPORT_V1: &str = "clausecheck.report.v1";

/// Per-rule verdict. There is deliberately no third state: a degraded
/// judgment provider folds into `Fail` with an explanatory rationale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

/// One verdict per evaluated rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleResult {
    /// Back-reference to the originating rule.
    pub rule_id: String,

    pub status: Status,

    /// Every keyword that matched, in rule order. Always empty in judgment
    /// mode: no structured evidence is extracted from a free-form reply.
    pub matches: Vec<String>,

    /// Templated sentence (keyword mode) or the provider's reply / failure
    /// description (judgment mode).
    pub rationale: String,

    /// Zero or one remediation hint; populated only on failure.
    pub suggestions: Vec<String>,

    /// Stable outcome discriminator (see [`crate::ids`]).
    pub code: String,

    /// Stable identity hash for dedup and trending across scans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// The `scan` operation request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub contract_text: String,
    pub rules: Vec<Rule>,
}

/// The `scan` operation response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    /// One entry per enabled rule, preserving input rule order.
    pub results: Vec<RuleResult>,

    /// `floor(100 * pass / results.len())`, or 0 when nothing was evaluated.
    pub overall_score: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusCounts {
    pub pass: u32,
    pub fail: u32,
}

/// Scan-specific summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanData {
    pub rules_total: u32,
    pub rules_enabled: u32,

    /// Judgment calls that failed and were folded into fail results.
    pub judge_failures: u32,

    pub document_bytes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The report artifact written by the CLI.
///
/// The envelope wraps the scan response in a stable outer shape so downstream
/// tooling can dispatch on `schema` without knowing scan internals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub results: Vec<RuleResult>,
    pub overall_score: u32,
    pub counts: StatusCounts,
    pub data: ScanData,
}
