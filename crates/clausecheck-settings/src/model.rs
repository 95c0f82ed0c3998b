use clausecheck_types::Rule;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `clausecheck.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClausecheckConfigV1 {
    /// Optional schema string for tooling (`clausecheck.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Gate threshold: the CLI exits non-zero when the overall score falls
    /// below this value. 0 (the default) never gates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_under: Option<u32>,

    /// Include the builtin contract rule set. Defaults to true when no
    /// `[[rules]]` are given, false otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin_rules: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge: Option<JudgeSettings>,

    /// Inline rule definitions, same shape as the scan request rules.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JudgeSettings {
    /// Chat-completions URL. Judgment rules degrade to explained failures
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Name of the environment variable holding the API key. The variable is
    /// read by the CLI, never here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}
