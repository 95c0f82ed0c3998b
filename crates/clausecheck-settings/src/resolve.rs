use crate::{model::ClausecheckConfigV1, presets};
use clausecheck_types::Rule;

/// CLI overrides. Each field beats the corresponding config value.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub judge_endpoint: Option<String>,
    pub judge_model: Option<String>,
    pub judge_timeout_ms: Option<u64>,
    pub fail_under: Option<u32>,
}

/// Judge connection settings after resolution. `api_key_env` still names an
/// environment variable; the CLI performs the lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedJudge {
    pub endpoint: String,
    pub model: String,
    pub api_key_env: Option<String>,
    pub timeout_ms: u64,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    /// Builtin presets (when enabled) followed by the config's own rules.
    pub rules: Vec<Rule>,
    /// `None` means no provider: judgment rules degrade per the engine
    /// contract instead of blocking the scan.
    pub judge: Option<ResolvedJudge>,
    pub fail_under: u32,
}

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub fn resolve_config(
    cfg: ClausecheckConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let fail_under = overrides.fail_under.or(cfg.fail_under).unwrap_or(0);
    if fail_under > 100 {
        anyhow::bail!("fail_under must be within 0..=100, got {fail_under}");
    }

    let use_builtin = cfg.builtin_rules.unwrap_or(cfg.rules.is_empty());
    let mut rules = if use_builtin {
        presets::builtin_rules()
    } else {
        Vec::new()
    };
    rules.extend(cfg.rules);

    let judge_cfg = cfg.judge.unwrap_or_default();
    let endpoint = overrides
        .judge_endpoint
        .or(judge_cfg.endpoint)
        .filter(|e| !e.trim().is_empty());

    let judge = match endpoint {
        Some(endpoint) => {
            let timeout_ms = overrides
                .judge_timeout_ms
                .or(judge_cfg.timeout_ms)
                .unwrap_or(DEFAULT_TIMEOUT_MS);
            if timeout_ms == 0 {
                anyhow::bail!("judge timeout_ms must be greater than zero");
            }
            Some(ResolvedJudge {
                endpoint,
                model: overrides
                    .judge_model
                    .or(judge_cfg.model)
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_key_env: judge_cfg.api_key_env,
                timeout_ms,
            })
        }
        None => None,
    };

    Ok(ResolvedConfig {
        rules,
        judge,
        fail_under,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn empty_config_uses_builtin_rules_and_no_judge() {
        let resolved =
            resolve_config(ClausecheckConfigV1::default(), Overrides::default()).unwrap();
        assert!(!resolved.rules.is_empty());
        assert!(resolved.judge.is_none());
        assert_eq!(resolved.fail_under, 0);
    }

    #[test]
    fn inline_rules_disable_builtins_by_default() {
        let cfg = parse_config_toml(
            r#"
[[rules]]
id = "custom-1"
keywords = ["retain"]
"#,
        )
        .unwrap();

        let resolved = resolve_config(cfg, Overrides::default()).unwrap();
        assert_eq!(resolved.rules.len(), 1);
        assert_eq!(resolved.rules[0].id, "custom-1");
    }

    #[test]
    fn builtin_rules_can_be_kept_alongside_inline_rules() {
        let cfg = parse_config_toml(
            r#"
builtin_rules = true

[[rules]]
id = "custom-1"
keywords = ["retain"]
"#,
        )
        .unwrap();

        let resolved = resolve_config(cfg, Overrides::default()).unwrap();
        assert!(resolved.rules.len() > 1);
        assert_eq!(resolved.rules.last().unwrap().id, "custom-1");
    }

    #[test]
    fn judge_settings_resolve_with_defaults_and_overrides() {
        let cfg = parse_config_toml(
            r#"
[judge]
endpoint = "https://api.openai.com/v1/chat/completions"
api_key_env = "OPENAI_API_KEY"
"#,
        )
        .unwrap();

        let resolved = resolve_config(
            cfg,
            Overrides {
                judge_model: Some("gpt-4o".to_string()),
                ..Overrides::default()
            },
        )
        .unwrap();

        let judge = resolved.judge.unwrap();
        assert_eq!(judge.model, "gpt-4o");
        assert_eq!(judge.timeout_ms, 30_000);
        assert_eq!(judge.api_key_env.as_deref(), Some("OPENAI_API_KEY"));
    }

    #[test]
    fn endpoint_override_enables_judge_without_config() {
        let resolved = resolve_config(
            ClausecheckConfigV1::default(),
            Overrides {
                judge_endpoint: Some("http://localhost:8080/v1/chat/completions".to_string()),
                ..Overrides::default()
            },
        )
        .unwrap();
        assert!(resolved.judge.is_some());
    }

    #[test]
    fn out_of_range_fail_under_is_rejected() {
        let err = resolve_config(
            ClausecheckConfigV1::default(),
            Overrides {
                fail_under: Some(250),
                ..Overrides::default()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("fail_under"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let cfg = parse_config_toml(
            r#"
[judge]
endpoint = "http://localhost:8080/v1/chat/completions"
timeout_ms = 0
"#,
        )
        .unwrap();
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }

    #[test]
    fn config_rule_tables_parse_wire_field_names() {
        let cfg = parse_config_toml(
            r#"
[[rules]]
id = "privacy-9"
type = "llm"
explanation = "Processor obligations must be mirrored"
suggestion = "Add processor terms"
"#,
        )
        .unwrap();
        assert_eq!(cfg.rules.len(), 1);
        assert_eq!(
            cfg.rules[0].kind,
            Some(clausecheck_types::RuleKind::Llm)
        );
    }
}
