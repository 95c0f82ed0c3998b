use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One compliance requirement, supplied by the caller per request.
///
/// The shape is a fixed tagged structure with explicit optional fields;
/// `title`, `category`, and `severity` are descriptive and opaque to the
/// engine. Only `kind` and `keywords` participate in strategy selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Stable identifier. Uniqueness is the caller's responsibility; the
    /// engine never validates it.
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub category: String,

    /// Free-form severity label (e.g. `critical`, `high`). Never interpreted.
    #[serde(default)]
    pub severity: String,

    /// Explicit evaluation strategy selector.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RuleKind>,

    /// Ordered keyword list; non-empty triggers keyword-matching semantics.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Reserved regex-like field. Accepted and round-tripped, never evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Natural-language statement of the requirement; handed verbatim to the
    /// judgment provider in judgment mode.
    #[serde(default)]
    pub explanation: String,

    /// Single remediation hint, surfaced only on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Illustrative compliant clauses. Descriptive only.
    #[serde(default)]
    pub examples: Vec<String>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for Rule {
    /// Matches the wire defaults: everything empty, `enabled` true.
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            category: String::new(),
            severity: String::new(),
            kind: None,
            keywords: Vec::new(),
            pattern: None,
            explanation: String::new(),
            suggestion: None,
            examples: Vec::new(),
            enabled: true,
        }
    }
}

/// Declared rule type on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Keyword,
    Regex,
    Llm,
}

/// Resolved evaluation strategy. Unlike [`RuleKind`] this is never absent:
/// every enabled rule evaluates in exactly one of these modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleMode {
    Keyword,
    Judgment,
}

impl Rule {
    /// Resolve the evaluation strategy.
    ///
    /// Keyword mode iff the rule carries keywords and is not explicitly
    /// `llm`-typed; everything else (explicit `llm`, keyword-less `regex`,
    /// keyword-less untyped) delegates to the judgment provider. `pattern`
    /// is reserved and never selects a strategy of its own.
    pub fn mode(&self) -> RuleMode {
        if self.kind == Some(RuleKind::Llm) || self.keywords.is_empty() {
            RuleMode::Judgment
        } else {
            RuleMode::Keyword
        }
    }

    /// Remediation hint to attach to a failed result, if any.
    pub fn failure_suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_rule(keywords: &[&str]) -> Rule {
        Rule {
            id: "r1".to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            ..Rule::default()
        }
    }

    #[test]
    fn keywords_select_keyword_mode() {
        assert_eq!(keyword_rule(&["gdpr"]).mode(), RuleMode::Keyword);
    }

    #[test]
    fn empty_keywords_select_judgment_mode() {
        assert_eq!(keyword_rule(&[]).mode(), RuleMode::Judgment);
    }

    #[test]
    fn explicit_llm_kind_wins_over_keywords() {
        let rule = Rule {
            kind: Some(RuleKind::Llm),
            ..keyword_rule(&["gdpr"])
        };
        assert_eq!(rule.mode(), RuleMode::Judgment);
    }

    #[test]
    fn regex_kind_with_keywords_stays_keyword_mode() {
        // `pattern` is reserved; a regex-typed rule that also carries
        // keywords is evaluated by its keywords.
        let rule = Rule {
            kind: Some(RuleKind::Regex),
            pattern: Some("cross.?border".to_string()),
            ..keyword_rule(&["transfer"])
        };
        assert_eq!(rule.mode(), RuleMode::Keyword);
    }

    #[test]
    fn deserializes_wire_shape_with_defaults() {
        let rule: Rule = serde_json::from_str(
            r#"{"id": "privacy-1", "type": "keyword", "keywords": ["GDPR"]}"#,
        )
        .expect("parse rule");
        assert!(rule.enabled);
        assert_eq!(rule.kind, Some(RuleKind::Keyword));
        assert!(rule.suggestion.is_none());
    }

    #[test]
    fn empty_suggestion_is_not_a_failure_suggestion() {
        let rule = Rule {
            suggestion: Some(String::new()),
            ..keyword_rule(&["x"])
        };
        assert_eq!(rule.failure_suggestion(), None);
    }
}
