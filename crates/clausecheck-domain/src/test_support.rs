//! Builders and judge doubles shared by this crate's tests and by downstream
//! crates' tests.

use crate::judge::{Judge, JudgeError};
use clausecheck_types::{Rule, RuleKind};
use std::collections::BTreeMap;

pub fn keyword_rule(id: &str, keywords: &[&str]) -> Rule {
    Rule {
        id: id.to_string(),
        title: id.to_string(),
        kind: Some(RuleKind::Keyword),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        enabled: true,
        ..Rule::default()
    }
}

pub fn judgment_rule(id: &str, title: &str, explanation: &str) -> Rule {
    Rule {
        id: id.to_string(),
        title: title.to_string(),
        explanation: explanation.to_string(),
        kind: Some(RuleKind::Llm),
        enabled: true,
        ..Rule::default()
    }
}

pub trait RuleExt {
    fn with_suggestion(self, suggestion: &str) -> Rule;
}

impl RuleExt for Rule {
    fn with_suggestion(mut self, suggestion: &str) -> Rule {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

/// Judge double with canned replies keyed by rule title. Unknown titles
/// behave like an unconfigured provider.
#[derive(Debug, Default)]
pub struct ScriptedJudge {
    replies: BTreeMap<String, String>,
}

impl ScriptedJudge {
    pub fn with_reply(mut self, rule_title: &str, reply: &str) -> Self {
        self.replies
            .insert(rule_title.to_string(), reply.to_string());
        self
    }
}

impl Judge for ScriptedJudge {
    fn judge(
        &self,
        _document: &str,
        rule_title: &str,
        _rule_explanation: &str,
    ) -> Result<String, JudgeError> {
        self.replies
            .get(rule_title)
            .cloned()
            .ok_or(JudgeError::Unconfigured)
    }
}

/// Judge double that fails every call with a caller-chosen error.
pub struct FailingJudge {
    make_error: fn() -> JudgeError,
}

impl FailingJudge {
    pub fn new(make_error: fn() -> JudgeError) -> Self {
        Self { make_error }
    }
}

impl Judge for FailingJudge {
    fn judge(
        &self,
        _document: &str,
        _rule_title: &str,
        _rule_explanation: &str,
    ) -> Result<String, JudgeError> {
        Err((self.make_error)())
    }
}
