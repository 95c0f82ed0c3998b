use crate::fingerprint::fingerprint_for_result;
use crate::judge::Judge;
use crate::report::{judge_failures, overall_score, status_counts, DomainReport};
use crate::verdict::verdict_from_reply;
use clausecheck_types::{ids, Rule, RuleMode, RuleResult, Status};

/// Evaluate all enabled rules against one document, in input order.
///
/// Rules are independent: no rule's outcome affects another's evaluation,
/// and no rule (including one whose judgment call fails) can abort the
/// batch. Disabled rules contribute nothing, not even to the score
/// denominator.
pub fn evaluate(document: &str, rules: &[Rule], judge: &dyn Judge) -> DomainReport {
    let results: Vec<RuleResult> = rules
        .iter()
        .filter(|r| r.enabled)
        .map(|r| evaluate_rule(document, r, judge))
        .collect();

    DomainReport {
        overall_score: overall_score(&results),
        counts: status_counts(&results),
        judge_failures: judge_failures(&results),
        results,
    }
}

/// Produce exactly one result for one (document, rule) pair.
pub fn evaluate_rule(document: &str, rule: &Rule, judge: &dyn Judge) -> RuleResult {
    match rule.mode() {
        RuleMode::Keyword => evaluate_keywords(document, rule),
        RuleMode::Judgment => evaluate_judgment(document, rule, judge),
    }
}

/// Case-insensitive substring search of each keyword against the document.
/// Pass iff at least one keyword is found; `matches` carries every keyword
/// that matched, not just the first.
fn evaluate_keywords(document: &str, rule: &Rule) -> RuleResult {
    let haystack = document.to_lowercase();
    let matches: Vec<String> = rule
        .keywords
        .iter()
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .cloned()
        .collect();

    let total = rule.keywords.len();
    let (status, code, rationale) = if matches.is_empty() {
        (
            Status::Fail,
            ids::CODE_KEYWORD_MISS,
            format!("rule not matched: none of {total} keyword(s) found in the document"),
        )
    } else {
        (
            Status::Pass,
            ids::CODE_KEYWORD_MATCH,
            format!(
                "rule matched: {found} of {total} keyword(s) found in the document",
                found = matches.len()
            ),
        )
    };

    finish(rule, status, code, matches, rationale)
}

/// Delegate to the judgment provider and interpret its free-form reply.
///
/// A provider failure of any kind (network, auth, timeout, empty reply) is
/// absorbed here: the rule fails with a rationale describing the cause and
/// the scan moves on. Availability of the whole scan outranks strict
/// correctness of one rule when the provider is degraded.
fn evaluate_judgment(document: &str, rule: &Rule, judge: &dyn Judge) -> RuleResult {
    match judge.judge(document, &rule.title, &rule.explanation) {
        Ok(raw) => {
            // The reply is normalized once; the lowercased text is both the
            // verdict-extraction input and the rationale.
            let reply = raw.trim().to_lowercase();
            let status = verdict_from_reply(&reply);
            let code = match status {
                Status::Pass => ids::CODE_JUDGMENT_PASS,
                Status::Fail => ids::CODE_JUDGMENT_FAIL,
            };
            finish(rule, status, code, Vec::new(), reply)
        }
        Err(err) => finish(
            rule,
            Status::Fail,
            ids::CODE_JUDGE_UNAVAILABLE,
            Vec::new(),
            format!("judgment provider call failed: {err}"),
        ),
    }
}

fn finish(
    rule: &Rule,
    status: Status,
    code: &str,
    matches: Vec<String>,
    rationale: String,
) -> RuleResult {
    let suggestions = match (status, rule.failure_suggestion()) {
        (Status::Fail, Some(s)) => vec![s.to_string()],
        _ => Vec::new(),
    };

    RuleResult {
        rule_id: rule.id.clone(),
        status,
        matches,
        rationale,
        suggestions,
        code: code.to_string(),
        fingerprint: Some(fingerprint_for_result(&rule.id, code)),
    }
}
