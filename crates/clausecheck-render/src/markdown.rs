use crate::{RenderableScan, RenderableStatus};

pub fn render_markdown(scan: &RenderableScan) -> String {
    let mut out = String::new();

    out.push_str("# Clausecheck report\n\n");
    out.push_str(&format!(
        "- Overall score: **{}/100**\n- Rules: {} passed / {} failed\n\n",
        scan.overall_score, scan.pass_count, scan.fail_count
    ));

    if scan.judge_failures > 0 {
        out.push_str(&format!(
            "> Note: {} rule(s) could not be judged (provider unavailable) and count as failed.\n\n",
            scan.judge_failures
        ));
    }

    if scan.results.is_empty() {
        out.push_str("No rules evaluated.\n");
        return out;
    }

    out.push_str("## Results\n\n");

    for r in &scan.results {
        let status = match r.status {
            RenderableStatus::Pass => "PASS",
            RenderableStatus::Fail => "FAIL",
        };

        out.push_str(&format!("- [{}] `{}`: {}\n", status, r.rule_id, r.rationale));

        if !r.matches.is_empty() {
            out.push_str(&format!("  - matched: {}\n", r.matches.join(", ")));
        }
        for s in &r.suggestions {
            out.push_str(&format!("  - suggestion: {}\n", s));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderableResult;

    #[test]
    fn renders_empty_scan() {
        let scan = RenderableScan {
            overall_score: 0,
            pass_count: 0,
            fail_count: 0,
            judge_failures: 0,
            results: Vec::new(),
        };
        let md = render_markdown(&scan);
        assert!(md.contains("No rules evaluated"));
        assert!(md.contains("**0/100**"));
    }

    #[test]
    fn renders_matches_suggestions_and_degraded_note() {
        let scan = RenderableScan {
            overall_score: 50,
            pass_count: 1,
            fail_count: 1,
            judge_failures: 1,
            results: vec![
                RenderableResult {
                    rule_id: "privacy-1".to_string(),
                    status: RenderableStatus::Pass,
                    matches: vec!["GDPR".to_string(), "personal data".to_string()],
                    rationale: "rule matched".to_string(),
                    suggestions: Vec::new(),
                },
                RenderableResult {
                    rule_id: "liability-cap-1".to_string(),
                    status: RenderableStatus::Fail,
                    matches: Vec::new(),
                    rationale: "judgment provider call failed: no judgment provider configured"
                        .to_string(),
                    suggestions: vec!["Add a mutual cap".to_string()],
                },
            ],
        };

        let md = render_markdown(&scan);
        assert!(md.contains("**50/100**"));
        assert!(md.contains("1 rule(s) could not be judged"));
        assert!(md.contains("[PASS] `privacy-1`"));
        assert!(md.contains("matched: GDPR, personal data"));
        assert!(md.contains("suggestion: Add a mutual cap"));
    }
}
