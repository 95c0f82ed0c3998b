//! Property tests for the aggregation contract.

use crate::evaluate;
use crate::test_support::ScriptedJudge;
use clausecheck_types::{Rule, Status};
use proptest::prelude::*;

fn arb_rule() -> impl Strategy<Value = Rule> {
    (
        "[a-z]{1,8}",
        any::<bool>(),
        proptest::collection::vec("[a-z]{1,5}", 0..3),
    )
        .prop_map(|(id, enabled, keywords)| Rule {
            id,
            enabled,
            keywords,
            ..Rule::default()
        })
}

proptest! {
    #[test]
    fn one_result_per_enabled_rule_in_input_order(
        document in "[a-z ]{0,40}",
        rules in proptest::collection::vec(arb_rule(), 0..12),
    ) {
        let report = evaluate(&document, &rules, &ScriptedJudge::default());

        let enabled: Vec<&str> = rules
            .iter()
            .filter(|r| r.enabled)
            .map(|r| r.id.as_str())
            .collect();
        let produced: Vec<&str> = report.results.iter().map(|r| r.rule_id.as_str()).collect();

        prop_assert_eq!(produced, enabled);
    }

    #[test]
    fn score_is_truncated_pass_ratio(
        document in "[a-z ]{0,40}",
        rules in proptest::collection::vec(arb_rule(), 0..12),
    ) {
        let report = evaluate(&document, &rules, &ScriptedJudge::default());

        let pass = report
            .results
            .iter()
            .filter(|r| r.status == Status::Pass)
            .count() as u32;
        let expected = if report.results.is_empty() {
            0
        } else {
            100 * pass / report.results.len() as u32
        };

        prop_assert_eq!(report.overall_score, expected);
        prop_assert!(report.overall_score <= 100);
        prop_assert_eq!(report.counts.pass, pass);
    }

    #[test]
    fn keyword_present_in_document_always_passes(
        prefix in "[a-z ]{0,20}",
        keyword in "[a-z]{2,6}",
        suffix in "[a-z ]{0,20}",
    ) {
        let document = format!("{prefix}{keyword}{suffix}");
        let rule = Rule {
            id: "r".to_string(),
            keywords: vec![keyword.clone()],
            enabled: true,
            ..Rule::default()
        };

        let report = evaluate(&document, &[rule], &ScriptedJudge::default());

        prop_assert_eq!(report.results[0].status, Status::Pass);
        prop_assert!(report.results[0].matches.contains(&keyword));
    }
}
