use clausecheck_types::{ids, RuleResult, Status, StatusCounts};

/// Output of one aggregation pass over a rule set.
#[derive(Clone, Debug)]
pub struct DomainReport {
    /// One entry per enabled rule, input order preserved.
    pub results: Vec<RuleResult>,
    /// Truncated percentage of passing rules; 0 when nothing was evaluated.
    pub overall_score: u32,
    pub counts: StatusCounts,
    /// Judgment calls that failed and were folded into fail results.
    pub judge_failures: u32,
}

pub fn status_counts(results: &[RuleResult]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for r in results {
        match r.status {
            Status::Pass => counts.pass += 1,
            Status::Fail => counts.fail += 1,
        }
    }
    counts
}

/// `floor(100 * pass / total)`. Integer division gives the truncation the
/// contract requires; the empty case avoids division by zero.
pub fn overall_score(results: &[RuleResult]) -> u32 {
    if results.is_empty() {
        return 0;
    }
    let pass = results.iter().filter(|r| r.status == Status::Pass).count() as u64;
    (100 * pass / results.len() as u64) as u32
}

pub fn judge_failures(results: &[RuleResult]) -> u32 {
    results
        .iter()
        .filter(|r| r.code == ids::CODE_JUDGE_UNAVAILABLE)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: Status) -> RuleResult {
        RuleResult {
            rule_id: "r".to_string(),
            status,
            matches: Vec::new(),
            rationale: String::new(),
            suggestions: Vec::new(),
            code: ids::CODE_KEYWORD_MATCH.to_string(),
            fingerprint: None,
        }
    }

    #[test]
    fn empty_results_score_zero() {
        assert_eq!(overall_score(&[]), 0);
    }

    #[test]
    fn one_pass_one_fail_scores_fifty() {
        let results = vec![result(Status::Pass), result(Status::Fail)];
        assert_eq!(overall_score(&results), 50);
    }

    #[test]
    fn score_truncates_instead_of_rounding() {
        // 2/3 = 66.66..; the contract requires 66, not 67.
        let results = vec![
            result(Status::Pass),
            result(Status::Pass),
            result(Status::Fail),
        ];
        assert_eq!(overall_score(&results), 66);

        // 1/3 = 33.33.. -> 33.
        let results = vec![
            result(Status::Pass),
            result(Status::Fail),
            result(Status::Fail),
        ];
        assert_eq!(overall_score(&results), 33);
    }

    #[test]
    fn counts_split_by_status() {
        let results = vec![result(Status::Pass), result(Status::Fail), result(Status::Fail)];
        let counts = status_counts(&results);
        assert_eq!(counts.pass, 1);
        assert_eq!(counts.fail, 2);
    }
}
