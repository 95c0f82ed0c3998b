//! Render use cases: markdown and GitHub annotations from in-memory reports.

use clausecheck_render::{RenderableResult, RenderableScan, RenderableStatus};
use clausecheck_types::{ScanReport, Status};

pub fn to_renderable(report: &ScanReport) -> RenderableScan {
    RenderableScan {
        overall_score: report.overall_score,
        pass_count: report.counts.pass,
        fail_count: report.counts.fail,
        judge_failures: report.data.judge_failures,
        results: report
            .results
            .iter()
            .map(|r| RenderableResult {
                rule_id: r.rule_id.clone(),
                status: match r.status {
                    Status::Pass => RenderableStatus::Pass,
                    Status::Fail => RenderableStatus::Fail,
                },
                matches: r.matches.clone(),
                rationale: r.rationale.clone(),
                suggestions: r.suggestions.clone(),
            })
            .collect(),
    }
}

pub fn render_markdown(scan: &RenderableScan) -> String {
    clausecheck_render::render_markdown(scan)
}

pub fn render_annotations(scan: &RenderableScan, max: usize) -> Vec<String> {
    clausecheck_render::render_github_annotations(scan)
        .into_iter()
        .take(max)
        .collect()
}
