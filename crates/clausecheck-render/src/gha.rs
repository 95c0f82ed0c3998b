use crate::{RenderableScan, RenderableStatus};

/// Render failed rules as GitHub Actions workflow command annotations.
///
/// Format: `::error::{message}` (scan results carry no file locations, so no
/// `file=` metadata is emitted). Passing rules stay silent.
pub fn render_github_annotations(scan: &RenderableScan) -> Vec<String> {
    let mut out = Vec::new();

    for r in &scan.results {
        if r.status != RenderableStatus::Fail {
            continue;
        }

        let message = format!("[{}] {}", r.rule_id, r.rationale)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        out.push(format!("::error::{}", message));
    }

    out
}
