use anyhow::Context;
use clausecheck_types::{ScanReport, SCHEMA_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<ScanReport> {
    let report: ScanReport = serde_json::from_str(text).context("parse scan report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

pub fn serialize_report(report: &ScanReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize scan report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausecheck_types::{ScanData, StatusCounts, ToolMeta};
    use time::OffsetDateTime;

    fn sample_report() -> ScanReport {
        ScanReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "clausecheck".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: OffsetDateTime::UNIX_EPOCH,
            finished_at: OffsetDateTime::UNIX_EPOCH,
            results: Vec::new(),
            overall_score: 0,
            counts: StatusCounts::default(),
            data: ScanData::default(),
        }
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = sample_report();
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let mut report = sample_report();
        report.schema = "something.else.v9".to_string();
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(parse_report_json(&text).is_err());
    }
}
