//! Stable DTOs and IDs used across the clausecheck workspace.
//!
//! This crate is intentionally boring:
//! - the rule model accepted at the scan boundary
//! - data types for the emitted report
//! - stable outcome codes
//!
//! Wire names follow the scan contract (`contractText`, `ruleId`,
//! `overallScore`); everything else is ordinary snake_case.

#![forbid(unsafe_code)]

pub mod ids;
pub mod report;
pub mod rule;

pub use report::{
    RuleResult, ScanData, ScanReport, ScanRequest, ScanResponse, Status, StatusCounts, ToolMeta,
    SCHEMA_REPORT_V1,
};
pub use rule::{Rule, RuleKind, RuleMode};
