//! Use case orchestration for clausecheck.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, domain, and render layers. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and IO.

#![forbid(unsafe_code)]

mod render;
mod report;
mod scan;
mod session;

pub use render::{render_annotations, render_markdown, to_renderable};
pub use report::{parse_report_json, serialize_report};
pub use scan::{run_scan, score_exit_code, ScanInput, ScanOutput};
pub use session::{parse_scan_request, MemoryRuleStore, RuleStore, ScanError, ScanSession};
