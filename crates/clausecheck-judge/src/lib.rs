//! Judgment provider adapters.
//!
//! The engine only knows the [`clausecheck_domain::Judge`] port; this crate
//! supplies the two implementations the CLI wires in: an OpenAI-compatible
//! HTTP client and an always-unavailable offline judge.

#![forbid(unsafe_code)]

mod http;
mod offline;
mod prompt;

pub use http::{HttpJudge, JudgeConfig};
pub use offline::OfflineJudge;
pub use prompt::build_prompt;
