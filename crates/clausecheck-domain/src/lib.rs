//! Pure rule evaluation (no IO).
//!
//! Input: a document body plus the caller's rule set.
//! Output: one result per enabled rule + an aggregate score.
//!
//! The only collaborator is the [`Judge`] port; its failures never escape a
//! single rule's result. Keyword evaluation is total and deterministic.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod judge;
pub mod report;
pub mod test_support;

mod evaluate;
mod verdict;

#[cfg(test)]
mod proptests;

pub use evaluate::{evaluate, evaluate_rule};
pub use judge::{Judge, JudgeError};
pub use report::DomainReport;
pub use verdict::verdict_from_reply;
