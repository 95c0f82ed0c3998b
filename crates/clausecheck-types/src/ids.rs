//! Stable identifiers for result outcome codes.
//!
//! `code` is a short snake_case discriminator describing how a result was
//! reached, independent of the human-readable rationale text.

// Keyword mode
pub const CODE_KEYWORD_MATCH: &str = "keyword_match";
pub const CODE_KEYWORD_MISS: &str = "keyword_miss";

// Judgment mode
pub const CODE_JUDGMENT_PASS: &str = "judgment_pass";
pub const CODE_JUDGMENT_FAIL: &str = "judgment_fail";

// Provider degraded: the judgment call failed and the rule was folded into a
// fail result instead of aborting the scan.
pub const CODE_JUDGE_UNAVAILABLE: &str = "judge_unavailable";
