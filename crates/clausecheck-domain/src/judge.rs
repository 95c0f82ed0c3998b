use thiserror::Error;

/// Port to the external natural-language judgment capability.
///
/// One call per judgment-mode rule, single attempt; retry policy (if any)
/// belongs to the adapter. Implementations must be shareable read-only
/// across concurrent scans and carry no per-call mutable state.
pub trait Judge: Send + Sync {
    /// Ask for a free-form verdict on whether `rule_explanation` is satisfied
    /// by `document`. The reply is interpreted by the engine, not here.
    fn judge(
        &self,
        document: &str,
        rule_title: &str,
        rule_explanation: &str,
    ) -> Result<String, JudgeError>;
}

/// Provider-scoped failure. Always absorbed into the affected rule's result;
/// never an operation-level error.
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("no judgment provider configured")]
    Unconfigured,

    /// Transport-level failure, including timeouts. Carried as a message so
    /// the engine stays free of HTTP client types.
    #[error("judgment request failed: {0}")]
    Http(String),

    #[error("judgment provider returned HTTP status {code}")]
    Status { code: u16 },

    #[error("judgment provider returned an empty reply")]
    EmptyReply,
}
