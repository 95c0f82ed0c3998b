use clausecheck_domain::{Judge, JudgeError};

/// Judge used when no provider endpoint is configured.
///
/// Every call fails with [`JudgeError::Unconfigured`], which the engine folds
/// into per-rule fail results; keyword rules are unaffected and the scan
/// still completes.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineJudge;

impl Judge for OfflineJudge {
    fn judge(
        &self,
        _document: &str,
        _rule_title: &str,
        _rule_explanation: &str,
    ) -> Result<String, JudgeError> {
        Err(JudgeError::Unconfigured)
    }
}
