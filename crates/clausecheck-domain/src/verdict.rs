use clausecheck_types::Status;

/// Extract a pass/fail verdict from a free-form judgment reply.
///
/// The contract is a deliberately loose case-insensitive substring search for
/// `"pass"` anywhere in the reply; anything else is a fail. This is the
/// documented interpretation of the provider's output and is kept in one
/// named function so its looseness stays visible and testable.
pub fn verdict_from_reply(reply: &str) -> Status {
    if reply.to_lowercase().contains("pass") {
        Status::Pass
    } else {
        Status::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_pass_passes() {
        assert_eq!(verdict_from_reply("pass: clause present"), Status::Pass);
    }

    #[test]
    fn uppercase_pass_passes() {
        assert_eq!(verdict_from_reply("PASS: requirement met."), Status::Pass);
    }

    #[test]
    fn pass_anywhere_in_reply_passes() {
        // The loose contract: "pass" embedded in a longer word still counts.
        assert_eq!(
            verdict_from_reply("the clause surpasses the requirement"),
            Status::Pass
        );
    }

    #[test]
    fn fail_reply_fails() {
        assert_eq!(verdict_from_reply("Fail: term missing."), Status::Fail);
    }

    #[test]
    fn empty_reply_fails() {
        assert_eq!(verdict_from_reply(""), Status::Fail);
    }
}
