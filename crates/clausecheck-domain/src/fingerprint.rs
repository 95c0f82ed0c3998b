use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a rule result.
///
/// Identity fields:
/// - rule id
/// - outcome code
///
/// The rationale is deliberately excluded: judgment replies vary between
/// runs, and the fingerprint exists to dedup and trend the same outcome
/// across scans.
pub fn fingerprint_for_result(rule_id: &str, code: &str) -> String {
    let canonical = format!("{rule_id}|{code}");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_across_calls() {
        let a = fingerprint_for_result("privacy-1", "keyword_miss");
        let b = fingerprint_for_result("privacy-1", "keyword_miss");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn distinguishes_outcomes() {
        let miss = fingerprint_for_result("privacy-1", "keyword_miss");
        let hit = fingerprint_for_result("privacy-1", "keyword_match");
        assert_ne!(miss, hit);
    }
}
