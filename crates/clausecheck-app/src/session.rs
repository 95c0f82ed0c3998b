//! Request/response session over an in-memory rule store.
//!
//! This mirrors the service surface: callers hand over a scan request (or its
//! JSON form), manage the stored rule set, and get back wire-shaped
//! responses. Everything here is process-local state; persistence is out of
//! scope.

use clausecheck_domain::Judge;
use clausecheck_types::{Rule, ScanRequest, ScanResponse};
use std::sync::Mutex;
use thiserror::Error;

/// Errors a caller can provoke. Provider failures never surface here; they
/// degrade into per-rule fail results inside the engine.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid scan request: {0}")]
    InvalidRequest(String),
}

/// Storage seam for the active rule set. `set` replaces the whole set.
pub trait RuleStore: Send + Sync {
    fn get(&self) -> Vec<Rule>;
    fn set(&self, rules: Vec<Rule>);
}

/// Process-local [`RuleStore`].
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    rules: Mutex<Vec<Rule>>,
}

impl MemoryRuleStore {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules: Mutex::new(rules),
        }
    }
}

impl RuleStore for MemoryRuleStore {
    fn get(&self) -> Vec<Rule> {
        match self.rules.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set(&self, rules: Vec<Rule>) {
        match self.rules.lock() {
            Ok(mut guard) => *guard = rules,
            Err(poisoned) => *poisoned.into_inner() = rules,
        }
    }
}

/// Parse a JSON scan request body.
pub fn parse_scan_request(body: &str) -> Result<ScanRequest, ScanError> {
    let request: ScanRequest =
        serde_json::from_str(body).map_err(|e| ScanError::InvalidRequest(e.to_string()))?;
    validate_rules(&request.rules)?;
    Ok(request)
}

fn validate_rules(rules: &[Rule]) -> Result<(), ScanError> {
    for rule in rules {
        if rule.id.trim().is_empty() {
            return Err(ScanError::InvalidRequest(
                "rule id must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

/// Stateful facade pairing a rule store with a judge.
pub struct ScanSession<S: RuleStore> {
    store: S,
    judge: Box<dyn Judge>,
}

impl<S: RuleStore> ScanSession<S> {
    pub fn new(store: S, judge: Box<dyn Judge>) -> Self {
        Self { store, judge }
    }

    /// Scan with exactly the request's rules. An empty rule list is a valid
    /// request and yields an empty result set with score 0; the stored set
    /// only backs the `rules` operations.
    pub fn scan(&self, request: &ScanRequest) -> Result<ScanResponse, ScanError> {
        validate_rules(&request.rules)?;

        let report = clausecheck_domain::evaluate(
            &request.contract_text,
            &request.rules,
            self.judge.as_ref(),
        );

        Ok(ScanResponse {
            results: report.results,
            overall_score: report.overall_score,
        })
    }

    pub fn rules(&self) -> Vec<Rule> {
        self.store.get()
    }

    pub fn set_rules(&self, rules: Vec<Rule>) -> Result<(), ScanError> {
        validate_rules(&rules)?;
        self.store.set(rules);
        Ok(())
    }
}
