use clausecheck_types::{Rule, RuleKind};

/// Builtin contract compliance rules.
///
/// Keep these small and readable: a starter set for common commercial
/// contract reviews. Anything organization-specific belongs in `[[rules]]`.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "privacy-1".to_string(),
            title: "Data Protection Clause".to_string(),
            category: "Privacy & Data Protection".to_string(),
            severity: "critical".to_string(),
            kind: Some(RuleKind::Keyword),
            keywords: vec![
                "personal data".to_string(),
                "privacy policy".to_string(),
                "data protection".to_string(),
                "GDPR".to_string(),
                "data processing".to_string(),
            ],
            explanation: "Contracts must include adequate data protection provisions".to_string(),
            suggestion: Some(
                "Add data protection clauses covering collection, processing, and storage of personal data"
                    .to_string(),
            ),
            examples: vec![
                "The parties shall comply with all applicable data protection laws".to_string(),
            ],
            enabled: true,
            ..Rule::default()
        },
        Rule {
            id: "privacy-2".to_string(),
            title: "Data Transfer Restrictions".to_string(),
            category: "Privacy & Data Protection".to_string(),
            severity: "high".to_string(),
            kind: Some(RuleKind::Regex),
            // Reserved pattern field; evaluated in judgment mode until regex
            // semantics land.
            pattern: Some("(cross.?border|international.?transfer|third.?countr)".to_string()),
            explanation: "International data transfers must be properly regulated".to_string(),
            suggestion: Some(
                "Include provisions for international data transfers with appropriate safeguards"
                    .to_string(),
            ),
            enabled: true,
            ..Rule::default()
        },
        Rule {
            id: "ip-1".to_string(),
            title: "Intellectual Property Rights".to_string(),
            category: "Intellectual Property".to_string(),
            severity: "high".to_string(),
            kind: Some(RuleKind::Keyword),
            keywords: vec![
                "intellectual property".to_string(),
                "IP rights".to_string(),
                "copyright".to_string(),
                "trademark".to_string(),
                "patent".to_string(),
            ],
            explanation: "Clear IP ownership and usage rights must be established".to_string(),
            suggestion: Some(
                "Define IP ownership, licensing terms, and usage restrictions clearly".to_string(),
            ),
            enabled: true,
            ..Rule::default()
        },
        Rule {
            id: "indemnification-1".to_string(),
            title: "Indemnification Provisions".to_string(),
            category: "Risk & Liability".to_string(),
            severity: "critical".to_string(),
            kind: Some(RuleKind::Keyword),
            keywords: vec![
                "indemnify".to_string(),
                "indemnification".to_string(),
                "hold harmless".to_string(),
            ],
            explanation: "Indemnification clauses protect against third-party claims".to_string(),
            suggestion: Some(
                "Include mutual indemnification provisions with reasonable caps and exclusions"
                    .to_string(),
            ),
            enabled: true,
            ..Rule::default()
        },
        Rule {
            id: "termination-1".to_string(),
            title: "Termination Rights".to_string(),
            category: "Contract Terms".to_string(),
            severity: "medium".to_string(),
            kind: Some(RuleKind::Keyword),
            keywords: vec![
                "termination".to_string(),
                "terminate".to_string(),
                "breach".to_string(),
            ],
            explanation: "Clear termination procedures and rights must be defined".to_string(),
            suggestion: Some(
                "Specify termination triggers, notice periods, and post-termination obligations"
                    .to_string(),
            ),
            enabled: true,
            ..Rule::default()
        },
        Rule {
            id: "law-1".to_string(),
            title: "Governing Law".to_string(),
            category: "Contract Terms".to_string(),
            severity: "medium".to_string(),
            kind: Some(RuleKind::Keyword),
            keywords: vec![
                "governing law".to_string(),
                "jurisdiction".to_string(),
                "governed by the laws".to_string(),
            ],
            explanation: "The contract must state which law governs it and where disputes are resolved".to_string(),
            suggestion: Some(
                "Add a governing law and jurisdiction clause".to_string(),
            ),
            enabled: true,
            ..Rule::default()
        },
        Rule {
            id: "liability-cap-1".to_string(),
            title: "Mutual Liability Cap".to_string(),
            category: "Risk & Liability".to_string(),
            severity: "critical".to_string(),
            kind: Some(RuleKind::Llm),
            explanation: "Liability limitations must apply to both parties equally and be reasonable in relation to contract value"
                .to_string(),
            suggestion: Some("Add mutual liability caps that apply to both parties equally".to_string()),
            enabled: true,
            ..Rule::default()
        },
    ]
}
