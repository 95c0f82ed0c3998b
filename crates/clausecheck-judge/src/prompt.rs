/// Build the judgment prompt for one (document, rule) pair.
///
/// The full document text travels with every call; the provider sees the
/// rule's title and explanation verbatim and is asked for a bare pass/fail
/// token plus one sentence of reasoning, which is what the engine's verdict
/// extraction expects.
pub fn build_prompt(document: &str, rule_title: &str, rule_explanation: &str) -> String {
    format!(
        "The contract text is:\n\
         {document}\n\
         \n\
         Decide whether the following compliance rule is satisfied, and briefly justify your decision:\n\
         Rule: {rule_title}\n\
         Requirement: {rule_explanation}\n\
         Answer only \"pass\" or \"fail\", followed by a one-sentence reason."
    )
}
