use super::scan_text;
use crate::types::keywords::KeywordTables;

pub const MAX_REASONS: usize = 3;
pub const FALLBACK_REASON: &str = "no clear eco-related keywords found — using a generic estimate";
pub const DISCLAIMER: &str = "Note: This is a quick heuristic estimate for demo purposes.";

/// Matched keywords rendered as reasons, positives first, in table order.
/// Falls back to a single generic reason and keeps at most `MAX_REASONS`.
pub fn reasons(tables: &KeywordTables, name: &str, description: &str) -> Vec<String> {
    let text = scan_text(name, description);
    let mut reasons = tables
        .positive
        .matches(&text)
        .map(|keyword| format!("contains '{}' (+{})", keyword.phrase, keyword.weight))
        .chain(
            tables
                .negative
                .matches(&text)
                .map(|keyword| format!("mentions '{}' (-{})", keyword.phrase, keyword.weight)),
        )
        .collect::<Vec<_>>();
    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }
    reasons.truncate(MAX_REASONS);
    reasons
}

pub fn explain(tables: &KeywordTables, name: &str, description: &str, score: u8) -> String {
    format!(
        "Predicted eco-score: {score}/100.\nReasons: {}\n{DISCLAIMER}",
        reasons(tables, name, description).join(", ")
    )
}
