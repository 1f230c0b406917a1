//! Raw per-pattern matches.

use tracing::warn;

use crate::models::{ExtractionResult, TypeTag};
use crate::rules::RuleTable;

/// One match of one rule, before overlap resolution.
///
/// Borrows the input text and the table, so it lives for a single
/// extraction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchCandidate<'t, 'r> {
    pub start: usize,
    pub end: usize,
    /// Length in characters, used for precedence.
    pub char_len: usize,
    pub text: &'t str,
    pub tag: &'r TypeTag,
    /// Insertion index of the producing rule.
    pub rule_index: usize,
}

impl MatchCandidate<'_, '_> {
    pub fn into_result(self, domain: &str) -> ExtractionResult {
        ExtractionResult {
            start: self.start,
            length: self.end - self.start,
            text: self.text.to_string(),
            tag: self.tag.clone(),
            domain: domain.to_string(),
        }
    }
}

/// Scan `text` once per rule, in table order, and pool every match.
pub(crate) fn collect_candidates<'t, 'r>(
    table: &'r RuleTable,
    text: &'t str,
) -> Vec<MatchCandidate<'t, 'r>> {
    let mut candidates = Vec::new();

    for (rule_index, entry) in table.entries().iter().enumerate() {
        for span in entry.matcher().find_spans(text) {
            if span.is_empty() {
                warn!(
                    "Rule '{}' produced an empty match at {}, ignoring",
                    entry.name(),
                    span.start
                );
                continue;
            }

            let matched = &text[span.clone()];
            candidates.push(MatchCandidate {
                start: span.start,
                end: span.end,
                char_len: matched.chars().count(),
                text: matched,
                tag: entry.tag(),
                rule_index,
            });
        }
    }

    candidates
}
