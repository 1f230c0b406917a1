//! Overlap resolution.

use std::collections::BTreeMap;

use super::candidate::MatchCandidate;

/// Reduce pooled candidates to a disjoint set ordered by start offset.
///
/// Longer matches (in characters) beat shorter ones; on equal length the rule
/// inserted earlier wins. Losers are dropped whole. Spans that only touch do
/// not conflict.
pub(crate) fn resolve_overlaps<'t, 'r>(
    mut candidates: Vec<MatchCandidate<'t, 'r>>,
) -> Vec<MatchCandidate<'t, 'r>> {
    // Same span and tag from several rules: keep the earliest rule.
    candidates.sort_by(|a, b| {
        (a.start, a.end, a.tag, a.rule_index).cmp(&(b.start, b.end, b.tag, b.rule_index))
    });
    candidates.dedup_by(|later, kept| {
        later.start == kept.start && later.end == kept.end && later.tag == kept.tag
    });

    candidates.sort_by(|a, b| {
        b.char_len
            .cmp(&a.char_len)
            .then(a.rule_index.cmp(&b.rule_index))
            .then(a.start.cmp(&b.start))
    });

    // Accepted spans are disjoint, so ordering by start also orders by end:
    // only the last accepted span starting before `end` can reach past `start`.
    let mut accepted: BTreeMap<usize, MatchCandidate<'t, 'r>> = BTreeMap::new();
    for candidate in candidates {
        let clashes = accepted
            .range(..candidate.end)
            .next_back()
            .is_some_and(|(_, prev)| prev.end > candidate.start);
        if !clashes {
            accepted.insert(candidate.start, candidate);
        }
    }

    accepted.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TypeTag;
    use pretty_assertions::assert_eq;

    fn candidate<'r>(
        text: &'static str,
        start: usize,
        tag: &'r TypeTag,
        rule_index: usize,
    ) -> MatchCandidate<'static, 'r> {
        MatchCandidate {
            start,
            end: start + text.len(),
            char_len: text.chars().count(),
            text,
            tag,
            rule_index,
        }
    }

    fn spans(resolved: &[MatchCandidate<'_, '_>]) -> Vec<(usize, usize, usize)> {
        resolved.iter().map(|c| (c.start, c.end, c.rule_index)).collect()
    }

    #[test]
    fn test_longer_wins() {
        let tag = TypeTag::new("integer", "number");
        let resolved = resolve_overlaps(vec![
            candidate("15", 0, &tag, 0),
            candidate("15k", 0, &tag, 1),
        ]);
        assert_eq!(spans(&resolved), vec![(0, 3, 1)]);
    }

    #[test]
    fn test_equal_length_earlier_rule_wins() {
        let tag = TypeTag::new("integer", "number");
        let resolved = resolve_overlaps(vec![
            candidate("bc", 1, &tag, 1),
            candidate("ab", 0, &tag, 0),
        ]);
        assert_eq!(spans(&resolved), vec![(0, 2, 0)]);
    }

    #[test]
    fn test_loser_is_not_truncated() {
        let tag = TypeTag::new("integer", "number");
        // "1" and "234" both lose against "1,234"; nothing of them survives.
        let resolved = resolve_overlaps(vec![
            candidate("1", 0, &tag, 0),
            candidate("234", 2, &tag, 0),
            candidate("1,234", 0, &tag, 2),
        ]);
        assert_eq!(spans(&resolved), vec![(0, 5, 2)]);
    }

    #[test]
    fn test_touching_spans_both_kept() {
        let tag = TypeTag::new("integer", "number");
        let resolved = resolve_overlaps(vec![
            candidate("cd", 2, &tag, 1),
            candidate("ab", 0, &tag, 0),
        ]);
        assert_eq!(spans(&resolved), vec![(0, 2, 0), (2, 4, 1)]);
    }

    #[test]
    fn test_identical_candidates_deduplicated() {
        let tag = TypeTag::new("integer", "number");
        let resolved = resolve_overlaps(vec![
            candidate("12", 0, &tag, 3),
            candidate("12", 0, &tag, 1),
        ]);
        assert_eq!(spans(&resolved), vec![(0, 2, 1)]);
    }

    #[test]
    fn test_chain_of_overlaps() {
        let tag = TypeTag::new("integer", "number");
        // "abc" knocks out both neighbours; "z" is clear of it.
        let resolved = resolve_overlaps(vec![
            candidate("xa", 0, &tag, 0),
            candidate("abc", 1, &tag, 1),
            candidate("cy", 3, &tag, 0),
            candidate("z", 6, &tag, 0),
        ]);
        assert_eq!(spans(&resolved), vec![(1, 4, 1), (6, 7, 0)]);
    }

    #[test]
    fn test_length_counts_characters() {
        let tag = TypeTag::new("integer", "japanese");
        // "五十" is six bytes but two characters; "十ab" is five bytes but three.
        let resolved = resolve_overlaps(vec![
            candidate("五十", 0, &tag, 0),
            candidate("十ab", 3, &tag, 1),
        ]);
        assert_eq!(spans(&resolved), vec![(3, 8, 1)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_overlaps(Vec::new()).is_empty());
    }
}
