//! Extraction engine.
//!
//! Runs every rule of a [`RuleTable`] over the input, pools the matches and
//! resolves overlaps into a disjoint, ordered result list. The engine knows
//! nothing about modes or languages; it consumes whatever table it is given.

mod candidate;
mod extractor;
mod resolve;

pub use extractor::NumberExtractor;

use tracing::trace;

use crate::models::ExtractionResult;
use crate::rules::RuleTable;

/// Trait for numeral extractors.
pub trait Extractor {
    /// Extract all numeral spans from `text`, ordered by start offset.
    fn extract(&self, text: &str) -> Vec<ExtractionResult>;
}

/// Evaluate `table` against `text`.
///
/// Pure and infallible: text without numerals yields an empty list.
pub fn extract(table: &RuleTable, text: &str) -> Vec<ExtractionResult> {
    if text.is_empty() {
        return Vec::new();
    }

    let candidates = candidate::collect_candidates(table, text);
    let pooled = candidates.len();
    let survivors = resolve::resolve_overlaps(candidates);
    trace!("{} candidates resolved to {} results", pooled, survivors.len());

    survivors
        .into_iter()
        .map(|c| c.into_result(table.domain()))
        .collect()
}

impl Extractor for RuleTable {
    fn extract(&self, text: &str) -> Vec<ExtractionResult> {
        extract(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::japanese::{
        self, DOTTED_NUMBER, JAPANESE, JAPANESE_IDIOM, MIXED_NUMBER, NUMBER, NUMBER_SUFFIX,
    };
    use crate::models::{Mode, TypeTag};
    use crate::rules::Pattern;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use regex::Regex;

    fn run(mode: Mode, text: &str) -> Vec<(String, String)> {
        let table = japanese::rule_table(mode).unwrap();
        extract(&table, text)
            .into_iter()
            .map(|r| (r.text, r.tag.subtype))
            .collect()
    }

    fn pair(text: &str, subtype: &str) -> (String, String) {
        (text.to_string(), subtype.to_string())
    }

    #[test]
    fn test_plain_digits() {
        let table = japanese::rule_table(Mode::Default).unwrap();
        let results = extract(&table, "123456");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].start, 0);
        assert_eq!(results[0].length, 6);
        assert_eq!(results[0].tag, TypeTag::new("integer", NUMBER));
        assert_eq!(results[0].domain, "Integer");
    }

    #[test]
    fn test_digits_with_suffix() {
        assert_eq!(run(Mode::Default, "15k"), vec![pair("15k", NUMBER_SUFFIX)]);
    }

    #[test]
    fn test_dotted_digits() {
        assert_eq!(run(Mode::Default, "1,234"), vec![pair("1,234", DOTTED_NUMBER)]);
        assert_eq!(
            run(Mode::Default, "２，３３２，１１１"),
            vec![pair("２，３３２，１１１", DOTTED_NUMBER)]
        );
    }

    #[test]
    fn test_digits_followed_by_idiom() {
        let table = japanese::rule_table(Mode::Default).unwrap();
        let results = extract(&table, "100半ダース");

        assert_eq!(results.len(), 2);
        assert_eq!((results[0].text.as_str(), results[0].start), ("100", 0));
        assert_eq!(results[0].tag.subtype, NUMBER);
        assert_eq!((results[1].text.as_str(), results[1].start), ("半ダース", 3));
        assert_eq!(results[1].tag.subtype, JAPANESE_IDIOM);
    }

    #[test]
    fn test_idiom_beats_embedded_numeral() {
        assert_eq!(run(Mode::ExtractAll, "半百"), vec![pair("半百", JAPANESE_IDIOM)]);
        assert_eq!(run(Mode::Default, "五十ダース"), vec![pair("五十ダース", JAPANESE_IDIOM)]);
        assert_eq!(run(Mode::Default, "3ダース"), vec![pair("3ダース", JAPANESE_IDIOM)]);
    }

    #[test]
    fn test_standalone_half() {
        for mode in [Mode::Default, Mode::ExtractAll] {
            assert_eq!(run(mode, "半"), vec![pair("半", JAPANESE_IDIOM)]);
            assert_eq!(run(mode, "半ダース"), vec![pair("半ダース", JAPANESE_IDIOM)]);
        }

        let table = japanese::rule_table(Mode::Default).unwrap();
        let results = extract(&table, "りんご半");
        assert_eq!(results.len(), 1);
        assert_eq!((results[0].start, results[0].length), (9, 3));
    }

    #[test]
    fn test_sign_after_digit_is_a_range() {
        assert_eq!(run(Mode::Default, "1-2"), vec![pair("1", NUMBER), pair("2", NUMBER)]);
        assert_eq!(run(Mode::Default, "10 - 3"), vec![pair("10", NUMBER), pair("3", NUMBER)]);
        assert_eq!(run(Mode::Default, "気温は-7度"), vec![pair("-7", NUMBER)]);
        assert_eq!(run(Mode::Default, "マイナス5"), vec![pair("マイナス5", NUMBER)]);
    }

    #[test]
    fn test_digits_with_multiplier() {
        for mode in [Mode::Default, Mode::ExtractAll] {
            assert_eq!(run(mode, "5万円"), vec![pair("5万", MIXED_NUMBER)]);
        }
        assert_eq!(
            run(Mode::Default, "人口は３千万人"),
            vec![pair("３千万", MIXED_NUMBER)]
        );
    }

    #[test]
    fn test_mode_difference() {
        assert_eq!(run(Mode::Default, "西九条"), vec![]);
        assert_eq!(run(Mode::ExtractAll, "西九条"), vec![pair("九", JAPANESE)]);
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            run(Mode::Default, "りんごを三個と卵を1ダース、合計1,200円で買った"),
            vec![
                pair("三", JAPANESE),
                pair("1ダース", JAPANESE_IDIOM),
                pair("1,200", DOTTED_NUMBER),
            ]
        );
    }

    #[test]
    fn test_no_numerals() {
        let table = japanese::rule_table(Mode::Default).unwrap();
        assert!(extract(&table, "こんにちは").is_empty());
        assert!(extract(&table, "").is_empty());
    }

    #[test]
    fn test_decimal_is_not_an_integer() {
        assert_eq!(run(Mode::Default, "1.5"), vec![]);
    }

    #[test]
    fn test_equal_length_overlap_prefers_earlier_rule() {
        let mut builder = RuleTable::builder("Test");
        builder
            .insert("ab", Regex::new("ab").unwrap(), TypeTag::new("test", "first"))
            .unwrap()
            .insert("bc", Regex::new("bc").unwrap(), TypeTag::new("test", "second"))
            .unwrap();
        let table = builder.build();

        let results = extract(&table, "abc");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "ab");
        assert_eq!(results[0].tag.subtype, "first");
        assert_eq!(results[0].domain, "Test");

        let mut reversed = RuleTable::builder("Test");
        reversed
            .insert("bc", Regex::new("bc").unwrap(), TypeTag::new("test", "second"))
            .unwrap()
            .insert("ab", Regex::new("ab").unwrap(), TypeTag::new("test", "first"))
            .unwrap();
        let results = extract(&reversed.build(), "abc");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "bc");
    }

    #[test]
    fn test_same_span_from_two_rules() {
        let mut builder = RuleTable::builder("Test");
        builder
            .insert("digits", Regex::new("[0-9]+").unwrap(), TypeTag::new("test", "a"))
            .unwrap()
            .insert(
                "guarded-digits",
                Pattern::with_guards("[0-9]+", Some("x"), None).unwrap(),
                TypeTag::new("test", "a"),
            )
            .unwrap();
        let results = extract(&builder.build(), "42");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "42");
    }

    #[test]
    fn test_table_as_extractor() {
        let table = japanese::rule_table(Mode::Default).unwrap();
        assert_eq!(table.extract("15k"), extract(&table, "15k"));
    }

    proptest! {
        #[test]
        fn prop_results_disjoint_and_ordered(
            text in "[0-9０-９,，.kKG 半ダース一二三五十百千万西九条のを個マイナス-]{0,40}",
            extract_all in any::<bool>(),
        ) {
            let mode = if extract_all { Mode::ExtractAll } else { Mode::Default };
            let table = japanese::rule_table(mode).unwrap();
            let results = extract(&table, &text);

            for window in results.windows(2) {
                prop_assert!(window[0].end() <= window[1].start);
            }
            for r in &results {
                prop_assert!(r.length > 0);
                prop_assert_eq!(&text[r.start..r.end()], r.text.as_str());
            }
        }

        #[test]
        fn prop_extraction_is_idempotent(text in "\\PC{0,40}") {
            let table = japanese::rule_table(Mode::ExtractAll).unwrap();
            prop_assert_eq!(extract(&table, &text), extract(&table, &text));
        }
    }
}
