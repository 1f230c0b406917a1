//! Rule tables: ordered (pattern, type tag) associations.

mod pattern;
mod table;

pub use pattern::Pattern;
pub use table::{RuleEntry, RuleTable, RuleTableBuilder};

use std::fmt;
use std::ops::Range;

use regex::Regex;
use tracing::debug;

use crate::definitions::LanguageBundle;
use crate::error::ConfigError;
use crate::models::Mode;

/// Capability to scan text with a single pattern.
///
/// Implementors return every match of their own scan as byte ranges,
/// non-overlapping and in ascending order. The engine composes many such
/// scans and never looks at characters itself.
pub trait PatternMatcher: Send + Sync + fmt::Debug {
    /// Identity used to reject duplicate registrations within a table.
    fn key(&self) -> String;

    /// All non-overlapping matches in `text`.
    fn find_spans(&self, text: &str) -> Vec<Range<usize>>;

    /// Whether some input lets the matcher produce a zero-length span.
    ///
    /// The default only scans the empty string. Regex-backed matchers answer
    /// from the pattern's minimum match length, which also covers patterns
    /// such as `\b[0-9]*` that only match empty in context.
    fn matches_empty(&self) -> bool {
        self.find_spans("").iter().any(|span| span.is_empty())
    }
}

/// Whether the regex `source` has a minimum match length of zero.
///
/// `None` when the source does not parse, which cannot happen for a pattern
/// the `regex` crate already compiled.
pub(crate) fn min_len_is_zero(source: &str) -> Option<bool> {
    let hir = regex_syntax::Parser::new().parse(source).ok()?;
    Some(hir.properties().minimum_len() == Some(0))
}

impl PatternMatcher for Regex {
    fn key(&self) -> String {
        self.as_str().to_string()
    }

    fn matches_empty(&self) -> bool {
        min_len_is_zero(self.as_str())
            .unwrap_or_else(|| self.find_spans("").iter().any(|span| span.is_empty()))
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.find_iter(text).map(|m| m.range()).collect()
    }
}

/// Build the rule table for `mode` from a definition bundle.
///
/// The bundle's base rules go in first, in order, followed by exactly one
/// native-numeral rule picked by `mode`.
pub fn build_rule_table(mode: Mode, bundle: &LanguageBundle) -> Result<RuleTable, ConfigError> {
    let mut builder = RuleTable::builder(&bundle.domain);

    for def in &bundle.base {
        builder.insert_def(def)?;
    }

    let native = match mode {
        Mode::Default => &bundle.allow_listed,
        Mode::ExtractAll => &bundle.aggressive,
    };
    builder.insert_def(native)?;

    let table = builder.build();
    debug!(
        "Built {} rule table for {} with {} rules",
        mode,
        bundle.language,
        table.len()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::RuleDef;
    use crate::models::TypeTag;
    use pretty_assertions::assert_eq;

    fn names(table: &RuleTable) -> Vec<&str> {
        table.entries().iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_default_mode_table() {
        let bundle = LanguageBundle::japanese();
        let table = build_rule_table(Mode::Default, &bundle).unwrap();

        assert_eq!(table.domain(), "Integer");
        assert_eq!(
            names(&table),
            vec![
                "digits",
                "digits-with-multiplier",
                "signed-digits",
                "digits-with-suffix",
                "dotted-digits",
                "half-dozen",
                "half-unit",
                "dozen",
                "native-allow-listed",
            ]
        );
    }

    #[test]
    fn test_modes_are_exclusive() {
        let bundle = LanguageBundle::japanese();
        let allow_listed = bundle.allow_listed.compile().unwrap().key();
        let aggressive = bundle.aggressive.compile().unwrap().key();

        let default_table = build_rule_table(Mode::Default, &bundle).unwrap();
        assert!(default_table.contains_pattern(&allow_listed));
        assert!(!default_table.contains_pattern(&aggressive));

        let all_table = build_rule_table(Mode::ExtractAll, &bundle).unwrap();
        assert!(all_table.contains_pattern(&aggressive));
        assert!(!all_table.contains_pattern(&allow_listed));

        for table in [&default_table, &all_table] {
            let native = table
                .entries()
                .iter()
                .filter(|e| e.tag().subtype == "japanese")
                .count();
            assert_eq!(native, 1);
        }
    }

    #[test]
    fn test_duplicate_pattern_in_bundle() {
        let mut bundle = LanguageBundle::japanese();
        let mut copy = bundle.base[0].clone();
        copy.name = "digits-again".to_string();
        bundle.base.push(copy);

        let err = build_rule_table(Mode::Default, &bundle).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicatePattern { ref rule, .. } if rule == "digits-again"
        ));
    }

    #[test]
    fn test_mode_rule_duplicating_base_rule() {
        let mut bundle = LanguageBundle::japanese();
        bundle.aggressive = bundle.base[0].clone();

        assert!(build_rule_table(Mode::Default, &bundle).is_ok());
        assert!(build_rule_table(Mode::ExtractAll, &bundle).is_err());
    }

    #[test]
    fn test_malformed_pattern() {
        let mut bundle = LanguageBundle::japanese();
        bundle.base.push(RuleDef::new(
            "broken",
            "[0-9",
            TypeTag::new("integer", "number"),
        ));

        let err = build_rule_table(Mode::Default, &bundle).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPattern { ref rule, .. } if rule == "broken"
        ));
    }

    #[test]
    fn test_empty_matching_pattern() {
        let mut bundle = LanguageBundle::japanese();
        bundle.base.push(RuleDef::new(
            "optional-digits",
            "[0-9]*",
            TypeTag::new("integer", "number"),
        ));

        let err = build_rule_table(Mode::Default, &bundle).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyMatch { ref rule } if rule == "optional-digits"
        ));
    }

    #[test]
    fn test_context_dependent_empty_match() {
        let mut bundle = LanguageBundle::japanese();
        bundle.base.push(RuleDef::new(
            "word-start-digits",
            r"\b[0-9]*",
            TypeTag::new("integer", "number"),
        ));

        let err = build_rule_table(Mode::Default, &bundle).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyMatch { ref rule } if rule == "word-start-digits"
        ));
    }

    #[test]
    fn test_matches_empty() {
        assert!(Regex::new(r"\b[0-9]*").unwrap().matches_empty());
        assert!(Regex::new("(?:ab)?").unwrap().matches_empty());
        assert!(!Regex::new("[0-9]+").unwrap().matches_empty());
        assert!(!Regex::new("a|bc").unwrap().matches_empty());
    }

    #[test]
    fn test_bundle_rules_never_match_empty() {
        let bundle = LanguageBundle::japanese();
        for def in bundle.base.iter().chain([&bundle.allow_listed, &bundle.aggressive]) {
            assert!(!def.compile().unwrap().matches_empty(), "{}", def.name);
        }
    }

    #[test]
    fn test_regex_matcher() {
        let regex = Regex::new("[0-9]+").unwrap();
        assert_eq!(regex.find_spans("ab12cd3"), vec![2..4, 6..7]);
        assert_eq!(PatternMatcher::key(&regex), "[0-9]+");
    }
}
