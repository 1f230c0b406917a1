//! Regex patterns with negative context guards.

use std::ops::Range;

use regex::Regex;

use super::{min_len_is_zero, PatternMatcher};

/// A compiled lexical rule.
///
/// The `regex` crate has no lookaround, so a pattern carries two optional
/// guards instead. `not_preceded_by` is tested against the text ending at the
/// match start, `not_followed_by` against the text starting at the match end.
/// A match is dropped when either guard matches. Guards are written unanchored;
/// anchoring is added at compile time.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    not_preceded_by: Option<Guard>,
    not_followed_by: Option<Guard>,
}

#[derive(Debug, Clone)]
struct Guard {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern without guards.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            not_preceded_by: None,
            not_followed_by: None,
        })
    }

    /// Compile a pattern with optional guards.
    pub fn with_guards(
        pattern: &str,
        not_preceded_by: Option<&str>,
        not_followed_by: Option<&str>,
    ) -> Result<Self, regex::Error> {
        let mut compiled = Self::new(pattern)?;
        compiled.not_preceded_by = not_preceded_by
            .map(|g| Guard::new(g, format!("(?:{})$", g)))
            .transpose()?;
        compiled.not_followed_by = not_followed_by
            .map(|g| Guard::new(g, format!("^(?:{})", g)))
            .transpose()?;
        Ok(compiled)
    }

    /// Source of the main expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn accepts(&self, text: &str, span: &Range<usize>) -> bool {
        if let Some(guard) = &self.not_preceded_by {
            if guard.regex.is_match(&text[..span.start]) {
                return false;
            }
        }
        if let Some(guard) = &self.not_followed_by {
            if guard.regex.is_match(&text[span.end..]) {
                return false;
            }
        }
        true
    }
}

impl Guard {
    fn new(source: &str, anchored: String) -> Result<Self, regex::Error> {
        Ok(Self {
            source: source.to_string(),
            regex: Regex::new(&anchored)?,
        })
    }
}

impl PatternMatcher for Pattern {
    fn key(&self) -> String {
        let mut key = self.regex.as_str().to_string();
        if let Some(guard) = &self.not_preceded_by {
            key.push_str(" !<");
            key.push_str(&guard.source);
        }
        if let Some(guard) = &self.not_followed_by {
            key.push_str(" !>");
            key.push_str(&guard.source);
        }
        key
    }

    // Guards only reject matches, so they never make an empty one possible.
    fn matches_empty(&self) -> bool {
        self.regex.matches_empty()
    }

    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.regex
            .find_iter(text)
            .map(|m| m.range())
            .filter(|span| self.accepts(text, span))
            .collect()
    }
}
