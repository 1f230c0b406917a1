//! Extraction output.

use serde::{Deserialize, Serialize};

use super::types::TypeTag;

/// A typed numeral span found in the input text.
///
/// Offsets are UTF-8 byte offsets into the text the result was extracted
/// from. Use [`ExtractionResult::char_span`] for character offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Length of the match in bytes.
    pub length: usize,
    /// Matched substring.
    pub text: String,
    /// Tag of the rule that produced the match.
    pub tag: TypeTag,
    /// Extraction domain of the rule table, e.g. `Integer`.
    pub domain: String,
}

impl ExtractionResult {
    /// Byte offset one past the last matched character.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Whether two results share any offset. Touching spans do not overlap.
    pub fn overlaps(&self, other: &ExtractionResult) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Start and end as character offsets into `source`.
    ///
    /// `source` must be the text this result was extracted from.
    pub fn char_span(&self, source: &str) -> (usize, usize) {
        let start = source[..self.start].chars().count();
        (start, start + self.text.chars().count())
    }
}
