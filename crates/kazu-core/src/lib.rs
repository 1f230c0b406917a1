//! Core library for Japanese numeral extraction.
//!
//! This crate provides:
//! - Language definition bundles (built-in Japanese, or loaded from JSON)
//! - Rule tables built per extraction mode
//! - The extraction engine that turns a rule table and a text into typed,
//!   non-overlapping numeral spans
//!
//! ```
//! use kazu_core::{Extractor, Mode, NumberExtractor};
//!
//! let extractor = NumberExtractor::new(Mode::Default).unwrap();
//! let results = extractor.extract("りんごを三個と15k");
//! assert_eq!(results.len(), 2);
//! ```

pub mod definitions;
pub mod engine;
pub mod error;
pub mod models;
pub mod rules;

pub use definitions::{LanguageBundle, RuleDef};
pub use engine::{extract, Extractor, NumberExtractor};
pub use error::{ConfigError, KazuError, Result};
pub use models::{ExtractionResult, KazuConfig, Language, Mode, TypeTag};
pub use rules::{build_rule_table, Pattern, PatternMatcher, RuleEntry, RuleTable, RuleTableBuilder};
