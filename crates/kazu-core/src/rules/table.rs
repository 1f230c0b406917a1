//! Immutable rule table and its builder.

use std::collections::HashSet;

use crate::definitions::RuleDef;
use crate::error::ConfigError;
use crate::models::TypeTag;

use super::PatternMatcher;

/// One pattern and the tag its matches receive.
#[derive(Debug)]
pub struct RuleEntry {
    name: String,
    tag: TypeTag,
    matcher: Box<dyn PatternMatcher>,
}

impl RuleEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &TypeTag {
        &self.tag
    }

    pub fn matcher(&self) -> &dyn PatternMatcher {
        self.matcher.as_ref()
    }
}

/// Ordered pattern → tag mapping for one (language, mode) pair.
///
/// Insertion order is evaluation priority. A table cannot be changed after
/// [`RuleTableBuilder::build`], so one instance can be shared across threads
/// behind an `Arc`.
#[derive(Debug)]
pub struct RuleTable {
    domain: String,
    entries: Vec<RuleEntry>,
}

impl RuleTable {
    /// Start a table whose results carry the extraction-domain label `domain`.
    pub fn builder(domain: impl Into<String>) -> RuleTableBuilder {
        RuleTableBuilder {
            domain: domain.into(),
            entries: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// Extraction-domain label, e.g. `Integer`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by rule name.
    pub fn rule(&self, name: &str) -> Option<&RuleEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Whether a pattern with this key is registered.
    pub fn contains_pattern(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.matcher.key() == key)
    }
}

/// Collects entries for a [`RuleTable`], validating each on insertion.
#[derive(Debug)]
pub struct RuleTableBuilder {
    domain: String,
    entries: Vec<RuleEntry>,
    keys: HashSet<String>,
}

impl RuleTableBuilder {
    /// Append a rule.
    ///
    /// Fails when the matcher's pattern is already registered or when it
    /// can produce a zero-length match.
    pub fn insert<M>(
        &mut self,
        name: impl Into<String>,
        matcher: M,
        tag: TypeTag,
    ) -> Result<&mut Self, ConfigError>
    where
        M: PatternMatcher + 'static,
    {
        let name = name.into();

        if matcher.matches_empty() {
            return Err(ConfigError::EmptyMatch { rule: name });
        }

        let key = matcher.key();
        if !self.keys.insert(key.clone()) {
            return Err(ConfigError::DuplicatePattern {
                rule: name,
                pattern: key,
            });
        }

        self.entries.push(RuleEntry {
            name,
            tag,
            matcher: Box::new(matcher),
        });
        Ok(self)
    }

    /// Compile a bundle rule definition and append it.
    pub fn insert_def(&mut self, def: &RuleDef) -> Result<&mut Self, ConfigError> {
        let pattern = def.compile()?;
        self.insert(def.name.clone(), pattern, def.tag.clone())
    }

    pub fn build(self) -> RuleTable {
        RuleTable {
            domain: self.domain,
            entries: self.entries,
        }
    }
}
