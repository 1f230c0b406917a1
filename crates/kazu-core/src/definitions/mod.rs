//! Language definition bundles.
//!
//! A bundle is plain data: the extraction-domain label and the pattern
//! strings for every rule. The engine never interprets their content.

pub mod japanese;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::models::TypeTag;
use crate::rules::Pattern;

/// Source form of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDef {
    /// Rule name, used in diagnostics and `kazu rules`.
    pub name: String,
    /// Main regular expression.
    pub pattern: String,
    /// Drop matches whose preceding text ends with this expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_preceded_by: Option<String>,
    /// Drop matches whose following text starts with this expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_followed_by: Option<String>,
    /// Tag given to matches of this rule.
    pub tag: TypeTag,
}

impl RuleDef {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            not_preceded_by: None,
            not_followed_by: None,
            tag,
        }
    }

    pub fn not_preceded_by(mut self, guard: impl Into<String>) -> Self {
        self.not_preceded_by = Some(guard.into());
        self
    }

    pub fn not_followed_by(mut self, guard: impl Into<String>) -> Self {
        self.not_followed_by = Some(guard.into());
        self
    }

    /// Compile into a [`Pattern`].
    pub fn compile(&self) -> std::result::Result<Pattern, ConfigError> {
        Pattern::with_guards(
            &self.pattern,
            self.not_preceded_by.as_deref(),
            self.not_followed_by.as_deref(),
        )
        .map_err(|source| ConfigError::InvalidPattern {
            rule: self.name.clone(),
            source,
        })
    }
}

/// Everything needed to build the rule tables of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageBundle {
    /// Language code, e.g. `ja-JP`.
    pub language: String,
    /// Extraction-domain label attached to every result, e.g. `Integer`.
    pub domain: String,
    /// Rules present in every mode, in priority order.
    pub base: Vec<RuleDef>,
    /// Native-numeral rule for [`Mode::Default`](crate::models::Mode::Default).
    pub allow_listed: RuleDef,
    /// Native-numeral rule for [`Mode::ExtractAll`](crate::models::Mode::ExtractAll).
    pub aggressive: RuleDef,
}

impl LanguageBundle {
    /// Built-in Japanese integer definitions.
    pub fn japanese() -> Self {
        japanese::bundle()
    }

    /// Load a bundle from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the bundle as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
