//! Configuration structures for the extraction pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::definitions::{japanese, LanguageBundle};
use crate::engine::NumberExtractor;
use crate::error::Result;
use crate::rules::build_rule_table;

use super::types::{Language, Mode};

/// Main configuration for kazu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KazuConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Rule table selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extraction strictness.
    pub mode: Mode,

    /// Language of the built-in definition bundle.
    pub language: Language,

    /// Custom definition bundle (JSON). Overrides `language` when set.
    pub bundle_path: Option<PathBuf>,
}

/// Output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format name (`json`, `csv` or `text`).
    pub format: String,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: true,
        }
    }
}

impl KazuConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create an extractor for the configured language, bundle and mode.
    pub fn extractor(&self) -> Result<NumberExtractor> {
        let mode = self.extraction.mode;
        match &self.extraction.bundle_path {
            Some(path) => {
                let bundle = LanguageBundle::from_file(path)?;
                let table = build_rule_table(mode, &bundle)?;
                Ok(NumberExtractor::from_table(Arc::new(table)))
            }
            None => match self.extraction.language {
                Language::Japanese => Ok(NumberExtractor::from_table(japanese::rule_table(mode)?)),
            },
        }
    }
}
