//! Reusable extractor handle.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::definitions::{japanese, LanguageBundle};
use crate::error::ConfigError;
use crate::models::{ExtractionResult, Mode};
use crate::rules::{build_rule_table, RuleTable};

use super::Extractor;

/// Numeral extractor over a shared rule table.
///
/// Cloning is cheap; clones share the same table.
#[derive(Debug, Clone)]
pub struct NumberExtractor {
    table: Arc<RuleTable>,
}

impl NumberExtractor {
    /// Japanese extractor for `mode`, backed by the cached built-in table.
    pub fn new(mode: Mode) -> Result<Self, ConfigError> {
        Ok(Self {
            table: japanese::rule_table(mode)?,
        })
    }

    /// Build a fresh table from a definition bundle.
    pub fn from_bundle(mode: Mode, bundle: &LanguageBundle) -> Result<Self, ConfigError> {
        Ok(Self {
            table: Arc::new(build_rule_table(mode, bundle)?),
        })
    }

    /// Wrap an already built table.
    pub fn from_table(table: Arc<RuleTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Arc<RuleTable> {
        &self.table
    }

    /// Extract from many texts on up to `jobs` threads.
    ///
    /// `jobs == 0` uses the available parallelism. Results are returned in
    /// input order.
    pub fn extract_batch<S>(&self, texts: &[S], jobs: usize) -> Vec<Vec<ExtractionResult>>
    where
        S: AsRef<str> + Sync,
    {
        if texts.is_empty() {
            return Vec::new();
        }

        let jobs = match jobs {
            0 => thread::available_parallelism().map_or(1, NonZeroUsize::get),
            n => n,
        };
        let chunk_size = texts.len().div_ceil(jobs);
        debug!(
            "Extracting {} texts with {} workers",
            texts.len(),
            texts.len().div_ceil(chunk_size)
        );

        let table = self.table.as_ref();
        thread::scope(|scope| {
            let handles: Vec<_> = texts
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|text| super::extract(table, text.as_ref()))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(results) => results,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}

impl Extractor for NumberExtractor {
    fn extract(&self, text: &str) -> Vec<ExtractionResult> {
        super::extract(&self.table, text)
    }
}
