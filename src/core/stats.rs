//! Per-catalog translation counts.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use rspolib::{POFile, pofile};
use serde::Serialize;

/// Counts of message states in one catalog.
///
/// Every message falls into exactly one bucket. Field order is the order the
/// report serializes them in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TranslationStats {
    pub translated: usize,
    pub fuzzy: usize,
    pub untranslated: usize,
}

impl TranslationStats {
    /// True when the catalog still has fuzzy or untranslated messages.
    pub fn needs_work(&self) -> bool {
        self.fuzzy > 0 || self.untranslated > 0
    }

    /// Count message states in a parsed catalog.
    ///
    /// Obsolete messages and the header are not counted. A fuzzy message
    /// counts as fuzzy whether or not it carries a msgstr.
    pub fn for_file(file: &POFile) -> Self {
        Self {
            translated: file.translated_entries().len(),
            fuzzy: file.fuzzy_entries().len(),
            untranslated: file.untranslated_entries().len(),
        }
    }
}

/// Source of translation counts for a catalog file.
pub trait StatsSource {
    fn stats(&self, path: &Path) -> Result<TranslationStats>;
}

/// Reads gettext PO/POT files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct PoStats;

impl StatsSource for PoStats {
    fn stats(&self, path: &Path) -> Result<TranslationStats> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file = pofile(content.as_str())
            .map_err(|e| anyhow!("Could not parse {}: {}", path.display(), e))?;
        Ok(TranslationStats::for_file(&file))
    }
}
