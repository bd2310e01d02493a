use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::{
    config::Config,
    core::{StatsSource, TranslationStats, resolve_files},
    diagnostics::Diagnostics,
};

/// One line of the stats report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub file: String,
    pub stats: TranslationStats,
}

/// Collect translation counts for every non-excluded template, sorted by
/// report path.
///
/// Counts come from the localized file when it exists and from the template
/// itself otherwise. Nothing is written.
pub fn filestats(
    template_root: &Path,
    localized_root: &Path,
    config: &Config,
    stats_source: &dyn StatsSource,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vec<FileStats>> {
    let mut results = resolve_files(template_root, localized_root, config, diagnostics)?
        .into_iter()
        .map(|resolved| {
            Ok(FileStats {
                file: resolved.report_path.to_string_lossy().into_owned(),
                stats: stats_source.stats(&resolved.source_path)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    results.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(results)
}
