use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::{
    config::Config,
    core::{StatsSource, TemplateFile, Translator, discover_templates, replace_suffix},
    diagnostics::{Diagnostics, Notice},
};

const STDOUT_LOG_SUFFIX: &str = ".log";
const STDERR_LOG_SUFFIX: &str = ".err";

/// Run the translator over every localized catalog that is missing or
/// incomplete.
///
/// Files are handled one at a time in discovery order:
///
/// 1. A missing localized file is created as a verbatim copy of its template.
/// 2. An existing file is translated only if it has fuzzy or untranslated
///    messages.
/// 3. Translator stdout and stderr are written next to the catalog as
///    `.log` and `.err`, whatever the translator's exit status.
pub fn translate(
    template_root: &Path,
    localized_root: &Path,
    config: &Config,
    stats_source: &dyn StatsSource,
    translator: &dyn Translator,
    diagnostics: &mut dyn Diagnostics,
) -> Result<()> {
    for template in discover_templates(template_root, localized_root, config, diagnostics)? {
        if !needs_translation(&template, stats_source, diagnostics)? {
            diagnostics.notice(Notice::UpToDate {
                path: template.localized_path,
            });
            continue;
        }

        run_translator(&template.localized_path, config, translator, diagnostics)?;
    }

    Ok(())
}

/// Decide whether a catalog needs the translator, creating it from the
/// template when it does not exist yet.
fn needs_translation(
    template: &TemplateFile,
    stats_source: &dyn StatsSource,
    diagnostics: &mut dyn Diagnostics,
) -> Result<bool> {
    let localized = &template.localized_path;

    if !localized.exists() {
        create_from_template(&template.template_path, localized)?;
        diagnostics.notice(Notice::CreatedFromTemplate {
            path: localized.clone(),
        });
        return Ok(true);
    }

    Ok(stats_source.stats(localized)?.needs_work())
}

fn create_from_template(template: &Path, localized: &Path) -> Result<()> {
    // Only the category directory is created; a missing localized root fails here.
    if let Some(category) = localized.parent().filter(|dir| !dir.exists()) {
        fs::create_dir(category)
            .with_context(|| format!("Failed to create directory: {}", category.display()))?;
    }

    fs::copy(template, localized).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            template.display(),
            localized.display()
        )
    })?;
    Ok(())
}

fn run_translator(
    localized: &Path,
    config: &Config,
    translator: &dyn Translator,
    diagnostics: &mut dyn Diagnostics,
) -> Result<()> {
    let log_path = replace_suffix(localized, &config.localized_suffix, STDOUT_LOG_SUFFIX)?;
    let err_path = replace_suffix(localized, &config.localized_suffix, STDERR_LOG_SUFFIX)?;

    diagnostics.notice(Notice::Translating {
        path: localized.to_path_buf(),
        log: log_path.clone(),
    });

    let output = translator.translate(localized)?;

    fs::write(&log_path, &output.stdout)
        .with_context(|| format!("Failed to write log: {}", log_path.display()))?;
    fs::write(&err_path, &output.stderr)
        .with_context(|| format!("Failed to write log: {}", err_path.display()))?;
    Ok(())
}
