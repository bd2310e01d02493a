//! Template discovery and matching against the localized tree.
//!
//! The template root holds one directory per category, each with template
//! catalogs as direct children:
//!
//! ```text
//! templates/            localized/
//!   menus/                menus/
//!     main.pot              main.po
//!     context.pot
//!   dialogs/
//!     about.pot
//! ```
//!
//! Only that single category level is scanned. Every template maps to a
//! localized path with the same relative location and the localized suffix;
//! a missing counterpart is a normal state, not an error.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern, glob_with};
use walkdir::WalkDir;

use super::paths::replace_suffix;
use crate::{
    config::Config,
    diagnostics::{Diagnostics, Notice},
};

/// A template catalog and the localized path it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path of the template as found on disk.
    pub template_path: PathBuf,
    /// Path relative to the template root, with the template suffix.
    pub relative_path: PathBuf,
    /// Where the localized counterpart lives (or would live).
    pub localized_path: PathBuf,
}

/// A template paired with the file its statistics are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Relative path shown in reports. Uses the localized suffix when the
    /// localized file exists, the template suffix otherwise.
    pub report_path: PathBuf,
    /// File to read statistics from.
    pub source_path: PathBuf,
    pub localized_exists: bool,
}

/// Enumerate non-excluded templates under `template_root`, in discovery order.
///
/// Categories are visited in file-name order and templates within a category
/// in sorted order. Excluded templates produce an [`Notice::Excluded`] and no
/// entry.
pub fn discover_templates(
    template_root: &Path,
    localized_root: &Path,
    config: &Config,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vec<TemplateFile>> {
    let mut templates = Vec::new();

    let categories = WalkDir::new(template_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in categories {
        let entry = entry.with_context(|| {
            format!("Failed to read template root: {}", template_root.display())
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let category = Path::new(entry.file_name());
        for file_name in templates_in(entry.path(), &config.template_suffix)? {
            // Built from names rather than by stripping the root: glob drops
            // a leading `./` from the paths it returns.
            let template_path = entry.path().join(&file_name);
            let relative_path = category.join(&file_name);

            if config.is_excluded(&relative_path.to_string_lossy()) {
                diagnostics.notice(Notice::Excluded {
                    path: template_path,
                });
                continue;
            }

            let localized_path = localized_root.join(replace_suffix(
                &relative_path,
                &config.template_suffix,
                &config.localized_suffix,
            )?);

            templates.push(TemplateFile {
                template_path,
                relative_path,
                localized_path,
            });
        }
    }

    Ok(templates)
}

/// Names of template files directly inside `dir` whose name ends with `suffix`.
fn templates_in(dir: &Path, suffix: &str) -> Result<Vec<OsString>> {
    let pattern = format!(
        "{}/*{}",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(suffix)
    );
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut names = Vec::new();
    for entry in glob_with(&pattern, options)
        .with_context(|| format!("Invalid template pattern: {}", pattern))?
    {
        let path = entry.with_context(|| format!("Cannot access path in {}", dir.display()))?;
        if let Some(name) = path.file_name().filter(|_| path.is_file()) {
            names.push(name.to_os_string());
        }
    }
    Ok(names)
}

/// Discover templates and decide, for each, which file to read statistics from.
pub fn resolve_files(
    template_root: &Path,
    localized_root: &Path,
    config: &Config,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vec<ResolvedFile>> {
    discover_templates(template_root, localized_root, config, diagnostics)?
        .into_iter()
        .map(|template| resolve_file(template, config))
        .collect()
}

fn resolve_file(template: TemplateFile, config: &Config) -> Result<ResolvedFile> {
    if template.localized_path.exists() {
        let report_path = replace_suffix(
            &template.relative_path,
            &config.template_suffix,
            &config.localized_suffix,
        )?;
        Ok(ResolvedFile {
            report_path,
            source_path: template.localized_path,
            localized_exists: true,
        })
    } else {
        Ok(ResolvedFile {
            report_path: template.relative_path,
            source_path: template.template_path,
            localized_exists: false,
        })
    }
}
