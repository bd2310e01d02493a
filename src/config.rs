use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".potrackrc.json";

/// Substrings marking templates that belong to internal tooling or vendor
/// scaffolding. Matching files are never reported or translated.
pub const DEFAULT_EXCLUDE_MARKERS: &[&str] = &["_caligraph", "-dummy", "-anthropic"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_template_suffix")]
    pub template_suffix: String,
    #[serde(default = "default_localized_suffix")]
    pub localized_suffix: String,
    #[serde(default = "default_exclude_markers")]
    pub exclude_markers: Vec<String>,
    /// Program and leading arguments; the localized file path is appended.
    #[serde(default = "default_translator")]
    pub translator: Vec<String>,
}

fn default_template_suffix() -> String {
    ".pot".to_string()
}

fn default_localized_suffix() -> String {
    ".po".to_string()
}

fn default_exclude_markers() -> Vec<String> {
    DEFAULT_EXCLUDE_MARKERS.iter().map(|s| s.to_string()).collect()
}

fn default_translator() -> Vec<String> {
    ["bash", "translate-gettext.sh"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_suffix: default_template_suffix(),
            localized_suffix: default_localized_suffix(),
            exclude_markers: default_exclude_markers(),
            translator: default_translator(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Suffixes must look like extensions and differ from each other, and the
    /// translator command needs at least a program name.
    pub fn validate(&self) -> Result<()> {
        for (name, suffix) in [
            ("templateSuffix", &self.template_suffix),
            ("localizedSuffix", &self.localized_suffix),
        ] {
            if suffix.len() < 2 || !suffix.starts_with('.') {
                bail!("Invalid '{}': \"{}\" must start with '.'", name, suffix);
            }
        }

        if self.template_suffix == self.localized_suffix {
            bail!(
                "'templateSuffix' and 'localizedSuffix' must differ (both are \"{}\")",
                self.template_suffix
            );
        }

        if self.translator.first().is_none_or(|program| program.is_empty()) {
            bail!("'translator' must name a program");
        }

        Ok(())
    }

    /// Whether `path` contains any exclusion marker.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude_markers
            .iter()
            .any(|marker| path.contains(marker.as_str()))
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load and validate a config file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Search upward from `start_dir` for a config file, falling back to defaults.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}
