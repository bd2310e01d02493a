//! CLI argument definitions using clap.
//!
//! ```text
//! potrack --action <filestats|translate> [OPTIONS] <LOCALIZED_FOLDER> <TEMPLATE_FOLDER>
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Action to perform
    #[arg(long, value_enum)]
    pub action: Action,

    /// Config file (default: search for .potrackrc.json from the current directory upward)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Translator command, program first, words separated by spaces (overrides config file).
    /// The localized file path is appended as the last argument. Words cannot contain
    /// spaces here; use the `translator` array in the config file for such paths.
    #[arg(long, env = "POTRACK_TRANSLATOR", value_delimiter = ' ')]
    pub translator: Option<Vec<String>>,

    /// Path to the localized folder to process
    pub localized_folder: PathBuf,

    /// Path to the template folder to process
    pub template_folder: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Action {
    /// Print per-file translation counts as JSON
    Filestats,
    /// Create missing catalogs and run the translator on incomplete ones
    Translate,
}
