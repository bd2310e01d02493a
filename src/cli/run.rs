use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Action, Arguments},
    report,
};
use crate::{
    commands::{filestats, translate},
    config::{Config, load_config, load_config_file},
    core::{CommandTranslator, PoStats},
    diagnostics::StderrDiagnostics,
};

/// Dispatch the parsed arguments to the selected action.
pub fn run(args: Arguments) -> Result<()> {
    let config = resolve_config(&args)?;
    let mut diagnostics = StderrDiagnostics;

    match args.action {
        Action::Filestats => {
            let results = filestats(
                &args.template_folder,
                &args.localized_folder,
                &config,
                &PoStats,
                &mut diagnostics,
            )?;
            report::print_stats(&results)
        }
        Action::Translate => {
            let translator = CommandTranslator::from_words(&config.translator)?;
            translate(
                &args.template_folder,
                &args.localized_folder,
                &config,
                &PoStats,
                &translator,
                &mut diagnostics,
            )
        }
    }
}

/// Load the config file, then apply command-line overrides.
fn resolve_config(args: &Arguments) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            load_config(&cwd)?
        }
    };

    if let Some(words) = &args.translator {
        config.translator = words.iter().filter(|w| !w.is_empty()).cloned().collect();
        config.validate()?;
    }

    Ok(config)
}
