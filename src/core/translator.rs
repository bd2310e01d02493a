//! External translator invocation.

use std::{path::Path, process::Command};

use anyhow::{Context, Result, bail};

/// Captured output of one translator run.
///
/// Exit status is not recorded; success is judged from the logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Something that translates a localized catalog in place.
pub trait Translator {
    fn translate(&self, path: &Path) -> Result<TranslatorOutput>;
}

/// Runs an external program with the catalog path as its last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTranslator {
    program: String,
    args: Vec<String>,
}

impl CommandTranslator {
    /// Build from a command line split into words: program first, then
    /// leading arguments.
    pub fn from_words(words: &[String]) -> Result<Self> {
        let Some((program, args)) = words.split_first() else {
            bail!("Translator command is empty");
        };
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl Translator for CommandTranslator {
    fn translate(&self, path: &Path) -> Result<TranslatorOutput> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .with_context(|| format!("Failed to run translator '{}'", self.program))?;

        Ok(TranslatorOutput {
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
