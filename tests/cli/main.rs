use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod translate;

const BIN_NAME: &str = "potrack";

pub const LOCALIZED_DIR: &str = "l10n/de";
pub const TEMPLATE_DIR: &str = "templates";

pub const PO_HEADER: &str = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

"#;

/// Build a catalog body from `(msgid, msgstr, fuzzy)` triples.
pub fn catalog(entries: &[(&str, &str, bool)]) -> String {
    let mut out = PO_HEADER.to_string();
    for (msgid, msgstr, fuzzy) in entries {
        if *fuzzy {
            out.push_str("#, fuzzy\n");
        }
        out.push_str(&format!("msgid \"{msgid}\"\nmsgstr \"{msgstr}\"\n\n"));
    }
    out
}

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keeps config lookup from walking out of the fixture.
        fs::create_dir(project_dir.join(".git"))?;
        fs::create_dir_all(project_dir.join(LOCALIZED_DIR))?;
        fs::create_dir_all(project_dir.join(TEMPLATE_DIR))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_template(&self, rel: &str, content: &str) -> Result<()> {
        self.write_file(&format!("{TEMPLATE_DIR}/{rel}"), content)
    }

    pub fn write_localized(&self, rel: &str, content: &str) -> Result<()> {
        self.write_file(&format!("{LOCALIZED_DIR}/{rel}"), content)
    }

    /// Write a translator script that echoes its argument, complains on
    /// stderr and exits non-zero.
    pub fn write_translator(&self) -> Result<String> {
        self.write_file(
            "translate.sh",
            "echo \"translating $1\"\necho \"model unavailable\" >&2\nexit 1\n",
        )?;
        Ok(format!("/bin/sh {}", self.root().join("translate.sh").display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn filestats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.args(["--action", "filestats", LOCALIZED_DIR, TEMPLATE_DIR]);
        cmd
    }

    pub fn translate_command(&self, translator: &str) -> Command {
        let mut cmd = self.command();
        cmd.args([
            "--action",
            "translate",
            "--translator",
            translator,
            LOCALIZED_DIR,
            TEMPLATE_DIR,
        ]);
        cmd
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
