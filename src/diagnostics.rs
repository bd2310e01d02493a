//! Human-readable progress notices.
//!
//! Notices never go to stdout, which is reserved for the structured report.
//! Operations take a `&mut dyn Diagnostics` so callers decide where notices
//! end up: the CLI prints them to stderr, tests collect them into a `Vec`.

use std::{
    fmt,
    io::{self, Write},
    path::PathBuf,
};

use colored::Colorize;

/// A single progress or skip notice emitted while processing catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Template matched an exclusion marker and was dropped.
    Excluded { path: PathBuf },
    /// Localized catalog was missing and has been created from its template.
    CreatedFromTemplate { path: PathBuf },
    /// Localized catalog has no fuzzy or untranslated entries.
    UpToDate { path: PathBuf },
    /// Translator is about to run; its stdout goes to `log`.
    Translating { path: PathBuf, log: PathBuf },
}

impl Notice {
    fn label(&self) -> &'static str {
        match self {
            Notice::Excluded { .. } | Notice::UpToDate { .. } => "skip:",
            Notice::CreatedFromTemplate { .. } => "create:",
            Notice::Translating { .. } => "translate:",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Excluded { path } => {
                write!(f, "{} is an internal file, ignoring", path.display())
            }
            Notice::CreatedFromTemplate { path } => write!(
                f,
                "{} does not exist, copied it from template for translation",
                path.display()
            ),
            Notice::UpToDate { path } => {
                write!(f, "{} does not need further translating", path.display())
            }
            Notice::Translating { path, log } => write!(
                f,
                "translating {} and writing log to {}",
                path.display(),
                log.display()
            ),
        }
    }
}

/// Sink for notices.
pub trait Diagnostics {
    fn notice(&mut self, notice: Notice);
}

/// Collects notices in memory.
impl Diagnostics for Vec<Notice> {
    fn notice(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Writes notices to stderr, one per line, with a colored label.
#[derive(Debug, Default)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn notice(&mut self, notice: Notice) {
        write_notice_to(&notice, &mut io::stderr().lock());
    }
}

/// Write a notice to a custom writer.
pub fn write_notice_to<W: Write>(notice: &Notice, writer: &mut W) {
    let label = match notice {
        Notice::Excluded { .. } | Notice::UpToDate { .. } => notice.label().dimmed(),
        Notice::CreatedFromTemplate { .. } => notice.label().bold().yellow(),
        Notice::Translating { .. } => notice.label().bold().cyan(),
    };
    let _ = writeln!(writer, "{} {}", label, notice);
}
