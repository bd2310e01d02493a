//! Stdout rendering of the stats report.
//!
//! Separate from the command so the library can be used without printing.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::commands::FileStats;

/// Print the report to stdout as pretty JSON.
pub fn print_stats(results: &[FileStats]) -> Result<()> {
    print_stats_to(results, &mut io::stdout().lock())
}

/// Print the report to a custom writer.
///
/// The output is a JSON array with 2-space indentation and a trailing newline.
pub fn print_stats_to<W: Write>(results: &[FileStats], writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(results).context("Failed to serialize report")?;
    writeln!(writer, "{}", json).context("Failed to write report")?;
    Ok(())
}
