//! Potrack - gettext translation progress tracker
//!
//! Potrack walks a tree of gettext templates (one directory per category),
//! matches each template against a localized tree, and either reports
//! per-file translation counts or runs an external translator over catalogs
//! that are missing or incomplete.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, dispatch, stdout report)
//! - `commands`: The `filestats` and `translate` operations
//! - `config`: Configuration file loading and validation
//! - `core`: Catalog discovery, path matching, stats and translator collaborators
//! - `diagnostics`: Progress notices routed away from stdout

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod diagnostics;
