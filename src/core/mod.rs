//! Catalog discovery and the collaborators the commands are built on.
//!
//! ## Module Structure
//!
//! - `paths`: Checked suffix replacement for catalog paths
//! - `resolve`: Template discovery and template-to-localized matching
//! - `stats`: Translation counts and the PO-backed stats source
//! - `translator`: External translator invocation

pub mod paths;
pub mod resolve;
pub mod stats;
pub mod translator;

pub use paths::{InvalidPathError, replace_suffix};
pub use resolve::{ResolvedFile, TemplateFile, discover_templates, resolve_files};
pub use stats::{PoStats, StatsSource, TranslationStats};
pub use translator::{CommandTranslator, Translator, TranslatorOutput};
