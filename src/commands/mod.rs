//! The two operations: `filestats` reports translation counts, `translate`
//! drives the external translator over incomplete catalogs.

pub mod filestats;
pub mod translate;

pub use filestats::{FileStats, filestats};
pub use translate::translate;
