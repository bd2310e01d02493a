//! Suffix manipulation for catalog paths.
//!
//! Template and localized catalogs share a relative path and differ only in
//! their extension (`cat/app.pot` vs `cat/app.po`). Swapping the extension is
//! an explicit, checked operation: a path that does not end with the expected
//! suffix is rejected instead of being truncated.

use std::{
    error::Error,
    fmt,
    path::{Path, PathBuf},
};

/// A path did not end with the suffix it was expected to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPathError {
    pub path: PathBuf,
    pub expected_suffix: String,
}

impl fmt::Display for InvalidPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path {} does not end with \"{}\"",
            self.path.display(),
            self.expected_suffix
        )
    }
}

impl Error for InvalidPathError {}

/// Replace the trailing `from` suffix of `path` with `to`.
///
/// The suffix is matched on the final path component only, so
/// `cat/app.pot` with `.pot` -> `.po` becomes `cat/app.po`. A path whose file
/// name is exactly the suffix (e.g. `cat/.pot`) is also rejected, since
/// stripping it would leave no file name behind.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use potrack::core::paths::replace_suffix;
///
/// let po = replace_suffix(Path::new("ui/menu.pot"), ".pot", ".po").unwrap();
/// assert_eq!(po, PathBuf::from("ui/menu.po"));
/// assert!(replace_suffix(Path::new("ui/menu.txt"), ".pot", ".po").is_err());
/// ```
pub fn replace_suffix(path: &Path, from: &str, to: &str) -> Result<PathBuf, InvalidPathError> {
    let invalid = || InvalidPathError {
        path: path.to_path_buf(),
        expected_suffix: from.to_string(),
    };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(invalid)?;
    let stem = file_name
        .strip_suffix(from)
        .filter(|stem| !stem.is_empty())
        .ok_or_else(invalid)?;

    Ok(path.with_file_name(format!("{stem}{to}")))
}
