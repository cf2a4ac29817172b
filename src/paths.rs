//! Path display and extension helpers.
//!
//! The facade reports document paths in a display form with forward-slash
//! separators regardless of platform, and classifies files by extension
//! without caring about case.

use std::ffi::OsStr;
use std::path::Path;

/// Render a path with forward-slash separators.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Whether `path` has the given extension, compared ASCII-case-insensitively.
///
/// `ext` is given without the leading dot.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|found| found.eq_ignore_ascii_case(ext))
}
