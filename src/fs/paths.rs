//! Path helpers.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Split a name into its stem and extension (without the dot), using the
/// [`Path::extension`] rule: no extension when the name has no dot or its only
/// dot is the first character. Bytes are never reinterpreted.
pub fn split_extension(name: &OsStr) -> (&OsStr, Option<&OsStr>) {
    let path = Path::new(name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => (stem, Some(ext)),
        _ => (name, None),
    }
}

/// Strip a trailing `_<digits>` suffix, as left by a previous collision.
pub fn strip_counter_suffix(base: &str) -> &str {
    let digits = base.len() - base.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return base;
    }
    let head = &base[..base.len() - digits];
    head.strip_suffix('_').unwrap_or(base)
}

/// Whether anything occupies `path`, including a dangling symlink.
pub fn entry_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Check the root directory of a run.
pub fn validate_root_directory(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() || !path.is_dir() {
        return Err(Error::InvalidDirectory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

/// File name of `path` as text, lossy for non UTF-8 names.
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
