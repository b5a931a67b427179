//! Collision-safe renaming.
//!
//! The search for a free name and the rename itself are two separate filesystem
//! calls. Another process can create the chosen target in between; the rename
//! then either fails (reported as [`Error::Rename`]) or, where the platform's
//! rename replaces existing entries, overwrites it. This window is not closed.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::paths::{entry_exists, split_extension, strip_counter_suffix};

/// What kind of entry is being renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Folder => "folder",
        }
    }
}

/// Result of a successful rename attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The desired name is already the current name; nothing was touched.
    Unchanged(PathBuf),
    /// The entry now lives at this path.
    Renamed(PathBuf),
}

impl RenameOutcome {
    pub fn path(&self) -> &Path {
        match self {
            RenameOutcome::Unchanged(path) | RenameOutcome::Renamed(path) => path,
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, RenameOutcome::Renamed(_))
    }
}

/// Build the name for collision attempt `counter`.
///
/// Any `_<digits>` already ending the base name is dropped first, so repeated
/// collisions yield `name_2` rather than `name_1_2`. A file's extension bytes
/// are carried over untouched.
pub fn suffixed_name(desired_name: impl AsRef<OsStr>, counter: u32, kind: EntryKind) -> OsString {
    let desired_name = desired_name.as_ref();
    match kind {
        EntryKind::File => {
            let (stem, ext) = split_extension(desired_name);
            let stem = stem.to_string_lossy();
            let mut name = OsString::from(format!("{}_{}", strip_counter_suffix(&stem), counter));
            if let Some(ext) = ext {
                name.push(".");
                name.push(ext);
            }
            name
        }
        EntryKind::Folder => {
            let base = desired_name.to_string_lossy();
            OsString::from(format!("{}_{}", strip_counter_suffix(&base), counter))
        }
    }
}

/// Find a path in the parent of `original` named `desired_name` that is not taken.
///
/// Returns `None` when `desired_name` is already the name of `original`.
/// `is_taken` decides whether a candidate collides; real runs pass
/// [`entry_exists`], which also sees dangling symlinks.
pub fn resolve_candidate<F>(
    original: &Path,
    desired_name: impl AsRef<OsStr>,
    kind: EntryKind,
    mut is_taken: F,
) -> Option<PathBuf>
where
    F: FnMut(&Path) -> bool,
{
    let desired_name = desired_name.as_ref();
    let directory = original.parent().unwrap_or(Path::new("."));
    let mut candidate = directory.join(desired_name);

    if candidate == original {
        return None;
    }

    let mut counter = 1;
    while is_taken(&candidate) {
        tracing::debug!("{} is taken", candidate.display());
        candidate = directory.join(suffixed_name(desired_name, counter, kind));
        counter += 1;
    }

    Some(candidate)
}

/// Rename `original` to `desired_name` in the same directory, adding a numeric
/// suffix if that name is already taken.
pub fn resolve_and_rename(
    original: &Path,
    desired_name: impl AsRef<OsStr>,
    kind: EntryKind,
) -> Result<RenameOutcome> {
    let Some(target) = resolve_candidate(original, desired_name, kind, entry_exists) else {
        return Ok(RenameOutcome::Unchanged(original.to_path_buf()));
    };

    std::fs::rename(original, &target).map_err(|source| Error::Rename {
        path: original.to_path_buf(),
        source,
    })?;

    Ok(RenameOutcome::Renamed(target))
}
