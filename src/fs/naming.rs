//! Name normalization.
//!
//! A raw file or folder name is cleaned by running it through a fixed, ordered
//! list of [`Step`]s. The order matters: later steps assume the shape left by
//! earlier ones, and reordering them breaks idempotence.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fs::paths::split_extension;
use crate::fs::rename::EntryKind;

/// Fallback used when a name has nothing left after cleaning.
pub const DEFAULT_SENTINEL: &str = "unnamed";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPECIAL_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").unwrap());
static SPACED_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*_\s*").unwrap());
static UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").unwrap());

/// One stage of the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Collapse every whitespace run into a single ASCII space.
    CollapseWhitespace,
    /// Replace anything that is not an ASCII letter, digit or whitespace with `_`.
    ReplaceSpecial,
    /// Drop whitespace touching an underscore.
    AbsorbSpacesAroundUnderscores,
    /// Turn remaining spaces into underscores. Skipped when spaces are preserved.
    SpacesToUnderscores,
    /// Collapse underscore runs into one underscore.
    CollapseUnderscores,
    /// Strip leading and trailing underscores and spaces.
    TrimEdges,
}

impl Step {
    /// Pipeline order.
    pub const ORDER: [Step; 6] = [
        Step::CollapseWhitespace,
        Step::ReplaceSpecial,
        Step::AbsorbSpacesAroundUnderscores,
        Step::SpacesToUnderscores,
        Step::CollapseUnderscores,
        Step::TrimEdges,
    ];

    /// Apply this step on its own.
    pub fn apply(self, input: &str) -> Cow<'_, str> {
        match self {
            Step::CollapseWhitespace => WHITESPACE_RUN.replace_all(input, " "),
            Step::ReplaceSpecial => SPECIAL_CHAR.replace_all(input, "_"),
            Step::AbsorbSpacesAroundUnderscores => SPACED_UNDERSCORE.replace_all(input, "_"),
            Step::SpacesToUnderscores => {
                if input.contains(' ') {
                    Cow::Owned(input.replace(' ', "_"))
                } else {
                    Cow::Borrowed(input)
                }
            }
            Step::CollapseUnderscores => UNDERSCORE_RUN.replace_all(input, "_"),
            Step::TrimEdges => Cow::Borrowed(input.trim_matches(|c: char| c == '_' || c == ' ')),
        }
    }

    fn enabled(self, preserve_spaces: bool) -> bool {
        !(preserve_spaces && self == Step::SpacesToUnderscores)
    }
}

/// Name normalizer with a configurable sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    sentinel: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL)
    }
}

impl Normalizer {
    /// Create a normalizer that falls back to `sentinel` for empty results.
    ///
    /// The sentinel is used verbatim; callers are expected to validate it
    /// (see [`crate::config::validate_sentinel`]).
    pub fn new(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
        }
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Clean a bare name (no extension handling).
    pub fn normalize(&self, name: &str, preserve_spaces: bool) -> String {
        let mut clean = name.to_string();
        for step in Step::ORDER.into_iter().filter(|s| s.enabled(preserve_spaces)) {
            clean = step.apply(&clean).into_owned();
        }

        if clean.is_empty() {
            self.sentinel.clone()
        } else {
            clean
        }
    }

    /// Clean a file name, keeping spaces and the original extension.
    pub fn normalize_file(&self, filename: &str) -> String {
        self.normalize_file_os(OsStr::new(filename))
            .to_string_lossy()
            .into_owned()
    }

    /// Clean a raw file name. Only the stem is cleaned; the extension bytes are
    /// copied over as they are, even when they are not valid UTF-8.
    pub fn normalize_file_os(&self, filename: &OsStr) -> OsString {
        let (stem, ext) = split_extension(filename);
        let mut clean = OsString::from(self.normalize(&stem.to_string_lossy(), true));
        if let Some(ext) = ext {
            clean.push(".");
            clean.push(ext);
        }
        clean
    }

    /// Clean a raw directory entry name according to its kind.
    pub fn normalize_entry(&self, name: &OsStr, kind: EntryKind) -> OsString {
        match kind {
            EntryKind::File => self.normalize_file_os(name),
            EntryKind::Folder => OsString::from(self.normalize_folder(&name.to_string_lossy())),
        }
    }

    /// Clean a folder name. Spaces become underscores.
    pub fn normalize_folder(&self, name: &str) -> String {
        self.normalize(name, false)
    }
}

/// Clean `name` with the default sentinel.
pub fn normalize(name: &str, preserve_spaces: bool) -> String {
    Normalizer::default().normalize(name, preserve_spaces)
}

/// Clean a file name with the default sentinel.
pub fn normalize_file(filename: &str) -> String {
    Normalizer::default().normalize_file(filename)
}

/// Clean a folder name with the default sentinel.
pub fn normalize_folder(name: &str) -> String {
    Normalizer::default().normalize_folder(name)
}
