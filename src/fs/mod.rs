//! Filesystem module.
//!
//! Provides:
//! - Name normalization
//! - Collision-safe renaming
//! - Path helpers

pub mod naming;
pub mod paths;
pub mod rename;

pub use naming::{normalize, normalize_file, normalize_folder, Normalizer, Step, DEFAULT_SENTINEL};
pub use paths::{
    entry_exists, file_name_lossy, split_extension, strip_counter_suffix, validate_root_directory,
};
pub use rename::{resolve_and_rename, resolve_candidate, EntryKind, RenameOutcome};
