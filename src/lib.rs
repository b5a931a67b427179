//! Name Cleaner - recursive file and folder name sanitizer
//!
//! This library renames every entry below a directory so that names only
//! contain ASCII letters, digits, underscores and (for files) single spaces.
//!
//! # Features
//!
//! - Ordered, individually testable normalization steps
//! - File extensions kept verbatim
//! - Collision handling with numeric suffixes (`name_1`, `name_2`, ...)
//! - Bottom-up traversal so folders are renamed after their contents
//! - Dry runs
//! - A fixture generator for trying it out
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use indicatif::ProgressBar;
//! use name_cleaner::{clean_tree, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let stats = clean_tree(Path::new("downloads"), &config, &ProgressBar::hidden())?;
//!     println!("{} renamed", stats.total_renamed());
//!     Ok(())
//! }
//! ```

pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixture;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use clean::{clean_tree, CleanStats};
pub use config::Config;
pub use error::{Error, Result};
pub use fs::{normalize, resolve_and_rename, EntryKind, Normalizer, RenameOutcome};
