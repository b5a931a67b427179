//! Tree cleaning.
//!
//! This module provides:
//! - The bottom-up tree walker
//! - Per-run statistics

pub mod stats;
pub mod walker;

pub use stats::CleanStats;
pub use walker::clean_tree;
