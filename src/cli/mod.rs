//! Command-line interface.

pub mod args;
pub mod prompt;

pub use args::Args;
pub use prompt::{is_confirmation, read_confirmation, read_directory};
