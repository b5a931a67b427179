//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Run summary

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{
    print_banner, print_error, print_info, print_rename, print_run_warning, print_skipped,
    print_success, print_warning, tagged, Level,
};
pub use progress::{create_item_bar, create_spinner};
pub use stats::print_summary;
