//! Console output utilities.

use std::fmt::Display;
use std::path::Path;

use console::style;

use crate::fs::{file_name_lossy, EntryKind};

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "info:",
            Level::Success => "done:",
            Level::Warning => "warning:",
            Level::Error => "error:",
        }
    }
}

/// Format a status line, with the tag colored when the terminal allows it.
pub fn tagged(level: Level, message: impl Display) -> String {
    let tag = style(level.tag()).bold();
    let tag = match level {
        Level::Info => tag.cyan(),
        Level::Success => tag.green(),
        Level::Warning => tag.yellow(),
        Level::Error => tag.red(),
    };
    format!("{} {}", tag, message)
}

pub fn print_info(message: impl Display) {
    println!("{}", tagged(Level::Info, message));
}

pub fn print_success(message: impl Display) {
    println!("{}", tagged(Level::Success, message));
}

/// Warnings go to stdout; they are part of the normal run output.
pub fn print_warning(message: impl Display) {
    println!("{}", tagged(Level::Warning, message));
}

/// Errors go to stderr so they stay visible when stdout is redirected.
pub fn print_error(message: impl Display) {
    eprintln!("{}", tagged(Level::Error, message));
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Name Cleaner                                      ║
║     Recursive file and folder name sanitizer          ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print what is about to happen before asking for confirmation.
pub fn print_run_warning(root: &Path, dry_run: bool) {
    println!();
    println!(
        "About to clean filenames and foldernames in: {}",
        style(root.display()).bold()
    );
    if dry_run {
        print_info("Dry run: nothing will be renamed.");
    } else {
        print_warning(
            "This will rename both files and folders to contain only alphanumeric characters.",
        );
    }
}

/// Print one rename line: `Renamed file: <old> -> <new name>`.
pub fn print_rename(kind: EntryKind, old: &Path, new: &Path, dry_run: bool) {
    let verb = if dry_run { "Would rename" } else { "Renamed" };
    println!(
        "{} {}: {} -> {}",
        verb,
        kind.label(),
        old.display(),
        style(file_name_lossy(new)).green()
    );
}

/// Print one line for an entry that was already clean.
pub fn print_skipped(kind: EntryKind, path: &Path) {
    println!(
        "{}",
        style(format!("Skipped {} (already clean): {}", kind.label(), path.display())).dim()
    );
}
