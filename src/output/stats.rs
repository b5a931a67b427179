//! Statistics reporting.

use console::style;

use crate::clean::CleanStats;

/// Print the summary block for a finished run.
pub fn print_summary(stats: &CleanStats, dry_run: bool) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    if dry_run {
        println!("{}", style("Rename Operation Summary (dry run):").bold());
    } else {
        println!("{}", style("Rename Operation Summary:").bold());
    }
    println!("Files renamed: {}", style(stats.files_renamed).green());
    println!("Files skipped (already clean): {}", stats.files_skipped);
    println!("Folders renamed: {}", style(stats.folders_renamed).green());
    println!("Folders skipped (already clean): {}", stats.folders_skipped);
    if stats.errors > 0 {
        println!("Errors encountered: {}", style(stats.errors).red());
    } else {
        println!("Errors encountered: {}", stats.errors);
    }
    println!("{}", style("═".repeat(50)).dim());
}
