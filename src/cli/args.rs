//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Recursive file and folder name cleaner.
#[derive(Parser, Debug)]
#[command(
    name = "name-cleaner",
    version,
    about = "Clean file and folder names below a directory",
    long_about = "Renames every file and folder below a directory so names contain only \
                  alphanumeric characters.\n\n\
                  Other characters become underscores, file extensions are kept, and \
                  collisions get a numeric suffix."
)]
pub struct Args {
    /// Directory to clean. Asked for interactively when omitted.
    pub directory: Option<PathBuf>,

    /// Don't ask for confirmation before renaming.
    #[arg(short, long)]
    pub yes: bool,

    /// Only report what would be renamed.
    #[arg(long)]
    pub dry_run: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "name-cleaner.toml")]
    pub config: PathBuf,

    /// Name used for entries that have nothing left after cleaning.
    #[arg(long, env = "NAME_CLEANER_SENTINEL")]
    pub sentinel: Option<String>,

    /// Hide per-entry rename lines.
    #[arg(long, short)]
    pub quiet: bool,

    /// Show entries that were already clean.
    #[arg(long)]
    pub show_skipped: bool,

    /// Descend into symlinked folders.
    #[arg(long)]
    pub follow_links: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(sentinel) = &self.sentinel {
            config.options.sentinel = sentinel.clone();
        }

        // Boolean flags (only override if set to non-default)
        if self.dry_run {
            config.options.dry_run = true;
        }

        if self.quiet {
            config.options.show_renames = false;
            config.options.show_skipped = false;
        }

        if self.show_skipped {
            config.options.show_skipped = true;
        }

        if self.follow_links {
            config.options.follow_links = true;
        }
    }
}
