//! Creates a directory tree with problematic names for trying out name-cleaner.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use name_cleaner::{
    error::{exit_codes, Result},
    fixture::{create_fixture, render_tree, FIXTURE_DIR_NAME},
    output::{print_error, print_info, print_success},
};

/// Fixture generator for name-cleaner.
#[derive(Parser, Debug)]
#[command(name = "make-fixture", version, about = "Create a test tree with problematic names")]
struct Args {
    /// Folder in which the test tree is created.
    #[arg(default_value = ".")]
    parent: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(format_args!("cannot create test directory: {}", e));
            ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8)
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = create_fixture(&args.parent)?;

    print_success(format_args!("Test directory '{}' created", FIXTURE_DIR_NAME));
    println!();
    println!("Directory structure created:");
    print!("{}", render_tree(&root)?);
    println!();

    let absolute = std::fs::canonicalize(&root).unwrap_or(root);
    print_info("You can now run name-cleaner on this directory:");
    println!("  {}", absolute.display());

    Ok(())
}
