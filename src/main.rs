//! Name Cleaner - CLI entry point.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use name_cleaner::{
    clean::clean_tree,
    cli::{read_confirmation, read_directory, Args},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    fs::validate_root_directory,
    output::{
        create_item_bar, print_banner, print_error, print_info, print_run_warning, print_summary,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&e);
            match e {
                Error::InvalidDirectory(_) => ExitCode::from(exit_codes::INVALID_DIRECTORY as u8),
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    print_banner();

    // Load configuration
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let directory = match &args.directory {
        Some(dir) => dir.clone(),
        None => PathBuf::from(read_directory(&mut input, &mut output)?),
    };
    let root = validate_root_directory(&directory)?;

    print_run_warning(&root, config.options.dry_run);
    if !args.yes && !read_confirmation(&mut input, &mut output)? {
        print_info("Operation cancelled by user.");
        return Ok(());
    }

    let bar = create_item_bar("Cleaning");
    let stats = clean_tree(&root, &config, &bar)?;
    bar.finish_and_clear();

    tracing::info!(
        "Run finished: {} renamed, {} skipped, {} errors",
        stats.total_renamed(),
        stats.total_skipped(),
        stats.errors
    );
    print_summary(&stats, config.options.dry_run);

    Ok(())
}
