//! aduanal — customs error-catalog lookup utility
//!
//! Dual-mode application:
//! - Interactive mode (default): assistant prompt loop on stdin
//! - CLI mode: direct subcommand execution (`query`, `info`, `normativa`)
//!
//! The catalog and normative corpus are loaded once per session and reused
//! for every query.

mod cache;
mod catalog;
mod cli;
mod corpus;
mod error;
mod search;
mod tools;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cache::SessionCache;
use cli::{Cli, Commands};
use error::AppError;

fn main() -> Result<()> {
    // Detect mode: CLI if args present, interactive assistant otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        run_cli_mode()
    } else {
        run_interactive_mode(None, None)
    }
}

/// Run in CLI mode
fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let mut cache = build_cache(cli.catalog, cli.data_dir);

    let result = match cli.command {
        Some(Commands::Query(args)) => tools::query::execute_query(&args, &mut cache),
        Some(Commands::Info(args)) => tools::info::execute_info(&args, &mut cache),
        Some(Commands::Normativa(args)) => tools::normativa::execute_normativa(&args, &mut cache),
        Some(Commands::Interactive) | None => {
            return tools::interactive::run_interactive(&mut cache).map_err(Into::into);
        }
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error [{}]: {}", e.error_code(), e.message());
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Run in interactive mode (default when invoked with no arguments)
fn run_interactive_mode(catalog: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    info!("Starting aduanal interactive assistant");

    let mut cache = build_cache(catalog, data_dir);
    tools::interactive::run_interactive(&mut cache)?;
    Ok(())
}

/// Build the session cache from CLI overrides and defaults
fn build_cache(catalog: Option<PathBuf>, data_dir: Option<PathBuf>) -> SessionCache {
    let catalog_path = SessionCache::resolve_catalog_path(catalog);
    let data_dir = data_dir.unwrap_or_else(|| PathBuf::from(cache::DEFAULT_DATA_DIR));
    SessionCache::new(catalog_path, data_dir)
}

/// Map AppError to exit code
fn get_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::InvalidInput(_) => 1,
        AppError::CatalogLoad(_) => 2,
        AppError::NotFound(_) => 3,
        AppError::Internal(_) => 5,
    }
}
