//! CLI mode implementation
//!
//! Command-line interface for the catalog lookup tools

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aduanal CLI
#[derive(Parser)]
#[command(name = "aduanal")]
#[command(about = "Customs error-catalog lookup utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path to the unified error-catalog CSV
    #[arg(long, global = true, env = "ADUANAL_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Directory with normative reference documents
    #[arg(long, global = true, env = "ADUANAL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interpret an error code or free-text description
    Query(QueryArgs),
    /// Show a summary of the loaded catalog
    Info(InfoArgs),
    /// List the normative reference fragments
    Normativa(NormativaArgs),
    /// Start the interactive assistant loop
    Interactive,
}

/// Query tool arguments
#[derive(Parser, Clone, Debug)]
pub struct QueryArgs {
    /// Error code or description, e.g. "codigo 2350" or "tipo de cambio"
    #[arg(short = 'q', long)]
    pub query: String,

    /// Maximum number of results to display
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Emit results as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Info tool arguments
#[derive(Parser, Clone, Debug)]
pub struct InfoArgs {
    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Normativa tool arguments
#[derive(Parser, Clone, Debug)]
pub struct NormativaArgs {
    /// Emit the full fragments as JSON
    #[arg(long)]
    pub json: bool,
}
