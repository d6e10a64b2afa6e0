//! hashname CLI - rename images to their content hash and print their sizes.
//!
//! # Usage
//!
//! ```bash
//! # Rename everything in ./png, then print each image's dimensions
//! hashname
//!
//! # Run a single stage against another directory
//! hashname rename ./photos
//! hashname dimensions ./photos
//!
//! # Show the effective configuration
//! hashname config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;

/// hashname - rename images to their content hash and print their sizes.
#[derive(Parser, Debug)]
#[command(name = "hashname")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Read settings from this TOML file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rename files to their hash, then print image dimensions (default)
    Run(cli::run::DirArgs),

    /// Rename every file to `<HASH>.<ext>`
    Rename(cli::run::DirArgs),

    /// Print `[name]: width height` for every image
    Dimensions(cli::run::DirArgs),

    /// View configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so a bad config file is reported by the
    // returned error rather than through tracing.
    let config = hashname_core::Config::load(cli.config.as_deref())?;
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("hashname v{}", hashname_core::VERSION);

    match cli.command {
        None => cli::run::execute_run(&config, cli::run::DirArgs::default()),
        Some(Commands::Run(args)) => cli::run::execute_run(&config, args),
        Some(Commands::Rename(args)) => cli::run::execute_rename(&config, args),
        Some(Commands::Dimensions(args)) => cli::run::execute_dimensions(&config, args),
        Some(Commands::Config(args)) => cli::config::execute(&config, args),
    }
}
