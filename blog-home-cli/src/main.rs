//! blog-home CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use blog_home::observability::{self, ObservabilityConfig};
use blog_home_cli_lib::{ConfigCommand, RenderCommand, SERVICE_NAME};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blog-home")]
#[command(version)]
#[command(about = "Render blog home pages from entry listings", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one page of the home page
    Render {
        /// JSON file of entry listings, newest first (`-` for stdin)
        #[arg(short, long)]
        entries: PathBuf,
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Configuration file (defaults to the usual search locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the recommended configuration path
    Path,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "blog_home=debug,blog_home_cli_lib=debug"
    } else {
        "warn"
    };
    let mut logging = ObservabilityConfig::new(SERVICE_NAME).with_default_filter(filter);
    if cli.log_json {
        logging = logging.with_json();
    }
    observability::init_with(&logging)?;

    match cli.command {
        Commands::Render {
            entries,
            page,
            config,
            output,
        } => {
            RenderCommand::new(entries, page)
                .with_config(config)
                .with_output(output)
                .execute()?;
        }
        Commands::Config { command } => {
            let cmd = match command {
                ConfigCommands::Path => ConfigCommand::Path,
                ConfigCommands::Init { force } => ConfigCommand::Init { force },
            };
            cmd.execute()?;
        }
    }

    Ok(())
}
