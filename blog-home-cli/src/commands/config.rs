//! Configuration file management

use anyhow::{Context, Result};
use blog_home::config::BlogHomeConfig;
use console::style;
use std::fs;
use std::path::{Path, PathBuf};

use crate::SERVICE_NAME;

/// Configuration subcommands
#[derive(Debug, Clone)]
pub enum ConfigCommand {
    /// Print the recommended configuration file path
    Path,
    /// Write the default configuration to the recommended path
    Init {
        /// Overwrite an existing file
        force: bool,
    },
}

impl ConfigCommand {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Self::Path => {
                println!("{}", BlogHomeConfig::recommended_path(SERVICE_NAME).display());
            }
            Self::Init { force } => {
                let path = BlogHomeConfig::create_config_dir(SERVICE_NAME)
                    .context("Failed to create configuration directory")?;
                write_default_config(&path, *force)?;
                println!(
                    "{} {}",
                    style("Created").green().bold(),
                    style(path.display()).cyan()
                );
            }
        }
        Ok(())
    }
}

/// Write the default configuration as TOML to `path`
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let toml = BlogHomeConfig::default()
        .to_toml()
        .context("Failed to serialize default configuration")?;
    fs::write(path, toml).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}
