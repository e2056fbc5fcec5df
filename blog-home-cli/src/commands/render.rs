//! Render the home page for one page of entries

use anyhow::{Context, Result};
use blog_home::models::read_listings;
use blog_home::prelude::*;
use console::style;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::SERVICE_NAME;

/// Render a home page from a JSON file of entry listings
#[derive(Debug, Clone)]
pub struct RenderCommand {
    entries: PathBuf,
    page: u32,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl RenderCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `entries` - JSON array of listings, newest first; `-` reads stdin
    /// * `page` - Page number, starting at 1
    pub const fn new(entries: PathBuf, page: u32) -> Self {
        Self {
            entries,
            page,
            config: None,
            output: None,
        }
    }

    /// Load configuration from this file instead of the usual locations
    #[must_use]
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    /// Write to this file instead of stdout
    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        let html = self.render()?;

        match &self.output {
            Some(path) => {
                fs::write(path, &html)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!(
                    "{} page {} to {}",
                    style("Rendered").green().bold(),
                    self.page,
                    style(path.display()).cyan()
                );
            }
            None => println!("{html}"),
        }

        Ok(())
    }

    /// Render the page to a string
    pub fn render(&self) -> Result<String> {
        let config = self.load_config()?;
        let page = PageNumber::new(self.page)?;
        let listings = self.load_listings()?;

        let urls = SiteUrlRenderer::from_settings(&config.site);
        let paginator = Paginator::from_settings(
            urls.clone(),
            listings.len(),
            &config.site,
            &config.pagination,
        );
        if !paginator.contains(page) {
            anyhow::bail!(
                "Page {page} does not exist ({} entries make {} page(s))",
                listings.len(),
                paginator.page_count()
            );
        }

        let window = paginator.window(page);
        tracing::debug!(%page, start = window.start, end = window.end, "Selected page window");

        let copy = StaticCopy::from_settings(&config.copy);
        let renderer = HomeViewRenderer::new(&config, urls, copy, paginator);
        renderer
            .render_home(&listings[window], page)
            .context("Failed to render home page")
    }

    fn load_config(&self) -> Result<BlogHomeConfig> {
        match &self.config {
            Some(path) => {
                let path = path_str(path)?;
                BlogHomeConfig::load_from(path)
                    .with_context(|| format!("Failed to load configuration from {path}"))
            }
            None => BlogHomeConfig::load_for_service(SERVICE_NAME)
                .context("Failed to load configuration"),
        }
    }

    fn load_listings(&self) -> Result<Vec<EntryListing>> {
        if self.entries == Path::new("-") {
            return read_listings(io::stdin().lock()).context("Failed to read listings from stdin");
        }

        let file = File::open(&self.entries)
            .with_context(|| format!("Failed to open {}", self.entries.display()))?;
        read_listings(BufReader::new(file))
            .with_context(|| format!("Failed to read listings from {}", self.entries.display()))
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))
}
