//! Configuration management for blog-home
//!
//! Site settings are passed into the renderer explicitly at construction time.
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `BLOG_HOME_` prefix)
//! 2. `./config.toml` (development)
//! 3. `~/.config/blog-home/{service}/config.toml` (user config, XDG)
//! 4. `/etc/blog-home/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [site]
//! title = "Notes from the Shed"
//! base_url = "https://blog.example.com"
//!
//! [copy]
//! banner = "banner.md"
//! sidebar = "sidebar.md"
//!
//! [copy.fragments]
//! "banner.md" = "<h1>Notes from the Shed</h1><p>Writing about tools.</p>"
//! "sidebar.md" = "<p>About this blog</p>"
//!
//! [pagination]
//! per_page = 10
//! page_path = "/page/{page}"
//!
//! [display]
//! relative_window_days = 7
//! comments_anchor = "comments"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use blog_home::config::BlogHomeConfig;
//!
//! # fn example() -> blog_home::error::BlogHomeResult<()> {
//! let config = BlogHomeConfig::load_for_service("my-blog")?;
//! let title = &config.site.title;
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::BlogHomeResult;

/// Placeholder substituted with the page number in [`PaginationSettings::page_path`]
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Site identity and URL layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteSettings {
    /// Site title, shown in the compact banner
    pub title: String,

    /// Base URL prepended to logical paths; empty for root-relative URLs
    pub base_url: String,

    /// Logical path of the home page
    pub home_path: String,

    /// Logical path prefix for tag pages
    pub tag_path: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            base_url: String::new(),
            home_path: "/".to_string(),
            tag_path: "/tags/".to_string(),
        }
    }
}

/// Static copy references
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CopySettings {
    /// Copy reference for the full banner shown on the first page
    pub banner: String,

    /// Copy reference for the sidebar
    pub sidebar: String,

    /// Pre-rendered fragments keyed by copy reference
    pub fragments: BTreeMap<String, String>,
}

impl Default for CopySettings {
    fn default() -> Self {
        Self {
            banner: "banner.md".to_string(),
            sidebar: "sidebar.md".to_string(),
            fragments: BTreeMap::new(),
        }
    }
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationSettings {
    /// Entries per page
    pub per_page: usize,

    /// Logical path pattern for pages after the first
    pub page_path: String,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            per_page: 10,
            page_path: format!("/page/{PAGE_PLACEHOLDER}"),
        }
    }
}

/// Display settings for entry listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Timestamps younger than this many days render as relative ("3 days ago")
    pub relative_window_days: i64,

    /// Fragment anchor appended to entry URLs for the comments link
    pub comments_anchor: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            relative_window_days: 7,
            comments_anchor: "comments".to_string(),
        }
    }
}

/// Complete blog-home configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BlogHomeConfig {
    /// Site identity
    #[serde(default)]
    pub site: SiteSettings,

    /// Banner and sidebar copy
    #[serde(default)]
    pub copy: CopySettings,

    /// Pagination
    #[serde(default)]
    pub pagination: PaginationSettings,

    /// Entry display
    #[serde(default)]
    pub display: DisplaySettings,
}

impl BlogHomeConfig {
    /// Load configuration for a specific service
    ///
    /// # Errors
    ///
    /// Returns [`BlogHomeError::Config`](crate::error::BlogHomeError::Config) if
    /// a configuration file cannot be read or parsed, or if values fail type
    /// conversion.
    pub fn load_for_service(service_name: &str) -> BlogHomeResult<Self> {
        let mut figment = Self::defaults()?;

        let system_config = PathBuf::from("/etc/blog-home")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        Ok(figment.merge(Self::env()).extract()?)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override values from the file.
    ///
    /// # Errors
    ///
    /// Returns [`BlogHomeError::Config`](crate::error::BlogHomeError::Config) if
    /// the file contains invalid TOML or values fail type conversion.
    pub fn load_from(path: &str) -> BlogHomeResult<Self> {
        let config = Self::defaults()?
            .merge(Toml::file(path))
            .merge(Self::env())
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use blog_home::config::BlogHomeConfig;
    ///
    /// let path = BlogHomeConfig::recommended_path("my-blog");
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("blog-home")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    /// Create config directory for a service, returning the config file path
    ///
    /// # Errors
    ///
    /// Returns [`BlogHomeError::Io`](crate::error::BlogHomeError::Io) if the
    /// directory cannot be created.
    pub fn create_config_dir(service_name: &str) -> BlogHomeResult<PathBuf> {
        let config_path = Self::recommended_path(service_name);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(config_path)
    }

    /// Serialize this configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be represented as TOML.
    pub fn to_toml(&self) -> BlogHomeResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn defaults() -> BlogHomeResult<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn env() -> Env {
        Env::prefixed("BLOG_HOME_").split("__").lowercase(true)
    }
}
