//! Resolution of logical site paths to URLs

use crate::config::SiteSettings;

/// Resolves logical paths (`/`, `/tags/rust`) to the URLs emitted in markup
#[cfg_attr(test, mockall::automock)]
pub trait UrlRenderer: Send + Sync {
    /// Resolve a logical path to a URL
    fn resolve(&self, path: &str) -> String;
}

/// `UrlRenderer` that joins paths onto a base URL
///
/// Paths that are already absolute URLs (`scheme://...`) pass through
/// untouched. An empty base yields root-relative URLs.
///
/// ```rust
/// use blog_home::urls::{SiteUrlRenderer, UrlRenderer};
///
/// let urls = SiteUrlRenderer::new("https://blog.example.com/");
/// assert_eq!(urls.resolve("/page/2"), "https://blog.example.com/page/2");
/// assert_eq!(urls.resolve("about"), "https://blog.example.com/about");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SiteUrlRenderer {
    base_url: String,
}

impl SiteUrlRenderer {
    /// Create a renderer for the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Create a renderer from site settings
    #[must_use]
    pub fn from_settings(site: &SiteSettings) -> Self {
        Self::new(site.base_url.as_str())
    }

    /// The normalized base URL (no trailing slash)
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl UrlRenderer for SiteUrlRenderer {
    fn resolve(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_string();
        }

        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }
}

/// Whether `path` starts with `scheme://`, scheme per RFC 3986
fn is_absolute(path: &str) -> bool {
    let Some((scheme, _)) = path.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
