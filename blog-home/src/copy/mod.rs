//! Static copy fragments (banner, sidebar)
//!
//! The renderer asks a [`CopyLoader`] for named fragments and splices the
//! result into the page without escaping. Fragments are trusted: they come
//! from the site owner, already rendered to HTML.
//!
//! # Examples
//!
//! ```rust
//! use blog_home::copy::{CachedCopyLoader, CopyLoader, StaticCopy};
//!
//! # fn main() -> Result<(), blog_home::error::BlogHomeError> {
//! let copy = StaticCopy::new()
//!     .with_fragment("banner.md", "<h1>Welcome</h1>")
//!     .with_fragment("sidebar.md", "<p>About</p>");
//!
//! let cached = CachedCopyLoader::new(copy);
//! assert_eq!(cached.load("banner.md")?.as_str(), "<h1>Welcome</h1>");
//! # Ok(())
//! # }
//! ```

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::config::CopySettings;
use crate::error::{BlogHomeError, BlogHomeResult};
use crate::template::helpers::SafeString;

/// Resolves copy references to renderable HTML fragments
#[cfg_attr(test, mockall::automock)]
pub trait CopyLoader: Send + Sync {
    /// Load the fragment named by `file_ref`
    ///
    /// # Errors
    ///
    /// Returns `BlogHomeError::CopyNotFound` for unknown references, or
    /// whatever the backing store reports when it fails.
    fn load(&self, file_ref: &str) -> BlogHomeResult<SafeString>;
}

/// In-memory `CopyLoader`
#[derive(Debug, Clone, Default)]
pub struct StaticCopy {
    fragments: HashMap<String, SafeString>,
}

impl StaticCopy {
    /// Create an empty loader
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader from the configured fragments table
    #[must_use]
    pub fn from_settings(copy: &CopySettings) -> Self {
        let fragments = copy
            .fragments
            .iter()
            .map(|(name, html)| (name.clone(), SafeString::new(html.as_str())))
            .collect();
        Self { fragments }
    }

    /// Add or replace a fragment
    #[must_use]
    pub fn with_fragment(
        mut self,
        file_ref: impl Into<String>,
        html: impl Into<SafeString>,
    ) -> Self {
        self.fragments.insert(file_ref.into(), html.into());
        self
    }

    /// Number of known fragments
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragments are known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl CopyLoader for StaticCopy {
    fn load(&self, file_ref: &str) -> BlogHomeResult<SafeString> {
        self.fragments
            .get(file_ref)
            .cloned()
            .ok_or_else(|| BlogHomeError::CopyNotFound(file_ref.to_string()))
    }
}

/// Memoises fragments from another loader
///
/// Successful loads are cached until [`CachedCopyLoader::clear`]; failures are
/// not cached, so a fragment that appears later is picked up.
#[derive(Debug)]
pub struct CachedCopyLoader<L> {
    inner: L,
    cache: RwLock<HashMap<String, SafeString>>,
}

impl<L: CopyLoader> CachedCopyLoader<L> {
    /// Wrap a loader
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Drop all cached fragments
    pub fn clear(&self) {
        self.cache.write().clear();
        tracing::debug!("Copy cache cleared");
    }

    /// Number of cached fragments
    pub fn cached(&self) -> usize {
        self.cache.read().len()
    }
}

impl<L: CopyLoader> CopyLoader for CachedCopyLoader<L> {
    fn load(&self, file_ref: &str) -> BlogHomeResult<SafeString> {
        if let Some(hit) = self.cache.read().get(file_ref) {
            tracing::trace!(file_ref, "Copy cache hit");
            return Ok(hit.clone());
        }

        tracing::debug!(file_ref, "Copy cache miss");
        let fragment = self.inner.load(file_ref)?;
        self.cache
            .write()
            .insert(file_ref.to_string(), fragment.clone());
        Ok(fragment)
    }
}
